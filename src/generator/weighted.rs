use rand::Rng;

use super::usage::UsageCounts;
use crate::grammar::Rewrite;

// One draw in this many skips the weights and takes the first alternative
const ESCAPE_ODDS: u32 = 5;

/// Picks an index with probability proportional to its weight, except that
/// one time in five index 0 is returned outright. If the weights never
/// account for the draw (they are all zero) the last index is returned.
///
/// Returns `None` only for an empty slice.
pub fn weighted_choice<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    if rng.gen_range(0..ESCAPE_ODDS) == 0 {
        return Some(0);
    }

    let total: f64 = weights.iter().sum();
    let mut remaining = rng.gen::<f64>() * total;
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining < 0.0 {
            return Some(index);
        }
    }

    Some(weights.len() - 1)
}

// An alternative that is open `n` times on the current path weighs
// `convergence_factor^n`; anything not open weighs 1
pub(crate) fn alternative_weights(rewrite: &Rewrite, counts: &UsageCounts<'_>, convergence_factor: f64) -> Vec<f64> {
    rewrite.iter()
        .map(|alternative| match counts.count(alternative) {
            0 => 1.0,
            n => convergence_factor.powi(n as i32),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::grammar::Symbol;

    #[test]
    fn empty_weights_have_no_choice() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_choice(&[], &mut rng), None);
    }

    #[test]
    fn single_weight_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(2);
        for weight in [1.0, 0.5, 1e-300, 0.0] {
            for _ in 0..100 {
                assert_eq!(weighted_choice(&[weight], &mut rng), Some(0));
            }
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_the_last_index() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let index = weighted_choice(&[0.0, 0.0, 0.0], &mut rng);
            assert!(index == Some(0) || index == Some(2));
        }
    }

    #[test]
    fn zero_source_takes_the_escape_hatch() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(weighted_choice(&[0.0, 1.0, 1.0], &mut rng), Some(0));
    }

    #[test]
    fn zero_weight_is_only_reached_through_the_escape_hatch() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[weighted_choice(&[1.0, 0.0, 1.0], &mut rng).unwrap()] += 1;
        }
        assert_eq!(counts[1], 0);
    }

    #[test]
    fn escape_hatch_frequency() {
        // P(0) = 1/5 + 4/5 * w0 / sum(w)
        let weight_sets: Vec<&[f64]> = vec![
            &[1.0, 3.0],
            &[1.0, 1.0],
            &[0.01, 1.0],
            &[0.0, 1.0, 1.0, 1.0]
        ];
        let expected = vec![0.4, 0.6, 0.2 + 0.8 * 0.01 / 1.01, 0.2];

        let trials = 100_000;
        let mut rng = StdRng::seed_from_u64(5);
        for (weights, expected) in zip(weight_sets, expected) {
            let zeros = (0..trials)
                .filter(|_| weighted_choice(weights, &mut rng) == Some(0))
                .count();
            let frequency = zeros as f64 / trials as f64;
            assert!((frequency - expected).abs() < 0.01, "{:?}: {} vs {}", weights, frequency, expected);
        }
    }

    #[test]
    fn weights_decay_with_open_count() {
        let terminal = vec![Symbol::Terminal("a".to_string())];
        let recursive = vec![
            Symbol::Nonterminal("S".to_string()),
            Symbol::Nonterminal("S".to_string())
        ];
        let rewrite = vec![terminal.clone(), recursive.clone()];

        let mut counts = UsageCounts::new();
        assert_eq!(alternative_weights(&rewrite, &counts, 0.01), vec![1.0, 1.0]);

        counts.increment(&rewrite[1]);
        let weights = alternative_weights(&rewrite, &counts, 0.01);
        assert_eq!(weights[0], 1.0);
        assert!((weights[1] - 0.01).abs() < 1e-12);

        counts.increment(&rewrite[1]);
        let weights = alternative_weights(&rewrite, &counts, 0.5);
        assert_eq!(weights, vec![1.0, 0.25]);

        counts.decrement(&rewrite[1]);
        counts.decrement(&rewrite[1]);
        assert_eq!(alternative_weights(&rewrite, &counts, 0.01), vec![1.0, 1.0]);
    }
}
