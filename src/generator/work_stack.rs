use rand::Rng;

use super::{choose_alternative, push_terminal, GenerateError, Settings, UsageCounts};
use crate::grammar::{Alternative, Grammar, Symbol};

// An alternative being expanded, and the index of its next element
struct Frame<'g> {
    alternative: &'g Alternative,
    next: usize,
}

/// Expands `start` using a heap-allocated stack of frames instead of the call
/// stack. Memory grows with derivation depth, up to `settings.max_depth`
/// frames.
pub(super) fn generate<'g, R: Rng + ?Sized>(
    start: &str,
    grammar: &'g Grammar,
    settings: &Settings,
    counts: &mut UsageCounts<'g>,
    rng: &mut R,
    sentence: &mut String,
) -> Result<(), GenerateError> {
    let mut stack = Vec::new();
    let result = expand(start, grammar, settings, counts, rng, sentence, &mut stack);

    // Anything still on the stack was abandoned by an error
    for frame in stack.drain(..).rev() {
        counts.decrement(frame.alternative);
    }

    result
}

fn expand<'g, R: Rng + ?Sized>(
    start: &str,
    grammar: &'g Grammar,
    settings: &Settings,
    counts: &mut UsageCounts<'g>,
    rng: &mut R,
    sentence: &mut String,
    stack: &mut Vec<Frame<'g>>,
) -> Result<(), GenerateError> {
    let alternative = choose_alternative(start, 1, grammar, settings, counts, rng)?;
    counts.increment(alternative);
    stack.push(Frame { alternative, next: 0 });

    while let Some(frame) = stack.last_mut() {
        let alternative = frame.alternative;
        let Some(element) = alternative.get(frame.next) else {
            counts.decrement(alternative);
            stack.pop();
            continue;
        };
        frame.next += 1;

        match element {
            Symbol::Terminal(text) => push_terminal(sentence, text),
            Symbol::Nonterminal(name) => {
                let depth = stack.len() + 1;
                let alternative = choose_alternative(name, depth, grammar, settings, counts, rng)?;
                counts.increment(alternative);
                stack.push(Frame { alternative, next: 0 });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generator::Strategy;

    #[test]
    fn depth_does_not_use_the_call_stack() {
        // The zero source always takes alternative 0, so `L` recurses until
        // the ceiling, far deeper than a test thread's stack would allow
        let grammar = Grammar::from_table(&[
            ("L", &[&["x", "L"], &["end"]]),
        ]);
        let settings = Settings {
            max_depth: 200_000,
            strategy: Strategy::WorkStack,
            ..Settings::default()
        };

        let mut counts = UsageCounts::new();
        let mut sentence = String::new();
        let error = generate("L", &grammar, &settings, &mut counts, &mut StepRng::new(0, 0), &mut sentence).unwrap_err();
        assert_eq!(error.location.depth, 200_001);
        assert_eq!(sentence.len(), "x ".len() * 200_000);
        assert!(counts.is_idle());
    }

    #[test]
    fn matches_recursion_on_success() {
        let grammar = Grammar::from_table(&[
            ("E", &[&["n"], &["(", "E", ")"], &["E", "+", "E"]]),
        ]);
        let settings = Settings::default();

        for seed in 0..50 {
            let mut recursive = String::new();
            crate::generator::generate_nonterminal(
                "E", 1, &grammar, &settings, &mut UsageCounts::new(), &mut StdRng::seed_from_u64(seed), &mut recursive
            ).unwrap();

            let mut iterative = String::new();
            generate("E", &grammar, &settings, &mut UsageCounts::new(), &mut StdRng::seed_from_u64(seed), &mut iterative).unwrap();

            assert_eq!(recursive, iterative);
        }
    }

    #[test]
    fn stack_is_drained_on_error() {
        let grammar = Grammar::from_table(&[
            ("A", &[&["a", "B", "b"]]),
            ("B", &[&["B", "c"]]),
        ]);
        let settings = Settings {
            max_depth: 10,
            strategy: Strategy::WorkStack,
            ..Settings::default()
        };

        let mut counts = UsageCounts::new();
        let mut sentence = String::new();
        let result = generate("A", &grammar, &settings, &mut counts, &mut StdRng::seed_from_u64(22), &mut sentence);
        assert!(result.is_err());
        assert!(counts.is_idle());
    }
}
