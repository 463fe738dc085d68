/*
    This module generates sentences
*/

mod usage;
mod weighted;
mod work_stack;

use rand::prelude::*;
use std::fmt::Display;

use crate::grammar::*;
use crate::error_handling::*;

pub use usage::UsageCounts;
pub use weighted::weighted_choice;
use weighted::alternative_weights;

#[derive(Debug, PartialEq)]
pub enum GenerateErrorType {
    // A nonterminal has no rule in the grammar
    UnknownSymbol(String),
    // A rule exists but has nothing to choose from
    MalformedGrammar(String),
    // The derivation went deeper than the configured ceiling
    RecursionLimitExceeded(usize),
    // The convergence factor must lie strictly between 0 and 1
    InvalidConvergenceFactor(f64),
}

impl ErrorType for GenerateErrorType {}

impl Display for GenerateErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateErrorType::UnknownSymbol(symbol) => write!(f, "No definition for nonterminal `{}`", symbol),
            GenerateErrorType::MalformedGrammar(symbol) => write!(f, "Nonterminal `{}` has no alternatives", symbol),
            GenerateErrorType::RecursionLimitExceeded(limit) => write!(f, "Derivation is deeper than {} symbols", limit),
            GenerateErrorType::InvalidConvergenceFactor(factor) => write!(f, "Convergence factor {} is not between 0 and 1", factor),
        }
    }
}

pub type GenerateError = Error<GenerateErrorType>;
pub type GenResult = Result<String, GenerateError>;

/// How a derivation is walked. Both strategies draw from the random source
/// in the same order, so they produce the same sentence for the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Expand nonterminals with direct recursion
    #[default]
    Recursive,
    /// Expand nonterminals from an explicit stack of pending frames
    WorkStack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Decay applied to an alternative each time it is open on the current
    /// branch. Smaller values give shorter sentences.
    pub convergence_factor: f64,
    /// Deepest nesting of nonterminals allowed, counting the start symbol
    pub max_depth: usize,
    pub strategy: Strategy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            convergence_factor: 0.01,
            max_depth: 1000,
            strategy: Strategy::Recursive,
        }
    }
}

/// Generates a sentence in the given grammar starting with its start symbol
pub fn generate<R: Rng + ?Sized>(grammar: &Grammar, settings: &Settings, rng: &mut R) -> GenResult {
    generate_with_override(grammar, &grammar.start_symbol, settings, rng)
}

/// Generates a sentence in the given grammar starting with the given symbol.
/// Every call starts from fresh usage counts.
pub fn generate_with_override<R: Rng + ?Sized>(grammar: &Grammar, start: &str, settings: &Settings, rng: &mut R) -> GenResult {
    let mut counts = UsageCounts::new();
    generate_with_counts(grammar, start, settings, &mut counts, rng)
}

/// Generates a sentence using caller-owned usage counts.
///
/// Whatever is open in `counts` when this is called keeps weighing down the
/// matching alternatives for the whole derivation, so reusing one instance
/// across calls is only sound while it is idle. On return, success or not,
/// `counts` holds exactly what it held before the call. Each thread needs its
/// own instance.
pub fn generate_with_counts<'g, R: Rng + ?Sized>(
    grammar: &'g Grammar,
    start: &str,
    settings: &Settings,
    counts: &mut UsageCounts<'g>,
    rng: &mut R,
) -> GenResult {
    let factor = settings.convergence_factor;
    if !(factor > 0.0 && factor < 1.0) {
        return Err(GenerateError {
            location: Location::new(start, 0),
            error: GenerateErrorType::InvalidConvergenceFactor(factor)
        });
    }

    log::debug!("generating from `{}` ({:?}, factor {}, max depth {})", start, settings.strategy, factor, settings.max_depth);

    let mut sentence = String::new();
    match settings.strategy {
        Strategy::Recursive => generate_nonterminal(start, 1, grammar, settings, counts, rng, &mut sentence)?,
        Strategy::WorkStack => work_stack::generate(start, grammar, settings, counts, rng, &mut sentence)?,
    }

    log::debug!("generated {} bytes from `{}`", sentence.len(), start);
    Ok(sentence)
}

// Looks up `symbol` and picks one of its alternatives, weighted by how often
// each is already open on the current branch. Does not open the choice.
fn choose_alternative<'g, R: Rng + ?Sized>(
    symbol: &str,
    depth: usize,
    grammar: &'g Grammar,
    settings: &Settings,
    counts: &UsageCounts<'g>,
    rng: &mut R,
) -> Result<&'g Alternative, GenerateError> {
    let fail = |error| GenerateError {
        location: Location::new(symbol, depth),
        error
    };

    if depth > settings.max_depth {
        return Err(fail(GenerateErrorType::RecursionLimitExceeded(settings.max_depth)));
    }

    let rewrite = grammar
        .rewrite(symbol)
        .ok_or_else(|| fail(GenerateErrorType::UnknownSymbol(symbol.to_string())))?;

    let weights = alternative_weights(rewrite, counts, settings.convergence_factor);
    let index = weighted_choice(&weights, rng)
        .ok_or_else(|| fail(GenerateErrorType::MalformedGrammar(symbol.to_string())))?;

    log::trace!("{}: alternative {} of {} at depth {}", symbol, index, rewrite.len(), depth);
    Ok(&rewrite[index])
}

fn push_terminal(sentence: &mut String, text: &str) {
    sentence.push_str(text);
    sentence.push(' ');
}

fn generate_nonterminal<'g, R: Rng + ?Sized>(
    symbol: &str,
    depth: usize,
    grammar: &'g Grammar,
    settings: &Settings,
    counts: &mut UsageCounts<'g>,
    rng: &mut R,
    sentence: &mut String,
) -> Result<(), GenerateError> {
    let alternative = choose_alternative(symbol, depth, grammar, settings, counts, rng)?;

    // Closed again when `open` drops, including when `?` bails out below
    let mut open = counts.open(alternative);
    for element in alternative {
        match element {
            Symbol::Nonterminal(name) => generate_nonterminal(name, depth + 1, grammar, settings, &mut open, rng, sentence)?,
            Symbol::Terminal(text) => push_terminal(sentence, text),
        }
    }

    Ok(())
}
