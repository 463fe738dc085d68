//! Random sentences from a context-free grammar, for feeding parsers.
//!
//! Generation is *convergent*: an alternative that is already open on the
//! current branch of the derivation becomes exponentially less likely to be
//! picked again, so derivations tend to stop instead of growing forever.
//!
//! ```
//! use convergent::generator::{generate, Settings};
//! use convergent::grammar::Grammar;
//! use rand::SeedableRng;
//!
//! let grammar = Grammar::from_table(&[
//!     ("S", &[&["a"], &["S", "S"]]),
//! ]);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let sentence = generate(&grammar, &Settings::default(), &mut rng).unwrap();
//! assert!(sentence.starts_with("a "));
//! ```

pub mod error_handling;
pub mod generator;
pub mod grammar;
