use clap::Parser;

use convergent::generator::{Settings, Strategy};
use convergent::grammar::builtin::Builtin;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Bundled grammar to generate from
    #[arg(short, long, value_enum, default_value_t)]
    pub grammar: Builtin,

    /// Start symbol (default: first rule of the grammar)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Amount to generate (default: 1)
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub amount: Option<u32>,

    /// Decay applied to alternatives already open on a branch, between 0 and 1
    #[arg(short, long, value_name = "FACTOR", default_value_t = 0.01)]
    pub convergence: f64,

    /// Deepest nesting of nonterminals before giving up
    #[arg(long, value_name = "DEPTH", default_value_t = 1000)]
    pub max_depth: usize,

    /// How derivations are expanded
    #[arg(long, value_enum, default_value_t)]
    pub strategy: Strategy,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the grammar instead of generating from it
    #[arg(long)]
    pub print_grammar: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            convergence_factor: self.convergence,
            max_depth: self.max_depth,
            strategy: self.strategy,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
