mod cli;

use std::process::ExitCode;

use clap::Parser;
use convergent::generator;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    let grammar = cli.grammar.grammar();
    if cli.print_grammar {
        print!("{}", grammar);
        return ExitCode::SUCCESS;
    }

    let start = cli.start.clone().unwrap_or_else(|| grammar.start_symbol.clone());
    let settings = cli.settings();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let amount = cli.amount.unwrap_or(1);
    log::info!("generating {} sentence(s) from {:?} starting at `{}`", amount, cli.grammar, start);

    for _ in 0..amount {
        match generator::generate_with_override(&grammar, &start, &settings, &mut rng) {
            Ok(sentence) => println!("{}", sentence),
            Err(error) => {
                eprintln!("{}", error);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
