mod backend;
mod cli;
mod config;
mod dataset;
mod enrich;
mod error;
mod generator;
mod llm;
mod ranking;
mod report;
mod sentiment;
mod tagging;
mod telemetry;
mod types;

use crate::error::FairfoundError;
use crate::types::RunStatus;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DEGRADED: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn status_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Complete => exit_code::SUCCESS,
        RunStatus::Degraded => exit_code::DEGRADED,
    }
}

fn run() -> Result<i32, FairfoundError> {
    let cli = cli::Cli::parse();
    dotenvy::dotenv().ok();
    if let Err(e) = telemetry::init(cli.verbose, cli.quiet) {
        eprintln!("warning: {e}");
    }

    let loaded = config::load_config(&cli.config)?;
    match cli.command {
        cli::Commands::Enrich(cmd) => {
            let status = enrich::execute_enrich(&cmd, &loaded, &cli.config)?;
            Ok(status_code(status))
        }
        cli::Commands::Tag(cmd) => {
            let status = tagging::execute_tag(&cmd, &loaded)?;
            Ok(status_code(status))
        }
        cli::Commands::Suggest(cmd) => {
            enrich::execute_suggest(&cmd)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Llm(cmd) => {
            let status = llm::execute_llm(&cmd, &loaded)?;
            Ok(status_code(status))
        }
        cli::Commands::Score(cmd) => {
            ranking::execute_score(&cmd)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Aggregate(cmd) => {
            report::execute_aggregate(&cmd)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Generate(cmd) => {
            generator::execute_generate(&cmd, &loaded)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Seed(cmd) => {
            let status = backend::execute_seed(&cmd, &loaded)?;
            Ok(status_code(status))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
