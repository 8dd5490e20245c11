//! # CRT Arm Calculator CLI
//!
//! Terminal front end for the tie-back arm calculator. Values come from
//! flags (see `crt_cli --help`) or, with `--interactive`, from prompts that
//! mirror the input form. Prints the report table, or JSON with `--json`,
//! and optionally writes the CSV export.

mod cli;
mod prompt;

use std::io;

use anyhow::Context;
use clap::Parser;

use crt_core::export::write_csv;
use crt_core::report::Calculation;

use crate::cli::Cli;
use crate::prompt::Prompter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    log::debug!("crt_cli v{} {:?}", env!("CARGO_PKG_VERSION"), cli);

    let (job, settings) = if cli.interactive {
        println!("CRT Arm Calculator");
        println!("==================");
        println!();
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.collect(cli.job(), cli.settings(), cli.edit_reveals, cli.edit_offsets)
    } else {
        (cli.job(), cli.settings())
    };

    let calc = Calculation::run(&job, &settings);

    if cli.json {
        let json = calc.to_json().context("serializing calculation")?;
        println!("{}", json);
        for warning in calc.lengths.warnings() {
            log::warn!("{}", warning);
        }
    } else {
        print_report(&calc);
    }

    if let Some(path) = &cli.csv {
        write_csv(&calc.report, path)
            .with_context(|| format!("exporting CSV to {}", path.display()))?;
        if !cli.json {
            println!();
            println!("CSV written to {}", path.display());
        }
    }

    Ok(())
}

fn print_report(calc: &Calculation) {
    println!();
    println!("CRT Arm Calculator");
    println!();
    println!("{}", calc.report.to_text_table());
    if !calc.lengths.is_feasible() {
        println!();
        println!("[CHECK] This configuration cannot be fabricated:");
        for warning in calc.lengths.warnings() {
            println!("  - {}", warning);
        }
    }
}
