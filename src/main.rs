use anyhow::Result;
use clap::Parser;

use roman_processor::pipeline::is_stdio;
use roman_processor::{process_file, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging().init();

    process_file(&cli.input, &cli.output, cli.format)?;

    // Stdout carries the records themselves
    if !is_stdio(&cli.output) {
        println!(
            "Processing complete. Check {} for results.",
            cli.output.display()
        );
    }

    Ok(())
}
