//! crudgen CLI tool

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::GenerateCommand;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate a CRUD module for a resource", long_about = None)]
struct Cli {
    /// Resource name (`snake_case`, e.g. `room`, `guest_room`)
    name: String,

    /// Directory that receives the module (overrides the configured one)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Print the files that would be generated without writing them
    #[arg(long)]
    dry_run: bool,

    /// With --dry-run, print the plan as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,

    /// Configuration file (defaults to ./crudgen.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command =
        GenerateCommand::new(&cli.name, cli.output, cli.config, cli.dry_run)?.json(cli.json);
    command.execute()
}
