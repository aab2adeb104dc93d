use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::TargetArgs;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a manual QA testing project", long_about = None)]
struct Cli {
    /// Defaults to `generate` with no options
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the directory skeleton and write every template file
    Generate {
        #[command(flatten)]
        target: TargetArgs,

        /// Output the run report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List the directories and files that would be generated
    Plan {
        #[command(flatten)]
        target: TargetArgs,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Compare an existing project against the templates
    Verify {
        #[command(flatten)]
        target: TargetArgs,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Bare invocation scaffolds the default root, as the original script did
    let command = cli.command.unwrap_or(Commands::Generate {
        target: TargetArgs::default(),
        json: false,
    });

    match command {
        Commands::Generate { target, json } => {
            commands::generate::execute(&target, json)?;
        }
        Commands::Plan { target, json } => {
            commands::plan::execute(&target, json)?;
        }
        Commands::Verify { target, json } => {
            let exit_code = commands::verify::execute(&target, json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
