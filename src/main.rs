use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use diffgate::models::RunOutcome;
use diffgate::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diffgate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Working-tree diff quality gate", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the working-tree diff and gate on the risk threshold
    Check {
        /// Directory of the repository to check
        #[arg(short = 'C', long, default_value = ".")]
        dir: PathBuf,

        /// Suppress the progress spinner and advisory coloring
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    match runtime.block_on(run_async(cli)) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            // Unreachable for `check`, which converts failures into the
            // failure report itself; kept for CLI plumbing errors.
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    }
}

async fn run_async(cli: Cli) -> Result<RunOutcome> {
    match cli.command {
        Commands::Check { dir, quiet } => diffgate::cli::check::run(&dir, quiet).await,

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(RunOutcome::Success)
        }
    }
}
