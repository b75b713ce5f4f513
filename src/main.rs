use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bizcheck::cli::{
    handle_check_command, handle_init_command, handle_schema_command, handle_templates_command,
    OutputFormat,
};
use bizcheck::config::TemplatePaths;
use bizcheck::BizCheckError;

#[derive(Parser)]
#[command(
    name = "bizcheck",
    version,
    about = "Validate business-data CSV templates and print a KPI snapshot",
    long_about = "bizcheck checks the sales, purchase, inventory, expense and trader \
                  templates against their fixed schemas and business rules, then \
                  computes a KPI snapshot. Any defect stops the run with a message \
                  naming the template, row and rule."
)]
struct Cli {
    /// Directory holding the CSV templates [default: ./excel_templates]
    #[arg(short = 'd', long, global = true, env = "BIZCHECK_TEMPLATES_DIR")]
    templates_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every check and print the KPI snapshot
    Check {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also export the snapshot to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check template headers only
    Schema,

    /// List the expected templates and their columns
    Templates,

    /// Create header-only template files
    Init {
        /// Overwrite existing template files
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "bizcheck=warn",
        1 => "bizcheck=info",
        _ => "bizcheck=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Exit status for a run that failed
///
/// 1 when the templates themselves are defective, 2 when the checker could
/// not do its job (unreadable directory, failed export, and so on).
fn failure_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<BizCheckError>() {
        Some(e) if e.is_validation_failure() => 1,
        _ => 2,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(failure_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = TemplatePaths::resolve(cli.templates_dir)?;
    tracing::debug!(dir = %paths.templates_dir().display(), "resolved templates directory");

    match cli.command.unwrap_or(Commands::Check {
        format: OutputFormat::Text,
        output: None,
    }) {
        Commands::Check { format, output } => handle_check_command(&paths, format, output)?,
        Commands::Schema => handle_schema_command(&paths)?,
        Commands::Templates => handle_templates_command(&paths)?,
        Commands::Init { force } => handle_init_command(&paths, force)?,
    }

    Ok(())
}
