use std::io;
use std::path::PathBuf;

use boothroi::data::scenario::load_session;
use boothroi::{App, commands, init_logging};
use boothroi_core::config::InputField;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boothroi")]
#[command(about = "A terminal trade show ROI calculator")]
struct Args {
    /// Path to the data directory (default: ~/.boothroi/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Scenario file (YAML) with inputs, industry, exhibitor and benchmarks
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Industry to compare against
    #[arg(short, long)]
    industry: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the calculated metrics
    Report {
        #[arg(long)]
        json: bool,
    },
    /// Write the CSV export
    Export {
        /// Output directory (default: current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Evaluate the metrics across one input's range
    Sweep {
        /// Input to vary, e.g. leads, conversion-rate, booth-design
        #[arg(short, long)]
        field: InputField,

        #[arg(short, long, default_value_t = 11)]
        steps: usize,

        #[arg(long)]
        json: bool,
    },
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".boothroi")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let session = load_session(args.config.as_deref(), args.industry)?;
    let current_dir = std::env::current_dir()?;

    let mut stdout = io::stdout().lock();
    match args.command {
        Some(Command::Report { json }) => commands::report(&session, json, &mut stdout)?,
        Some(Command::Export { out }) => {
            commands::export(&session, &out.unwrap_or(current_dir), &mut stdout)?;
        }
        Some(Command::Sweep { field, steps, json }) => {
            commands::run_sweep(&session, field, steps, json, &mut stdout)?
        }
        None => {
            drop(stdout);
            let mut app = App::new(session, current_dir);

            ratatui::run(|terminal| app.run(terminal))?;

            tracing::info!("Application shutting down");

            if let Err(err) = ratatui::try_restore() {
                tracing::error!("Failed to restore terminal: {err}");
            }
        }
    }

    Ok(())
}
