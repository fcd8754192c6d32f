use anyhow::Result;
use clap::{Parser, Subcommand};
use pv_scaffold::{EmitError, EmitOptions, APP_CODE};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pv-scaffold")]
#[command(about = "Writes the PV financial model Streamlit app", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Write the app file (default when no command is given)
    Emit {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the app source without writing anything
    Show,

    Version,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Emit { output }) => emit_file(output)?,
        Some(Commands::Show) => show_app(&mut io::stdout().lock())?,
        Some(Commands::Version) => {
            println!("pv-scaffold {}", env!("CARGO_PKG_VERSION"));
        }
        None => emit_file(None)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout only ever carries the confirmation line.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn emit_options(output: Option<PathBuf>) -> EmitOptions {
    output
        .map(EmitOptions::with_destination)
        .unwrap_or_default()
}

fn emit_file(output: Option<PathBuf>) -> Result<()> {
    let options = emit_options(output);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit_file_to(&options, &mut handle)
}

fn emit_file_to<W: Write>(options: &EmitOptions, out: &mut W) -> Result<()> {
    let destination = options.destination.display();
    tracing::debug!(path = %destination, "emitting");

    pv_scaffold::emit_to(options, out).map_err(|err| {
        let context = match &err {
            EmitError::Write { .. } => format!("could not create {}", destination),
            EmitError::Confirm(_) => {
                format!("wrote {} but could not print confirmation", destination)
            }
        };
        anyhow::Error::new(err).context(context)
    })?;

    Ok(())
}

fn show_app<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(APP_CODE.as_bytes())?;
    out.flush()?;
    Ok(())
}
