//! spirv-embed CLI: embed pre-compiled SPIR-V word lists into C++.
//!
//! Provides two commands, each meant to run as its own build step:
//! `source` (one `.cpp` per word list) and `header` (one aggregate header).
//!
//! Both delegate to [`spirv_embed_core`].

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "spirv-embed",
    about = "Embed pre-compiled SPIR-V word lists into C++ sources and headers",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a spirv-in-cpp source file
    Source {
        /// Word list file to embed
        #[arg(short = 's', long)]
        src_path: PathBuf,

        /// Directory for the generated `<file>.cpp`
        #[arg(short = 'd', long)]
        dest_path: PathBuf,

        /// Namespace of the generated symbols (also accepted as `-ns`)
        #[arg(long)]
        namespace: String,
    },

    /// Generate the spirv-in-cpp header file
    Header {
        /// Word list files embedded by `source`, in declaration order
        #[arg(short = 's', long, required = true, num_args = 1..)]
        spirv_files: Vec<PathBuf>,

        /// Full file path for the generated header
        #[arg(short = 'd', long)]
        dest_path: PathBuf,

        /// Namespace of the generated symbols (also accepted as `-ns`)
        #[arg(long)]
        namespace: String,
    },

    #[command(external_subcommand)]
    Unknown(Vec<OsString>),
}

/// What a dispatched invocation amounted to.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Generated,
    InvalidCommand(String),
}

/// Rewrite the two-letter `-ns` flag, which clap cannot express as a short,
/// into `--namespace`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-ns") => OsString::from("--namespace"),
            Some(s) if s.starts_with("-ns=") => OsString::from(format!("--namespace={}", &s[4..])),
            _ => arg,
        })
        .collect()
}

fn run(command: Option<Commands>) -> anyhow::Result<Outcome> {
    debug!(?command, "dispatching");
    match command {
        Some(Commands::Source {
            src_path,
            dest_path,
            namespace,
        }) => {
            commands::source::run(&src_path, &dest_path, &namespace)?;
        }
        Some(Commands::Header {
            spirv_files,
            dest_path,
            namespace,
        }) => {
            commands::header::run(&spirv_files, &dest_path, &namespace)?;
        }
        Some(Commands::Unknown(args)) => {
            let name = args
                .first()
                .map(|a| a.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Ok(Outcome::InvalidCommand(name));
        }
        None => return Ok(Outcome::InvalidCommand(String::new())),
    }

    Ok(Outcome::Generated)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = run(cli.command)?;
    if let Outcome::InvalidCommand(name) = &outcome {
        output::print_error(&format!("Invalid command '{name}'"));
    }
    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Process exit status for a dispatched invocation.
fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Generated => 0,
        Outcome::InvalidCommand(_) => 1,
    }
}
