//! crates/cli/src/command.rs
//!
//! `clap` definition of the `rdiff` command line and its parsed form.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use signature::ChunkSize;

/// Program name used in help and diagnostics.
pub const PROGRAM_NAME: &str = "rdiff";

/// A fully parsed invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    /// Number of `-v` flags.
    pub verbose: u8,
    /// Subcommand to run.
    pub action: Action,
}

/// Subcommands with their arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// `rdiff signature`
    Signature {
        /// Base file to read.
        file: PathBuf,
        /// Block size.
        chunk_size: ChunkSize,
        /// Destination of the signature.
        output: PathBuf,
        /// Record a strong digest per block.
        strong: bool,
    },
    /// `rdiff delta`
    Delta {
        /// Signature of the base file.
        signature: PathBuf,
        /// Modified file to scan.
        updated: PathBuf,
        /// Block size the caller expects the signature to use.
        chunk_size: Option<ChunkSize>,
        /// Destination of the delta.
        output: PathBuf,
        /// Confirm weak matches with strong digests.
        verify_strong: bool,
    },
    /// `rdiff print`
    Print {
        /// Delta file to render.
        delta: PathBuf,
    },
}

fn chunk_size_arg() -> Arg {
    Arg::new("chunk-size")
        .long("chunk-size")
        .short('c')
        .value_name("BYTES")
        .value_parser(|value: &str| value.parse::<ChunkSize>())
}

fn path_arg(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name(value_name)
        .help(help)
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

/// Builds the `clap` command used for parsing.
pub fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rolling-checksum file diff: signatures, deltas and delta inspection")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeat for more detail; RDIFF_LOG overrides).")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("signature")
                .about("Generate the block signature of a file.")
                .arg(path_arg("file", "PATH", "File to generate the signature for."))
                .arg(
                    chunk_size_arg()
                        .help("Size of each block in bytes.")
                        .default_value("16"),
                )
                .arg(path_arg("output", "PATH", "Where to store the signature."))
                .arg(
                    Arg::new("strong")
                        .long("strong")
                        .help("Also record a strong digest for every block.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("delta")
                .about("Generate the delta of an updated file against a signature.")
                .arg(path_arg(
                    "signature",
                    "PATH",
                    "Signature of the original file.",
                ))
                .arg(path_arg("updated", "PATH", "Updated version of the file."))
                .arg(
                    chunk_size_arg()
                        .help("Expected block size (defaults to the signature's own)."),
                )
                .arg(path_arg("output", "PATH", "Where to store the delta."))
                .arg(
                    Arg::new("verify-strong")
                        .long("verify-strong")
                        .help("Only accept matches whose strong digest also agrees.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("print")
                .about("Print a delta in human-readable form.")
                .arg(path_arg("delta", "PATH", "Delta file to print.")),
        )
}

/// Parses `arguments` (including the program name).
pub fn parse_args<I, S>(arguments: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = clap_command().try_get_matches_from(arguments)?;
    let verbose = matches.get_count("verbose");
    let action = match matches.subcommand() {
        Some(("signature", sub)) => Action::Signature {
            file: required_path(sub, "file"),
            chunk_size: sub
                .get_one::<ChunkSize>("chunk-size")
                .copied()
                .unwrap_or_default(),
            output: required_path(sub, "output"),
            strong: sub.get_flag("strong"),
        },
        Some(("delta", sub)) => Action::Delta {
            signature: required_path(sub, "signature"),
            updated: required_path(sub, "updated"),
            chunk_size: sub.get_one::<ChunkSize>("chunk-size").copied(),
            output: required_path(sub, "output"),
            verify_strong: sub.get_flag("verify-strong"),
        },
        Some(("print", sub)) => Action::Print {
            delta: required_path(sub, "delta"),
        },
        _ => {
            return Err(clap_command().error(
                clap::error::ErrorKind::MissingSubcommand,
                "a subcommand is required",
            ));
        }
    };
    Ok(Invocation { verbose, action })
}

fn required_path(matches: &ArgMatches, name: &str) -> PathBuf {
    matches.get_one::<PathBuf>(name).cloned().unwrap_or_default()
}
