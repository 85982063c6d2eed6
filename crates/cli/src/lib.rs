#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `rdiff`. It recognises three
//! subcommands and forwards each to the library crates:
//!
//! - `signature --file PATH --output PATH [--chunk-size N] [--strong]` builds
//!   the block signature of a base file.
//! - `delta --signature PATH --updated PATH --output PATH [--chunk-size N]
//!   [--verify-strong]` scans an updated file against a stored signature.
//! - `print --delta PATH` renders a stored delta for people.
//!
//! # Design
//!
//! [`run`] accepts an argument iterator together with handles for standard
//! output and error, so the binary and the tests share one execution path.
//! Parsing uses a [`clap`](https://docs.rs/clap/) builder definition
//! ([`clap_command`]); `-v` flags and the `RDIFF_LOG` variable configure the
//! `tracing` subscriber installed through the `logging` crate.
//!
//! # Errors
//!
//! Argument errors print clap's diagnostic and return [`ExitCode::Usage`].
//! Failures of a subcommand print `rdiff: <message>` to the error handle and
//! return the code chosen by [`CliError::exit_code`].
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["rdiff", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("rdiff "));
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use logging::VerbosityConfig;

mod command;
mod error;
mod execution;
mod exit_code;

pub use command::{Action, Invocation, PROGRAM_NAME, clap_command, parse_args};
pub use error::CliError;
pub use execution::execute;
pub use exit_code::ExitCode;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code that should be used by the caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let invocation = match parse_args(arguments) {
        Ok(invocation) => invocation,
        Err(error) => return report_parse_error(&error, stdout, stderr),
    };

    logging::init_tracing(VerbosityConfig::from_verbose_level(invocation.verbose));
    tracing::debug!(target: "rdiff::cli", action = ?invocation.action, "starting");

    match execute(&invocation.action, stdout) {
        Ok(()) => ExitCode::Ok.as_i32(),
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code().as_i32()
        }
    }
}

fn report_parse_error<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{error}");
            ExitCode::Ok.as_i32()
        }
        _ => {
            let _ = write!(stderr, "{error}");
            ExitCode::Usage.as_i32()
        }
    }
}

/// Converts a numeric status into a process exit code, clamping it into the
/// range a process can report.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
