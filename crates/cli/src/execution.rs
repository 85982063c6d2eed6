//! crates/cli/src/execution.rs
//!
//! Runs a parsed [`Action`] against the library crates.

use std::io::Write;
use std::path::Path;

use matching::{DeltaOptions, generate_delta_file, load_delta, pretty, save_delta};
use signature::{
    ChunkSize, SignatureOptions, generate_signature_file, load_signature, save_signature,
};

use crate::command::Action;
use crate::error::CliError;

/// Executes `action`, writing its report to `stdout`.
pub fn execute<Out: Write + ?Sized>(action: &Action, stdout: &mut Out) -> Result<(), CliError> {
    match action {
        Action::Signature {
            file,
            chunk_size,
            output,
            strong,
        } => write_signature(file, *chunk_size, output, *strong, stdout),
        Action::Delta {
            signature,
            updated,
            chunk_size,
            output,
            verify_strong,
        } => write_delta(signature, updated, *chunk_size, output, *verify_strong, stdout),
        Action::Print { delta } => print_delta(delta, stdout),
    }
}

fn write_signature<Out: Write + ?Sized>(
    file: &Path,
    chunk_size: ChunkSize,
    output: &Path,
    strong: bool,
    stdout: &mut Out,
) -> Result<(), CliError> {
    let options = SignatureOptions::new(chunk_size).with_strong_digests(strong);
    let table =
        generate_signature_file(file, options).map_err(|source| CliError::GenerateSignature {
            path: file.to_path_buf(),
            source,
        })?;
    save_signature(output, &table).map_err(|source| CliError::WriteSignature {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        target: "rdiff::signature",
        blocks = table.block_count(),
        entries = table.len(),
        chunk_size = chunk_size.get(),
        output = %output.display(),
        "signature written"
    );
    writeln!(stdout, "Signatures generated and saved to: {}", output.display())?;
    Ok(())
}

fn write_delta<Out: Write + ?Sized>(
    signature: &Path,
    updated: &Path,
    chunk_size: Option<ChunkSize>,
    output: &Path,
    verify_strong: bool,
    stdout: &mut Out,
) -> Result<(), CliError> {
    let table = load_signature(signature).map_err(|source| CliError::ReadSignature {
        path: signature.to_path_buf(),
        source,
    })?;
    if verify_strong && !table.has_strong_digests() {
        tracing::warn!(
            target: "rdiff::delta",
            signature = %signature.display(),
            "signature carries no strong digests; matches are not verified"
        );
    }

    let mut options = DeltaOptions::new().with_verify_strong(verify_strong);
    if let Some(chunk_size) = chunk_size {
        options = options.with_chunk_size(chunk_size);
    }
    let delta = generate_delta_file(&table, updated, options).map_err(|source| {
        CliError::GenerateDelta {
            path: updated.to_path_buf(),
            source,
        }
    })?;
    save_delta(output, &delta).map_err(|source| CliError::WriteDelta {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        target: "rdiff::delta",
        records = delta.len(),
        deleted = delta.deleted_blocks().count(),
        literal_bytes = delta.literal_bytes_total(),
        output = %output.display(),
        "delta written"
    );
    writeln!(stdout, "Delta generated and saved to: {}", output.display())?;
    Ok(())
}

fn print_delta<Out: Write + ?Sized>(path: &Path, stdout: &mut Out) -> Result<(), CliError> {
    let delta = load_delta(path).map_err(|source| CliError::ReadDelta {
        path: path.to_path_buf(),
        source,
    })?;
    writeln!(stdout, "Pretty Delta:")?;
    pretty::render(&delta, stdout)?;
    Ok(())
}
