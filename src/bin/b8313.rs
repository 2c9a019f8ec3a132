//! b8313 CLI
//!
//! Encode files into 8313b64 containers and decode them back.

use anyhow::{bail, Context, Result};
use b8313::{Decoder, Encoder, SourceFile, CONTAINER_SUFFIX};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "b8313")]
#[command(version)]
#[command(about = "8313b64 container format tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a file into a .8313b64 container
    Encode {
        /// File to encode
        input: PathBuf,

        /// Output path (default: <input>.8313b64 next to the input)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Compress the container text
        #[arg(short = 'z', long)]
        compress: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode a .8313b64 container back into the original file
    #[command(name = "decode")]
    Decode {
        /// Container file to decode
        input: PathBuf,

        /// Directory to write the decoded file to (default: current directory)
        #[arg(short = 'C', long, default_value = ".")]
        directory: PathBuf,

        /// Decompress the container text before decoding
        #[arg(short = 'x', long)]
        decompress: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output, compress, verbose } => {
            encode_file(input, output, compress, verbose)?;
        }
        Commands::Decode { input, directory, decompress, verbose } => {
            decode_file(input, directory, decompress, verbose)?;
        }
    }

    Ok(())
}

fn encode_file(
    input: PathBuf,
    output: Option<PathBuf>,
    compress: bool,
    verbose: bool,
) -> Result<()> {
    let source = SourceFile::from_path(&input)?;

    let encoder = Encoder::new().with_compression(compress);
    let encoded = encoder.encode_source(&source)?;

    let output_path = output.unwrap_or_else(|| input.with_file_name(source.container_name()));

    fs::write(&output_path, &encoded)
        .with_context(|| format!("Failed to write: {}", output_path.display()))?;

    if verbose {
        println!(
            "Encoded: {} ({} bytes -> {} bytes)",
            output_path.display(),
            source.data.len(),
            encoded.len()
        );
        println!("Preview: {}...", &encoded[..encoded.len().min(100)]);
    }

    Ok(())
}

fn decode_file(input: PathBuf, directory: PathBuf, decompress: bool, verbose: bool) -> Result<()> {
    let name_hint = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !name_hint.ends_with(CONTAINER_SUFFIX) {
        bail!(
            "Not a {} container: {}",
            CONTAINER_SUFFIX,
            input.display()
        );
    }

    let container = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;

    let decoder = Decoder::new().with_decompression(decompress);
    let decoded = decoder.decode_to_dir(&container, &name_hint, &directory)?;

    if verbose {
        println!(
            "Decoded: {} ({} bytes, recovered extension {})",
            directory.join(&decoded.file_name).display(),
            decoded.data.len(),
            decoded.extension
        );
    }

    Ok(())
}
