//! lz78-cli - Command-line interface for the lz78 crate
//!
//! A command-line tool for compressing and decompressing files with the
//! adaptive LZ78 dictionary coder, plus a diagnostic bit-string dump.

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use lz78::{decode_bytes, encode_bytes, encode_to_bit_string, LiteralCoding};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lz78-cli")]
#[command(about = "A CLI tool for adaptive LZ78 compression and decompression")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a packed LZ78 stream
    Compress {
        /// Input file to compress
        input: PathBuf,

        /// Output compressed file
        output: PathBuf,

        /// Literal coding mode
        #[arg(short, long, value_enum, default_value_t = CliLiteralCoding::Byte)]
        literals: CliLiteralCoding,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a packed LZ78 stream
    Decompress {
        /// Input compressed file
        input: PathBuf,

        /// Output decompressed file
        output: PathBuf,

        /// Literal coding mode the stream was encoded with
        #[arg(short, long, value_enum, default_value_t = CliLiteralCoding::Byte)]
        literals: CliLiteralCoding,

        /// Force overwrite of output file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the encoding of a file as a string of 0s and 1s
    Trace {
        /// Input file to encode
        input: PathBuf,

        /// Literal coding mode
        #[arg(short, long, value_enum, default_value_t = CliLiteralCoding::Byte)]
        literals: CliLiteralCoding,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum CliLiteralCoding {
    /// Full 8-bit literals (any data)
    Byte,
    /// 1-bit literals over the {'A','B'} alphabet
    TwoSymbol,
}

impl From<CliLiteralCoding> for LiteralCoding {
    fn from(literals: CliLiteralCoding) -> Self {
        match literals {
            CliLiteralCoding::Byte => LiteralCoding::Byte,
            CliLiteralCoding::TwoSymbol => LiteralCoding::TwoSymbol,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            literals,
            force,
        } => compress_file(
            &input,
            &output,
            literals.into(),
            force,
            cli.verbose,
            cli.quiet,
        ),
        Commands::Decompress {
            input,
            output,
            literals,
            force,
        } => decompress_file(
            &input,
            &output,
            literals.into(),
            force,
            cli.verbose,
            cli.quiet,
        ),
        Commands::Trace { input, literals } => trace_file(&input, literals.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check_paths(
    input: &PathBuf,
    output: &PathBuf,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }
    if output.exists() && !force {
        return Err(format!(
            "Output file '{}' already exists. Use --force to overwrite",
            output.display()
        )
        .into());
    }
    Ok(())
}

fn progress_for(input_size: usize, quiet: bool, message: &'static str) -> Option<ProgressBar> {
    if quiet || input_size <= 1024 * 1024 {
        return None;
    }
    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message);
    Some(pb)
}

fn compress_file(
    input: &PathBuf,
    output: &PathBuf,
    literals: LiteralCoding,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Compressing '{}' to '{}'",
            input.display(),
            output.display()
        );
        println!("Literals: {:?}", literals);
    }

    let start_time = Instant::now();

    let input_data = fs::read(input)?;
    let input_size = input_data.len();

    if verbose {
        println!("Input size: {} bytes", input_size);
    }

    let progress = progress_for(input_size, quiet, "Compressing...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let packed =
        encode_bytes(&input_data, literals).map_err(|e| format!("Compression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Compression complete");
    }

    fs::write(output, &packed)?;

    let compression_time = start_time.elapsed();
    let output_size = packed.len();
    let compression_ratio = if input_size > 0 {
        (output_size as f64 / input_size as f64) * 100.0
    } else {
        100.0
    };

    if !quiet {
        println!("Compression successful");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        println!("  Ratio:  {:.1}%", compression_ratio);
        println!("  Time:   {:.2?}", compression_time);

        if compression_ratio > 100.0 {
            println!("  Note: File expanded during compression (common for small/random data)");
        }
    }

    Ok(())
}

fn decompress_file(
    input: &PathBuf,
    output: &PathBuf,
    literals: LiteralCoding,
    force: bool,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_paths(input, output, force)?;

    if verbose {
        println!(
            "Decompressing '{}' to '{}'",
            input.display(),
            output.display()
        );
    }

    let start_time = Instant::now();

    let packed = fs::read(input)?;
    let input_size = packed.len();

    if verbose {
        println!("Compressed size: {} bytes", input_size);
    }

    let progress = progress_for(input_size, quiet, "Decompressing...");
    if let Some(ref pb) = progress {
        pb.inc(1);
    }

    let restored =
        decode_bytes(&packed, literals).map_err(|e| format!("Decompression failed: {}", e))?;

    if let Some(ref pb) = progress {
        pb.inc(1);
        pb.finish_with_message("Decompression complete");
    }

    fs::write(output, &restored)?;

    let decompression_time = start_time.elapsed();
    let output_size = restored.len();

    if !quiet {
        println!("Decompression successful");
        println!("  Input:  {} bytes", input_size);
        println!("  Output: {} bytes", output_size);
        println!("  Time:   {:.2?}", decompression_time);
    }

    Ok(())
}

fn trace_file(input: &PathBuf, literals: LiteralCoding) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file '{}' does not exist", input.display()).into());
    }

    let data = fs::read(input)?;
    let bits = encode_to_bit_string(&data, literals)
        .map_err(|e| format!("Compression failed: {}", e))?;

    println!("{}", bits);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input_path = dir.path().join("input.txt");
        let compressed_path = dir.path().join("compressed.lz78");
        let output_path = dir.path().join("output.txt");

        let test_data = b"Hello, World! This is a test of the lz78 CLI tool.";
        fs::write(&input_path, test_data)?;

        compress_file(
            &input_path,
            &compressed_path,
            LiteralCoding::Byte,
            false,
            false,
            true,
        )?;

        decompress_file(
            &compressed_path,
            &output_path,
            LiteralCoding::Byte,
            false,
            false,
            true,
        )?;

        let result_data = fs::read(&output_path)?;
        assert_eq!(test_data, &result_data[..]);

        Ok(())
    }

    #[test]
    fn test_overwrite_guard() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let input_path = dir.path().join("input.txt");
        let output_path = dir.path().join("output.lz78");

        fs::write(&input_path, b"data")?;
        fs::write(&output_path, b"already here")?;

        let result = compress_file(
            &input_path,
            &output_path,
            LiteralCoding::Byte,
            false,
            false,
            true,
        );
        assert!(result.is_err());

        compress_file(
            &input_path,
            &output_path,
            LiteralCoding::Byte,
            true,
            false,
            true,
        )?;

        Ok(())
    }
}
