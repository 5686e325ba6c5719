use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use huffpress::Session;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "huffpress")]
#[command(version)]
#[command(about = "Frequency-driven prefix-free byte packing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a file (the output carries no header and can only be decoded
    /// by the session that produced it)
    Compress {
        /// File to pack
        input: PathBuf,

        /// Where to write the packed stream
        output: PathBuf,
    },
    /// Pack a file and immediately unpack it in the same session, then
    /// verify the reconstruction matches the input
    RoundTrip {
        /// File to pack
        input: PathBuf,

        /// Where to write the packed stream
        packed: PathBuf,

        /// Where to write the reconstructed bytes
        restored: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compress { input, output } => {
            let mut session = Session::new();
            session
                .compress_file(&input, &output)
                .with_context(|| format!("packing {}", input.display()))?;
            report(&input, &output, &session)?;
        }
        Commands::RoundTrip {
            input,
            packed,
            restored,
        } => {
            let mut session = Session::new();
            session
                .compress_file(&input, &packed)
                .with_context(|| format!("packing {}", input.display()))?;
            session
                .decompress_file(&packed, &restored)
                .with_context(|| format!("unpacking {}", packed.display()))?;

            let original = fs::read(&input)?;
            let recovered = fs::read(&restored)?;
            if original != recovered {
                bail!(
                    "round trip mismatch: {} and {} differ",
                    input.display(),
                    restored.display()
                );
            }

            report(&input, &packed, &session)?;
            println!("round trip OK ({} bytes)", original.len());
        }
    }

    Ok(())
}

fn report(input: &Path, output: &Path, session: &Session) -> Result<()> {
    let in_len = fs::metadata(input)?.len();
    let out_len = fs::metadata(output)?.len();
    let pad_bits = session.pad_bits().unwrap_or(0);

    let ratio = if in_len > 0 {
        out_len as f64 / in_len as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "{} -> {}: {} -> {} bytes ({:.1}%), {} pad bits",
        input.display(),
        output.display(),
        in_len,
        out_len,
        ratio,
        pad_bits
    );
    Ok(())
}
