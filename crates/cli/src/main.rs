//! CLI tool for converting presentation Markdown into a PPTX deck.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::Deck;
use deck_pptx::PptxWriter;
use std::fs;
use std::path::{Path, PathBuf};

/// Convert a presentation Markdown file into a PPTX slide deck.
///
/// The input uses one `## ` heading per slide, with an optional
/// "Tampilan slide" bullet block and "Catatan pembicara" notes block
/// per section.
#[derive(Parser, Debug)]
#[command(name = "md2pptx")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file
    input: PathBuf,

    /// Output .pptx path (default: input path with a .pptx extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the extracted deck as JSON to stdout instead of writing a file
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let deck = Deck::from_markdown(&source);

    if args.verbose {
        eprintln!("  Found {} slides", deck.slides.len());
    }

    if deck.is_empty() {
        log::warn!(
            "no '## ' headings found in {}; writing an empty deck",
            args.input.display()
        );
    }

    if args.print {
        let json = serde_json::to_string_pretty(&deck.slides)?;
        println!("{}", json);
        return Ok(());
    }

    let output_path = get_output_path(&args.input, args.output);

    let writer = PptxWriter::new();
    writer
        .write_to_path(&deck, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("Saved: {}", output_path.display());

    Ok(())
}

/// Determine the output path: explicit `--output`, or the input path with
/// its extension swapped for `.pptx`.
fn get_output_path(input_path: &Path, output: Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) => path,
        None => input_path.with_extension("pptx"),
    }
}
