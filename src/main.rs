//! kindling - Kindle notebook export to Markdown

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use kindling::{Error, Settings, compose_document, decode_text, extract, write_note};

#[derive(Parser)]
#[command(name = "kindling")]
#[command(version, about = "Convert Kindle notebook HTML exports to Markdown notes", long_about = None)]
#[command(after_help = "EXAMPLES:
    kindling notebook.html -o notes/     Import highlights into notes/
    kindling -i notebook.html            Show title, author, and count")]
struct Cli {
    /// Kindle notebook export (HTML)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Folder where the note is created (overrides settings)
    #[arg(short, long, value_name = "FOLDER")]
    output_folder: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long, value_name = "FILE", default_value = "kindling.json")]
    settings: PathBuf,

    /// Show export metadata without writing a note
    #[arg(short, long)]
    info: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> kindling::Result<()> {
    let bytes = std::fs::read(&cli.input)?;
    let extraction = extract(&decode_text(&bytes));

    if cli.info {
        println!("File: {}", cli.input.display());
        println!("Title: {}", extraction.title);
        println!("Author: {}", extraction.author);
        println!("Highlights: {}", extraction.highlight_count);
        return Ok(());
    }

    let folder = match &cli.output_folder {
        Some(folder) => folder.clone(),
        None => PathBuf::from(Settings::load(&cli.settings)?.path),
    };

    let document = compose_document(&extraction);
    let path = write_note(&folder, &extraction.title, &document)?;

    if !cli.quiet {
        println!("Created {}", path.display());
        println!(
            "  {} by {}: {} highlights",
            extraction.title, extraction.author, extraction.highlight_count
        );
    }
    Ok(())
}

/// User-facing error messages for the two destination failure modes.
fn describe(e: &Error) -> String {
    match e {
        Error::DestinationMissing(path) => format!(
            "invalid path {}: please select a valid folder",
            path.display()
        ),
        Error::DestinationConflict(path) => {
            format!("a note already exists at {}", path.display())
        }
        other => other.to_string(),
    }
}
