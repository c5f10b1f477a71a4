//! rawextract CLI - workbook and PDF content extraction tool

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use rawextract::{
    write_output, ConvertOptions, ConverterRegistry, DocumentConverter, ExtractOptions,
    OutputOptions, PageSelection, PdfConverter, WorkbookConverter,
};

const DEFAULT_WORKBOOK_INPUT: &str = "user_input_files/financial data.xlsx";
const DEFAULT_WORKBOOK_OUTPUT: &str = "tmp/financial_data.json";
const DEFAULT_PDF_INPUT: &str = "user_input_files/School Financial App Blueprint.pdf";
const DEFAULT_PDF_OUTPUT: &str = "tmp/blueprint.txt";

#[derive(Parser)]
#[command(name = "rawextract")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract workbooks to JSON and PDFs to plain text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every sheet of a workbook to JSON
    #[command(alias = "xlsx")]
    Excel {
        /// Input workbook
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_WORKBOOK_INPUT)]
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_WORKBOOK_OUTPUT)]
        output: PathBuf,

        /// Create the output directory if it is missing
        #[arg(long)]
        create_dirs: bool,
    },

    /// Extract the text of every page of a PDF
    Pdf {
        /// Input PDF file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_PDF_INPUT)]
        input: PathBuf,

        /// Output text file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_PDF_OUTPUT)]
        output: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Keep going when a page's text cannot be extracted
        #[arg(long)]
        lenient: bool,

        /// Create the output directory if it is missing
        #[arg(long)]
        create_dirs: bool,
    },

    /// Convert any supported file, picking the extractor by extension
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Create the output directory if it is missing
        #[arg(long)]
        create_dirs: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Excel {
            input,
            output,
            create_dirs,
        }) => cmd_excel(&input, &output, create_dirs),
        Some(Commands::Pdf {
            input,
            output,
            pages,
            lenient,
            create_dirs,
        }) => cmd_pdf(&input, &output, pages.as_deref(), lenient, create_dirs),
        Some(Commands::Convert {
            input,
            output,
            create_dirs,
        }) => cmd_convert(&input, output.as_deref(), create_dirs),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: rawextract <excel|pdf|convert> [OPTIONS]".yellow());
            println!("       rawextract --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

/// Run a converter, write its content and print its preview.
fn run_converter(
    converter: &dyn DocumentConverter,
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    create_dirs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = spinner(&format!("Reading {}...", input.display()));
    let result = converter.convert(input, options);
    pb.finish_and_clear();
    let result = result?;

    write_output(
        output,
        &result.content,
        &OutputOptions::new().with_create_dirs(create_dirs),
    )?;

    println!("{}", result.preview);
    println!("{} {}", "Saved to".green(), output.display());
    Ok(())
}

fn cmd_excel(
    input: &Path,
    output: &Path,
    create_dirs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    run_converter(
        &WorkbookConverter::new(),
        input,
        output,
        &ConvertOptions::new(),
        create_dirs,
    )
}

fn cmd_pdf(
    input: &Path,
    output: &Path,
    pages: Option<&str>,
    lenient: bool,
    create_dirs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let page_selection = if let Some(p) = pages {
        PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?
    } else {
        PageSelection::All
    };

    let mut extract = ExtractOptions::new().with_pages(page_selection);
    if lenient {
        extract = extract.lenient();
    }

    run_converter(
        &PdfConverter::new(),
        input,
        output,
        &ConvertOptions::new().with_extract_options(extract),
        create_dirs,
    )
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    create_dirs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(input, &ConvertOptions::default())?;

    if let Some(path) = output {
        write_output(
            path,
            &result.content,
            &OutputOptions::new().with_create_dirs(create_dirs),
        )?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", result.content);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "rawextract".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Workbook and PDF content extraction tool");
    println!();
    println!("License: MIT");
}
