//! outline CLI - batch outline extraction from layout dumps

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use layout_outline::{
    render, BatchOptions, BatchProcessor, FontStatistics, HeadingLevel, JsonFormat,
    OutlineExtractor, SourceRegistry,
};

const DEFAULT_INPUT_DIR: &str = "/app/input";
const DEFAULT_OUTPUT_DIR: &str = "/app/output";

#[derive(Parser)]
#[command(name = "outline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer document titles and heading outlines from layout dumps", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Batch arguments used when no subcommand is given
    #[command(flatten)]
    batch: BatchArgs,
}

impl Cli {
    /// The subcommand to run; batch when none was given.
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Batch(self.batch))
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
struct BatchArgs {
    /// Input directory
    #[arg(short, long, value_name = "DIR", env = "OUTLINE_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, value_name = "DIR", env = "OUTLINE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Process documents one at a time
    #[arg(long)]
    sequential: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Process every layout file in a directory (default command)
    Batch(BatchArgs),

    /// Infer the outline of a single layout file
    File {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show font statistics and heading counts for a layout file
    Stats {
        /// Input layout file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.into_command() {
        Commands::Batch(args) => cmd_batch(&args),
        Commands::File {
            input,
            output,
            compact,
        } => cmd_file(&input, output.as_deref(), compact),
        Commands::Stats { input } => cmd_stats(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_batch(args: &BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (input, output) = (args.input.as_path(), args.output.as_path());
    let options = BatchOptions::new()
        .with_format(json_format(args.compact))
        .with_parallel(!args.sequential);
    let processor = BatchProcessor::new(SourceRegistry::with_defaults(), options);

    let inputs = processor.discover(input)?;
    log::debug!("Discovered {} layout files in {}", inputs.len(), input.display());
    if inputs.is_empty() {
        println!(
            "{} {}",
            "No layout files found in".yellow(),
            input.display()
        );
        return Ok(());
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = processor.run_files(&inputs, output, |result| {
        if let Some(name) = result.input.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        pb.inc(1);
    })?;

    pb.finish_with_message("Done!");

    println!("\n{}", "Results:".green().bold());
    for result in &report.results {
        let name = result.input.display();
        match &result.outcome {
            Ok(doc) => println!(
                "  {} {} -> {} ({} headings)",
                "✓".green(),
                name,
                doc.output.display(),
                doc.heading_count
            ),
            Err(e) => println!("  {} {}: {}", "✗".red(), name, e),
        }
    }

    println!(
        "\n{} {} processed, {} failed",
        "Done!".green().bold(),
        report.success_count(),
        report.failure_count()
    );

    Ok(())
}

fn cmd_file(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let outline = layout_outline::outline_file(input)?;
    let json = render::to_json(&outline, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_stats(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = SourceRegistry::with_defaults().load(input)?;
    let stats = FontStatistics::collect(&doc);
    let outline = OutlineExtractor::default().extract(&doc);

    println!("{}", "Layout Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Spans".bold(), stats.span_count);
    println!("{}: {}", "Font signatures".bold(), stats.signature_count);

    match &stats.dominant {
        Some(sig) => println!(
            "{}: {}pt {} (flags {})",
            "Body font".bold(),
            sig.size,
            sig.font_name,
            sig.flags
        ),
        None => println!("{}: {}", "Body font".bold(), "none (no text)".dimmed()),
    }

    println!();
    println!("{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Title".bold(), outline.title);
    for level in HeadingLevel::ALL {
        println!("{}: {}", level.as_str().bold(), outline.count_level(level));
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "outline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline inference from layout data");
    println!();
    println!("License: MIT");
}
