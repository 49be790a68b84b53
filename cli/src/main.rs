//! mdreport CLI - Markdown report to PDF renderer

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdreport::convert::{clean_output_dir, BatchConverter, BatchSummary, JobStatus, ReportJob};
use mdreport::{parse_file, render_file, RenderOptions};

#[derive(Parser)]
#[command(name = "mdreport")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render business-report Markdown to styled PDF", long_about = None)]
struct Cli {
    #[command(flatten)]
    style: StyleArgs,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct StyleArgs {
    /// Directory holding the TrueType font family
    #[arg(long, global = true, value_name = "DIR", env = "MDREPORT_FONTS_DIR")]
    fonts_dir: Option<PathBuf>,

    /// Font family name (e.g. LiberationSans)
    #[arg(long, global = true, value_name = "NAME")]
    font_name: Option<String>,

    /// Logo image drawn in the page header
    #[arg(long, global = true, value_name = "FILE")]
    logo: Option<PathBuf>,

    /// JSON file with render options
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one Markdown file to PDF
    Render {
        /// Input Markdown file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output PDF (defaults to the input with a .pdf extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render every Markdown file in a directory
    Batch {
        /// Directory containing Markdown reports
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Output directory (defaults to DIR)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Only these file names, comma separated; missing ones are reported
        #[arg(long, value_delimiter = ',', value_name = "FILES")]
        files: Vec<String>,
    },

    /// Print the parsed document flow as JSON
    Inspect {
        /// Input Markdown file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Remove generated .md and .pdf files from a directory
    Clean {
        /// Directory to clean
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Render { input, output } => {
            build_options(&cli.style).and_then(|options| cmd_render(&input, output, &options))
        }
        Commands::Batch { dir, output, files } => build_options(&cli.style)
            .and_then(|options| cmd_batch(&dir, output.as_deref(), &files, options)),
        Commands::Inspect { input, compact } => cmd_inspect(&input, compact),
        Commands::Clean { dir } => cmd_clean(&dir),
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

fn build_options(args: &StyleArgs) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => RenderOptions::from_json_file(path)?,
        None => RenderOptions::default(),
    };

    if let Some(dir) = &args.fonts_dir {
        options = options.with_fonts_dir(dir);
    }
    if let Some(name) = &args.font_name {
        options = options.with_font_name(name);
    }
    if let Some(logo) = &args.logo {
        options = options.with_logo(logo);
    }

    log::debug!(
        "fonts: {}/{}, logo: {:?}",
        options.fonts_dir.display(),
        options.font_name,
        options.logo_path
    );

    Ok(options)
}

fn cmd_render(
    input: &Path,
    output: Option<PathBuf>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| input.with_extension("pdf"));

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Rendering {}...", input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = render_file(input, &output, options);
    pb.finish_and_clear();

    if !outcome.is_success() {
        let diagnostic = outcome
            .diagnostic
            .unwrap_or_else(|| "render failed".to_string());
        return Err(diagnostic.into());
    }

    let pages = outcome.stats.map(|s| s.page_count).unwrap_or_default();
    println!(
        "{} {} ({} pages)",
        "PDF generated:".green(),
        output.display(),
        pages
    );
    Ok(())
}

fn cmd_batch(
    dir: &Path,
    output: Option<&Path>,
    files: &[String],
    options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = output.unwrap_or(dir);
    let converter = BatchConverter::new(options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Rendering reports in {}...", dir.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let reports = if files.is_empty() {
        converter.convert_dir(dir, out_dir)
    } else {
        std::fs::create_dir_all(out_dir)?;
        let jobs: Vec<ReportJob> = files
            .iter()
            .map(|name| ReportJob::for_markdown(dir.join(name.trim()), out_dir))
            .collect();
        Ok(converter.convert(&jobs))
    };
    pb.finish_and_clear();
    let reports = reports?;

    if reports.is_empty() {
        println!("{} no Markdown files in {}", "Nothing to do:".yellow(), dir.display());
        return Ok(());
    }

    for report in &reports {
        let name = report.job.input.display();
        match &report.status {
            JobStatus::Rendered(stats) => println!(
                "  {} {} -> {} ({} pages)",
                "✓".green(),
                name,
                report.job.output.display(),
                stats.page_count
            ),
            JobStatus::Missing => println!("  {} {} was not generated", "!".yellow(), name),
            JobStatus::Failed(reason) => {
                println!("  {} {}: {}", "✗".red(), name, reason.dimmed())
            }
        }
    }

    let summary = BatchSummary::from_reports(&reports);
    println!(
        "\n{} {} rendered, {} missing, {} failed",
        "Done!".green().bold(),
        summary.rendered,
        summary.missing,
        summary.failed
    );

    Ok(())
}

fn cmd_inspect(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let flow = parse_file(input)?;

    let json = if compact {
        serde_json::to_string(&flow)?
    } else {
        serde_json::to_string_pretty(&flow)?
    };
    println!("{}", json);

    Ok(())
}

fn cmd_clean(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let removed = clean_output_dir(dir)?;
    println!("{} {} files removed from {}", "Cleaned".green(), removed, dir.display());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdreport".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown report to PDF renderer");
    println!();
    println!("License: MIT");
}
