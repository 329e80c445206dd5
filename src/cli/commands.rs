use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use log::warn;

use crate::filters::parse_filter;
use crate::index_storage::{CATALOG_FILENAME, load_catalog, write_catalog};
use crate::indexer::{CatalogStats, build_index};
use crate::models::{DEFAULT_STATUS, FacetGroup};
use crate::present::{format_duration, format_updated, pick_icon, results_label};
use crate::query::{PageToken, QueryEngine, ViewResult};
use crate::utils::format_path_with_tilde;

/// Default directory scanned for codelabs
pub const DEFAULT_SOURCE_DIR: &str = "./codelabs";

#[derive(Parser)]
#[command(name = "codelab-catalog")]
#[command(version = "0.1.0")]
#[command(about = "Build and browse a catalog of codelab tutorials", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Directory to index when no subcommand is given [default: ./codelabs]
    pub source: Option<PathBuf>,
    /// Catalog file to write when no subcommand is given [default: codelabs.json]
    pub output: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree for codelab.json files and write the catalog
    Build {
        /// Directory containing exported codelabs
        #[arg(default_value = DEFAULT_SOURCE_DIR)]
        source: PathBuf,
        /// Catalog file to write
        #[arg(default_value = CATALOG_FILENAME)]
        output: PathBuf,
    },
    /// Search, filter, sort and page through a built catalog
    Query(QueryArgs),
    /// Show statistics about a built catalog
    Stats {
        #[arg(long, default_value = CATALOG_FILENAME)]
        catalog: PathBuf,
    },
}

#[derive(Args)]
pub struct QueryArgs {
    #[arg(long, default_value = CATALOG_FILENAME)]
    pub catalog: PathBuf,
    /// Case-insensitive text to search for
    #[arg(short, long)]
    pub search: Option<String>,
    /// Facet filter, e.g. `category:Web tag:"machine learning"`
    #[arg(short, long)]
    pub filter: Option<String>,
    #[arg(long = "category")]
    pub categories: Vec<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long = "author")]
    pub authors: Vec<String>,
    /// title-asc, title-desc, updated-desc, updated-asc, duration-asc or duration-desc
    #[arg(long, default_value = "title-asc")]
    pub sort: String,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Print the computed view as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Build { source, output }) => run_build(source, output),
        Some(Commands::Query(args)) => run_query(args),
        Some(Commands::Stats { catalog }) => show_stats(catalog),
        None => run_build(
            cli.source.as_deref().unwrap_or(Path::new(DEFAULT_SOURCE_DIR)),
            cli.output.as_deref().unwrap_or(Path::new(CATALOG_FILENAME)),
        ),
    }
}

fn run_build(source: &Path, output: &Path) -> Result<()> {
    let source_display = std::path::absolute(source).unwrap_or_else(|_| source.to_path_buf());

    println!("Scanning for codelabs...");
    println!("  Directory: {}", format_path_with_tilde(&source_display));

    let report = build_index(source);
    println!("  Found {} codelab(s)", report.discovered);

    if report.entries.is_empty() {
        warn!("No codelabs found. Make sure you have exported codelabs to the directory.");
    } else {
        println!();
        println!("Processing codelabs...");
        for entry in &report.entries {
            println!("  ✓ {}", entry.title);
        }
    }
    if !report.failures.is_empty() {
        println!("  Skipped {} item(s) with errors", report.failures.len());
    }

    write_catalog(output, &report.entries)
        .with_context(|| format!("Failed to write catalog to {}", output.display()))?;

    let output_display = std::path::absolute(output).unwrap_or_else(|_| output.to_path_buf());
    println!();
    println!("Index built successfully!");
    println!("  Output: {}", format_path_with_tilde(&output_display));
    println!("  Total: {} codelab(s)", report.entries.len());

    let stats = report.stats();
    println!();
    println!("Statistics:");
    println!("  Categories: {}", stats.categories);
    println!("  Tags: {}", stats.tags);
    println!("  Authors: {}", stats.authors);

    Ok(())
}

fn run_query(args: &QueryArgs) -> Result<()> {
    let mut engine = QueryEngine::load(&args.catalog);
    if let Some(message) = engine.load_error() {
        eprintln!("Error: {}", message);
    }

    if let Some(search) = &args.search {
        engine.set_search(search);
    }

    if let Some(filter) = &args.filter {
        let selections = parse_filter(filter).context("Invalid --filter expression")?;
        for chip in selections.chips() {
            engine.select(chip.group, &chip.value);
        }
    }
    let flagged = [
        (FacetGroup::Categories, &args.categories),
        (FacetGroup::Tags, &args.tags),
        (FacetGroup::Authors, &args.authors),
    ];
    for (group, values) in flagged {
        for value in values {
            engine.select(group, value);
        }
    }

    engine.set_sort(args.sort.as_str());

    if args.page != 1 && !engine.go_to_page(args.page) {
        warn!("Page {} is out of range (1-{}), showing page 1", args.page, engine.total_pages());
    }

    let view = engine.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view).context("Failed to serialize view")?);
    } else {
        print_view(&view);
    }

    Ok(())
}

fn print_view(view: &ViewResult) {
    println!(
        "{} (page {} of {})",
        results_label(view.total_results),
        view.current_page,
        view.total_pages
    );

    if !view.chips.is_empty() {
        let chips: Vec<String> = view
            .chips
            .iter()
            .map(|chip| format!("{}:{}", chip.group.singular(), chip.value))
            .collect();
        println!("Active filters: {}", chips.join(", "));
    }
    if view.fallback {
        println!("No codelabs matched the current filters; showing the full catalog.");
    }

    let now = Utc::now();
    for entry in &view.page_entries {
        let duration = format_duration(entry.duration);
        let updated = format_updated(&entry.updated, now);

        println!();
        println!("[{}] {}", pick_icon(entry), entry.title);
        println!(
            "    {} | {}",
            if duration.is_empty() { "–" } else { duration.as_str() },
            if updated.is_empty() { "No date" } else { updated.as_str() }
        );
        if !entry.categories.is_empty() {
            let shown: Vec<&str> = entry.categories.iter().take(3).map(String::as_str).collect();
            println!("    {}", shown.join(", "));
        }
        let summary: &str =
            if entry.summary.is_empty() { "No description available" } else { &entry.summary };
        println!("    {}", summary);
        println!("    {}", entry.url);
    }

    if view.total_pages > 1 {
        let tokens: Vec<String> = view
            .page_tokens
            .iter()
            .map(|token| match token {
                PageToken::Page(page) if *page == view.current_page => format!("[{}]", page),
                other => other.to_string(),
            })
            .collect();
        println!();
        println!("Pages: {}", tokens.join(" "));
    }
}

fn show_stats(catalog: &Path) -> Result<()> {
    let entries = load_catalog(catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
    let stats = CatalogStats::from_entries(&entries);

    println!("Codelab Catalog Statistics");
    println!("==========================");
    println!("Total codelabs: {}", stats.entries);
    println!("  Categories: {}", stats.categories);
    println!("  Tags: {}", stats.tags);
    println!("  Authors: {}", stats.authors);
    println!();
    println!("Catalog: {}", format_path_with_tilde(catalog));

    let drafts = entries.iter().filter(|e| e.status == DEFAULT_STATUS).count();
    println!("Drafts: {}", drafts);

    Ok(())
}
