use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::bail;
use color_eyre::Result;

use venn_rs::{LabelOptions, Regions};

#[derive(Debug, Parser)]
#[command(author, version, about = "Print Venn diagram region labels")]
struct Cli {
    /// Group given inline as comma-separated elements (repeatable).
    #[arg(short, long, value_name = "ELEMENTS")]
    group: Vec<String>,

    /// Group read from a file, one element per line (repeatable).
    #[arg(short, long, value_name = "FILE")]
    file: Vec<PathBuf>,

    /// Label fragments: logic, number, percent (repeatable).
    #[arg(long, value_name = "FILL", default_value = "number")]
    fill: Vec<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn split_inline(group: &str) -> Vec<String> {
    group
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut groups: Vec<Vec<String>> = cli.group.iter().map(|g| split_inline(g)).collect();
    for path in &cli.file {
        log::info!("Reading group {} from {:?}", groups.len(), path);
        groups.push(read_lines(path)?);
    }
    if groups.is_empty() {
        bail!("No groups given, use --group or --file");
    }

    let options = LabelOptions::from_fill(&cli.fill);
    log::info!("Labeling {} groups with {:?}", groups.len(), options);

    let regions = Regions::new(groups)?;
    log::info!("Universe has {} elements", regions.universe_len());

    for (key, label) in regions.labels(&options)? {
        println!("{}\t{}", key, label);
    }

    Ok(())
}
