use anyhow::{Context, Result};
use clap::Parser;
use oobhunt::io::DumpReader;
use oobhunt::{autoscan, logging, report, Layout, ScanConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "oobhunt")]
#[command(about = "Locate OOB/spare areas in raw NAND flash dumps")]
struct Args {
    /// Raw NAND dump to analyze
    dump: PathBuf,

    /// Number of pages to sample for each layout
    sample_pages: Option<usize>,

    /// How far past the page to scan, in pages
    max_pages_to_scan: Option<usize>,

    /// Step size in bytes for the offset scan
    #[arg(long)]
    step: Option<usize>,

    /// Probe this PAGE:OOB layout instead of the built-in set (repeatable)
    #[arg(long = "layout", value_name = "PAGE:OOB")]
    layouts: Vec<Layout>,

    /// JSON scan configuration; command line values take precedence
    #[arg(short, long, env = "OOBHUNT_CONFIG")]
    config: Option<PathBuf>,

    /// Score offsets on all cores
    #[arg(long)]
    parallel: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn scan_config(&self) -> Result<ScanConfig> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ScanConfig::default(),
        };

        if let Some(sample_pages) = self.sample_pages {
            config.scan.sample_pages = sample_pages;
        }
        if let Some(max_pages) = self.max_pages_to_scan {
            config.scan.max_pages_to_scan = max_pages;
        }
        if let Some(step) = self.step {
            config.scan.scan_step = step;
        }
        if !self.layouts.is_empty() {
            config.layouts = self.layouts.clone();
        }
        config.scan.parallel |= self.parallel;

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.log_json {
        logging::init_tracing_json();
    } else {
        logging::init_tracing();
    }

    let config = args.scan_config()?;
    let reader = DumpReader::open(&args.dump, &config.limits)
        .with_context(|| format!("Failed to open dump {}", args.dump.display()))?;

    info!(
        path = %args.dump.display(),
        size = reader.len(),
        layouts = config.layouts.len(),
        sample_pages = config.scan.sample_pages,
        "Scanning NAND dump"
    );

    let results = autoscan(reader.as_bytes(), &config);

    if args.json {
        println!("{}", report::render_json(&results)?);
    } else {
        print!(
            "{}",
            report::render_text(&args.dump.display().to_string(), &results)
        );
    }

    Ok(())
}
