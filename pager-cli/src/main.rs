mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pager_core::{Dispatcher, Navigation, Pager};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use report::{ClickOutcome, PagerReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary with the rendered button row
    Console,
    /// Machine-readable layout and click results
    Json,
    /// Markdown table of the rendered items
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "pager-cli", version)]
#[command(about = "Show which pager buttons render for a page and simulate clicks on them")]
struct Args {
    /// Active page (1-based)
    #[arg(long)]
    current: u32,

    /// Total number of pages
    #[arg(long)]
    total: u32,

    /// Numbered buttons per block
    #[arg(long)]
    visible_pages: u32,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Simulate a click: first, prev, next, or a page number (repeatable)
    #[arg(long, value_parser = parse_click)]
    click: Vec<Navigation>,

    /// Optional path to write the report to instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log every dispatch
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let pager = Pager::new(args.current, args.total, args.visible_pages)
        .context("invalid pager arguments")?;
    let clicks = simulate_clicks(pager, &args.click);
    let report = PagerReport::new(&pager, clicks);

    if args.output.is_some() {
        colored::control::set_override(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Console => report::write_console(&mut output_target, &report)?,
        ReportFormat::Json => report::write_json(&mut output_target, &report)?,
        ReportFormat::Markdown => report::write_markdown(&mut output_target, &report)?,
    }
    output_target.flush()?;
    Ok(())
}

fn parse_click(raw: &str) -> Result<Navigation, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "first" => Ok(Navigation::FirstPage),
        "prev" => Ok(Navigation::PrevBlock),
        "next" => Ok(Navigation::NextBlock),
        other => other
            .parse::<u32>()
            .map(Navigation::Page)
            .map_err(|_| format!("expected first, prev, next or a page number (got {raw:?})")),
    }
}

fn simulate_clicks(pager: Pager, clicks: &[Navigation]) -> Vec<ClickOutcome> {
    let dispatcher = Dispatcher::new(
        pager,
        Some(|page: u32| log::info!("host received page {page}")),
    );
    clicks
        .iter()
        .map(|&action| match dispatcher.dispatch(action) {
            Ok(page) => ClickOutcome {
                action,
                page,
                error: None,
            },
            Err(err) => {
                log::warn!("click {action:?} rejected: {err}");
                ClickOutcome {
                    action,
                    page: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect()
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            current: 8,
            total: 20,
            visible_pages: 5,
            report: ReportFormat::Json,
            click: Vec::new(),
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn parse_click_accepts_keywords_and_numbers() {
        assert_eq!(parse_click("first"), Ok(Navigation::FirstPage));
        assert_eq!(parse_click("PREV"), Ok(Navigation::PrevBlock));
        assert_eq!(parse_click(" next "), Ok(Navigation::NextBlock));
        assert_eq!(parse_click("12"), Ok(Navigation::Page(12)));
        assert!(parse_click("last").is_err());
        assert!(parse_click("-3").is_err());
    }

    #[test]
    fn simulate_clicks_reports_noops_and_rejections() {
        let pager = Pager::new(1, 20, 5).unwrap();
        let outcomes = simulate_clicks(
            pager,
            &[Navigation::FirstPage, Navigation::Page(3), Navigation::Page(9)],
        );
        assert_eq!(outcomes[0].page, None);
        assert!(outcomes[0].error.is_none());
        assert_eq!(outcomes[1].page, Some(3));
        assert!(outcomes[2].error.is_some());
    }

    #[test]
    fn run_rejects_invalid_inputs() {
        let args = Args {
            current: 0,
            ..base_args()
        };
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid current"));
    }

    #[test]
    fn run_writes_json_report_to_file() {
        let temp = std::env::temp_dir().join("pager-cli-unit-report.json");
        let args = Args {
            output: Some(temp.clone()),
            click: vec![Navigation::NextBlock],
            ..base_args()
        };
        run(&args).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["visible_range"]["start"], 8);
        assert_eq!(value["clicks"][0]["page"], 13);
    }
}
