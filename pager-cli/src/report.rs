use anyhow::Result;
use colored::Colorize;
use pager_core::{Blocks, ItemKind, Navigation, Pager, PagerInput, PagerItem, VisibleRange};
use serde::Serialize;
use std::io::Write;

/// Result of one simulated click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickOutcome {
    pub action: Navigation,
    /// Page handed to the host callback, `None` for a no-op or rejected click.
    pub page: Option<u32>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PagerReport {
    pub input: PagerInput,
    pub blocks: Blocks,
    pub visible_range: VisibleRange,
    pub first_page_disabled: bool,
    pub prev_block_hidden: bool,
    pub next_block_hidden: bool,
    pub items: Vec<PagerItem>,
    pub clicks: Vec<ClickOutcome>,
}

impl PagerReport {
    pub fn new(pager: &Pager, clicks: Vec<ClickOutcome>) -> Self {
        Self {
            input: PagerInput::from(*pager),
            blocks: pager.blocks(),
            visible_range: pager.visible_range(),
            first_page_disabled: pager.is_first_page_disabled(),
            prev_block_hidden: pager.is_prev_block_hidden(),
            next_block_hidden: pager.is_next_block_hidden(),
            items: pager.layout(),
            clicks,
        }
    }
}

fn click_label(action: Navigation) -> String {
    match action {
        Navigation::FirstPage => "first".to_string(),
        Navigation::PrevBlock => "prev".to_string(),
        Navigation::NextBlock => "next".to_string(),
        Navigation::Page(page) => format!("page {page}"),
    }
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::FirstPage => "first page",
        ItemKind::PrevBlock => "previous block",
        ItemKind::Page => "page",
        ItemKind::NextBlock => "next block",
    }
}

fn button_row(items: &[PagerItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label).green().bold().to_string()
            } else {
                item.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn write_console<W: Write>(writer: &mut W, report: &PagerReport) -> Result<()> {
    let input = report.input;
    writeln!(writer, "{}", "📄 Pager Layout".bright_cyan().bold())?;
    writeln!(writer, "{}", "==============".cyan())?;
    writeln!(
        writer,
        "Page {} of {} ({} per block, block {} of {})",
        input.current, input.total, input.visible_pages, report.blocks.current, report.blocks.total
    )?;
    writeln!(
        writer,
        "Visible range: {}-{}",
        report.visible_range.start, report.visible_range.end
    )?;
    writeln!(writer, "{}", button_row(&report.items))?;
    writeln!(
        writer,
        "First page: {}",
        if report.first_page_disabled {
            "disabled".yellow()
        } else {
            "enabled".green()
        }
    )?;
    writeln!(
        writer,
        "Previous block: {}",
        if report.prev_block_hidden {
            "hidden".yellow()
        } else {
            "shown".green()
        }
    )?;
    writeln!(
        writer,
        "Next block: {}",
        if report.next_block_hidden {
            "hidden".yellow()
        } else {
            "shown".green()
        }
    )?;

    if !report.clicks.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", "🖱 Clicks".bright_yellow().bold())?;
        for click in &report.clicks {
            let outcome = match (&click.page, &click.error) {
                (_, Some(error)) => error.red().to_string(),
                (Some(page), None) => format!("page {page}").green().to_string(),
                (None, None) => "no-op".dimmed().to_string(),
            };
            writeln!(writer, "  • {} -> {outcome}", click_label(click.action))?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, report: &PagerReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub fn write_markdown<W: Write>(writer: &mut W, report: &PagerReport) -> Result<()> {
    let input = report.input;
    writeln!(writer, "# Pager Layout\n")?;
    writeln!(
        writer,
        "Page **{}** of {} with {} visible pages (range {}-{}).\n",
        input.current,
        input.total,
        input.visible_pages,
        report.visible_range.start,
        report.visible_range.end
    )?;
    writeln!(writer, "| Item | Label | Class |")?;
    writeln!(writer, "|------|-------|-------|")?;
    for item in &report.items {
        writeln!(
            writer,
            "| {} | {} | `{}` |",
            kind_label(item.kind),
            item.label,
            item.css_class()
        )?;
    }

    if !report.clicks.is_empty() {
        writeln!(writer, "\n## Clicks\n")?;
        for click in &report.clicks {
            let outcome = match (&click.page, &click.error) {
                (_, Some(error)) => format!("rejected: {error}"),
                (Some(page), None) => format!("page {page}"),
                (None, None) => "no-op".to_string(),
            };
            writeln!(writer, "- {}: {outcome}", click_label(click.action))?;
        }
    }
    Ok(())
}
