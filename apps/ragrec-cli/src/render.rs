//! Renderers for recommendation pages.

use std::io::Write;

use ragrec_core::config::OutputFormat;
use ragrec_core::traits::Renderer;
use ragrec_core::types::{Block, KeyValue, PageConfig};
use serde::Serialize;

const BOLD: &str = "\x1b[1m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Build the renderer for a configured output format.
pub fn renderer_for(format: OutputFormat, color: bool, out: Box<dyn Write>) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TerminalRenderer::new(out, color)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out)),
    }
}

/// Plain-text rendering with optional ANSI styling.
///
/// The page banner is printed once per distinct page, so a long interactive
/// session does not repeat it after every answer.
pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    current_page: Option<PageConfig>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color, current_page: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color { format!("{style}{text}{RESET}") } else { text.to_string() }
    }

    fn underlined(&mut self, text: &str, rule: char) -> anyhow::Result<()> {
        let line: String = std::iter::repeat(rule).take(text.chars().count().max(3)).collect();
        let text = self.paint(BOLD, text);
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn key_values(&mut self, entries: &[KeyValue]) -> anyhow::Result<()> {
        for kv in entries {
            let key = self.paint(BOLD, &kv.key);
            writeln!(self.out, "  - {key}: `{}`", kv.value)?;
        }
        Ok(())
    }

    fn table(&mut self, columns: &[String], rows: &[Vec<String>]) -> anyhow::Result<()> {
        let widths = column_widths(columns, rows);
        let header = self.paint(BOLD, &format_row(columns, &widths));
        writeln!(self.out, "{header}")?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(self.out, "{}", rule.join("-+-"))?;
        for row in rows {
            writeln!(self.out, "{}", format_row(row, &widths))?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self, page: &PageConfig) -> anyhow::Result<()> {
        if self.current_page.as_ref() != Some(page) {
            self.underlined(&format!("{} {}", page.icon, page.title), '=')?;
            self.current_page = Some(page.clone());
        }
        Ok(())
    }

    fn render(&mut self, block: &Block) -> anyhow::Result<()> {
        match block {
            Block::Title { text } => {
                writeln!(self.out)?;
                self.underlined(text, '=')?;
            }
            Block::Heading { text } => {
                writeln!(self.out)?;
                self.underlined(text, '-')?;
            }
            Block::Markdown { text } => {
                writeln!(self.out, "{}", emphasize(text, self.color))?;
            }
            Block::KeyValues { entries } => self.key_values(entries)?,
            Block::Info { text } => {
                for line in text.lines() {
                    let line = self.paint(CYAN, &format!("│ {line}"));
                    writeln!(self.out, "{line}")?;
                }
            }
            Block::Warning { text } => {
                let text = self.paint(YELLOW, text);
                writeln!(self.out, "{text}")?;
            }
            Block::Expander { label, body } => {
                let label = self.paint(BOLD, label);
                writeln!(self.out)?;
                writeln!(self.out, "▸ {label}")?;
                for line in emphasize(body, self.color).lines() {
                    writeln!(self.out, "    {line}")?;
                }
            }
            Block::Table { columns, rows } => self.table(columns, rows)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PageDocument<'a> {
    page: &'a PageConfig,
    blocks: &'a [Block],
}

/// Collects a page and writes it as one JSON document on `finish`.
pub struct JsonRenderer<W: Write> {
    out: W,
    page: Option<PageConfig>,
    blocks: Vec<Block>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, page: None, blocks: Vec::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn begin(&mut self, page: &PageConfig) -> anyhow::Result<()> {
        self.page = Some(page.clone());
        self.blocks.clear();
        Ok(())
    }

    fn render(&mut self, block: &Block) -> anyhow::Result<()> {
        self.blocks.push(block.clone());
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        let Some(page) = self.page.take() else {
            anyhow::bail!("finish called before begin");
        };
        let doc = PageDocument { page: &page, blocks: &self.blocks };
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        writeln!(self.out)?;
        self.out.flush()?;
        self.blocks.clear();
        Ok(())
    }
}

/// Replace `**bold**` spans with ANSI bold, or drop the markers without color.
fn emphasize(text: &str, color: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, part) in text.split("**").enumerate() {
        if i % 2 == 1 && color {
            out.push_str(BOLD);
            out.push_str(part);
            out.push_str(RESET);
        } else {
            out.push_str(part);
        }
    }
    out
}

fn column_widths(columns: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(c.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let cell = cells.get(i).map_or("", String::as_str);
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_markers_are_stripped_without_color() {
        assert_eq!(emphasize("a **b** c", false), "a b c");
        assert_eq!(emphasize("a **b** c", true), format!("a {BOLD}b{RESET} c"));
    }

    #[test]
    fn rows_pad_to_widest_cell() {
        let columns = vec!["A".to_string(), "Bee".to_string()];
        let rows = vec![vec!["long".to_string(), "x".to_string()]];
        let widths = column_widths(&columns, &rows);
        assert_eq!(widths, vec![4, 3]);
        assert_eq!(format_row(&columns, &widths), "A    | Bee");
        assert_eq!(format_row(&rows[0], &widths), "long | x");
    }
}
