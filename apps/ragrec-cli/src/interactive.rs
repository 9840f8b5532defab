//! Interactive prompt loop.
//!
//! Any line that is not a `/command` is treated as a use-case description for
//! the free-text recommender; `/select` walks through the three dropdowns.

use std::fmt::Display;
use std::io::{BufRead, Write};

use ragrec_core::config::UiConfig;
use ragrec_core::traits::Renderer;
use ragrec_core::types::Block;
use ragrec_freetext::form as freetext;
use ragrec_selector::form::{self as selector, Selection};
use ragrec_selector::reference::reference_blocks;
use ragrec_selector::{SimilarityMetric, UseCase, VectorStore};

pub struct Session<'a, R: BufRead, W: Write> {
    input: R,
    prompts: W,
    renderer: &'a mut dyn Renderer,
    ui: &'a UiConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, prompts: W, renderer: &'a mut dyn Renderer, ui: &'a UiConfig) -> Self {
        Self { input, prompts, renderer, ui }
    }

    /// Run until `/quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.prompts, "🧠 Interactive RAG Recommender")?;
        writeln!(self.prompts, "=============================")?;
        self.show_help()?;

        loop {
            let Some(line) = self.prompt("ragrec> ")? else { break };
            match line.as_str() {
                "/help" | "/h" => self.show_help()?,
                "/select" | "/s" => self.select()?,
                "/metrics" | "/m" => {
                    self.renderer.render_page(&self.ui.selector, &reference_blocks())?;
                }
                "/options" | "/o" => {
                    self.renderer.render_page(&self.ui.selector, &selector::options_blocks())?;
                }
                "/quit" | "/q" | "quit" | "exit" => {
                    writeln!(self.prompts, "👋 Goodbye!")?;
                    break;
                }
                cmd if cmd.starts_with('/') => {
                    writeln!(self.prompts, "❌ Unknown command: {cmd} (try /help)")?;
                }
                description => self.describe(description)?,
            }
            writeln!(self.prompts)?;
        }
        Ok(())
    }

    fn show_help(&mut self) -> anyhow::Result<()> {
        writeln!(self.prompts, "🎯 Commands:")?;
        writeln!(self.prompts, "  /select   - Pick use case, vector store and metric")?;
        writeln!(self.prompts, "  /metrics  - Metric guide and comparison table")?;
        writeln!(self.prompts, "  /options  - List the selectable values")?;
        writeln!(self.prompts, "  /help     - Show this help message")?;
        writeln!(self.prompts, "  /quit     - Exit")?;
        writeln!(self.prompts, "  <text>    - Describe your RAG use case")?;
        writeln!(self.prompts)?;
        Ok(())
    }

    fn describe(&mut self, description: &str) -> anyhow::Result<()> {
        let blocks = match freetext::submit(description) {
            Ok(blocks) => blocks,
            Err(e) => {
                tracing::warn!(error = %e, "free-text submission rejected");
                vec![Block::warning(freetext::EMPTY_INPUT_WARNING)]
            }
        };
        self.renderer.render_page(&self.ui.freetext, &blocks)
    }

    fn select(&mut self) -> anyhow::Result<()> {
        let Some(use_case) = self.choose(selector::USE_CASE_PROMPT, UseCase::ALL)? else {
            return Ok(());
        };
        let Some(vector_store) = self.choose(selector::VECTOR_STORE_PROMPT, VectorStore::ALL)?
        else {
            return Ok(());
        };
        let Some(metric) = self.choose(selector::METRIC_PROMPT, SimilarityMetric::ALL)? else {
            return Ok(());
        };

        let selection = Selection { use_case, vector_store, metric };
        self.renderer.render_page(&self.ui.selector, &selector::submit(&selection))
    }

    /// Ask for one option by number or exact label. A blank answer takes the
    /// first option; `None` means input ended.
    fn choose<T: Copy + Display>(
        &mut self,
        label: &str,
        options: &[T],
    ) -> anyhow::Result<Option<T>> {
        writeln!(self.prompts, "{label}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.prompts, "  {}. {option}", i + 1)?;
        }
        loop {
            let Some(answer) = self.prompt("choice> ")? else { return Ok(None) };
            match pick(options, &answer) {
                Some(choice) => return Ok(Some(choice)),
                None => {
                    let count = options.len();
                    writeln!(self.prompts, "❌ Enter 1-{count} or an exact option name")?;
                }
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.prompts, "{prompt}")?;
        self.prompts.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn pick<T: Copy + Display>(options: &[T], answer: &str) -> Option<T> {
    if answer.is_empty() {
        return options.first().copied();
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options.iter().copied().find(|o| o.to_string() == answer)
}
