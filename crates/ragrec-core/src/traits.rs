use crate::types::{Block, PageConfig};

/// Output surface for recommendation pages.
///
/// Implementations own presentation only; every decision about what to show
/// has already been made by the time blocks arrive here.
pub trait Renderer {
    fn begin(&mut self, page: &PageConfig) -> anyhow::Result<()>;
    fn render(&mut self, block: &Block) -> anyhow::Result<()>;

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn render_page(&mut self, page: &PageConfig, blocks: &[Block]) -> anyhow::Result<()> {
        self.begin(page)?;
        for block in blocks {
            self.render(block)?;
        }
        self.finish()
    }
}
