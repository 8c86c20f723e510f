use super::*;

/// Locates the host element and reads its children as flat blocks.
pub struct CollectBlocksStage;

impl Stage for CollectBlocksStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let selector = &context.options().host_selector;

    let document = context.document();

    let host = document.host(selector)?;

    let blocks = document.blocks(host);

    debug!(
      blocks = blocks.len(),
      headings = blocks.iter().filter(|block| block.is_heading()).count(),
      "collected blocks"
    );

    context.set_host(host);
    context.set_blocks(blocks);

    Ok(())
  }
}
