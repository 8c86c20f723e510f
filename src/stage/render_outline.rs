use super::*;

/// Writes the outline back into the host in a single pass.
pub struct RenderOutlineStage;

impl Stage for RenderOutlineStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let (Some(host), Some(outline)) = (context.host(), context.take_outline())
    else {
      return Ok(());
    };

    let options = context.options();

    context.document().replace_children(host, &outline, options);

    debug!(sections = outline.container_count(), "rendered outline");

    Ok(())
  }
}
