use super::*;

pub struct BuildOutlineStage;

impl Stage for BuildOutlineStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let outline = Container::build(context.take_blocks());

    debug!(containers = outline.container_count(), "built outline");

    context.set_outline(outline);

    Ok(())
  }
}
