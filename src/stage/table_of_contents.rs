use super::*;

/// Summarizes the built outline as nested contents entries.
pub struct TableOfContentsStage;

impl Stage for TableOfContentsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(outline) = context.take_outline() else {
      return Ok(());
    };

    let options = context.options();

    let contents = Self::entry(&context.document(), &outline, options);

    context.set_contents(contents);
    context.set_outline(outline);

    Ok(())
  }
}

impl TableOfContentsStage {
  fn entry(
    document: &Document<'_>,
    container: &Container<NodeId>,
    options: &SectionizeOptions,
  ) -> OutlineEntry {
    OutlineEntry {
      level: container.level().get(),
      class: options.level_name(container.level()),
      id: container.id().map(str::to_string),
      title: container
        .heading()
        .and_then(|heading| document.text(*heading.payload())),
      children: container
        .containers()
        .map(|child| Self::entry(document, child, options))
        .collect(),
    }
  }
}
