use super::*;

/// Moves everything ahead of a designated top-level block (typically the
/// title page) to the end of the book.
pub struct ReorderPrefaceStage {
  anchor: String,
}

impl ReorderPrefaceStage {
  pub fn new(anchor: impl Into<String>) -> Self {
    Self {
      anchor: anchor.into(),
    }
  }
}

impl Stage for ReorderPrefaceStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(outline) = context.outline_mut() else {
      return Ok(());
    };

    let moved = outline.move_before_anchor_to_end(&self.anchor);

    debug!(anchor = %self.anchor, moved, "reordered preface");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn moves_preface_behind_title() {
    let mut document = dom_query::Document::from(
      r#"
      <div class="container">
        <h2 id="preface">Preface</h2>
        <p>Thanks</p>
        <h1 id="title">Title</h1>
        <h1 id="one">One</h1>
      </div>
      "#,
    );

    let options = SectionizeOptions::default();

    let mut context = Context::new(&mut document, &options);

    CollectBlocksStage.run(&mut context).unwrap();
    BuildOutlineStage.run(&mut context).unwrap();
    ReorderPrefaceStage::new("title").run(&mut context).unwrap();

    let outline = context.take_outline().unwrap();

    assert_eq!(
      outline.children().iter().map(Child::id).collect::<Vec<_>>(),
      vec![Some("title"), Some("one"), Some("preface")]
    );
  }

  #[test]
  fn skips_without_outline() {
    let mut document = dom_query::Document::from("<p>Empty</p>");

    let options = SectionizeOptions::default();

    let mut context = Context::new(&mut document, &options);

    assert!(ReorderPrefaceStage::new("title").run(&mut context).is_ok());
  }
}
