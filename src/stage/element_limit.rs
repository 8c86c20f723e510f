use super::*;

pub struct ElementLimitStage;

impl Stage for ElementLimitStage {
  fn run(&mut self, ctx: &mut Context<'_>) -> Result<()> {
    if let Some(limit) = ctx.options().max_elems_to_parse {
      let count = ctx.document().element_count();

      if count > limit {
        return Err(Error::ElementLimitExceeded {
          found: count,
          limit,
        });
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const MARKUP: &str =
    "<html><body><div class='container'><h1>One</h1><p>Two</p></div></body></html>";

  #[test]
  fn rejects_documents_over_the_limit() {
    let mut document = dom_query::Document::from(MARKUP);

    let options = SectionizeOptions::builder()
      .max_elems_to_parse(Some(3))
      .build();

    let mut context = Context::new(&mut document, &options);

    assert!(matches!(
      ElementLimitStage.run(&mut context),
      Err(Error::ElementLimitExceeded { found: 6, limit: 3 })
    ));
  }

  #[test]
  fn accepts_documents_within_the_limit() {
    let mut document = dom_query::Document::from(MARKUP);

    let options = SectionizeOptions::builder()
      .max_elems_to_parse(Some(6))
      .build();

    let mut context = Context::new(&mut document, &options);

    assert!(ElementLimitStage.run(&mut context).is_ok());
  }
}
