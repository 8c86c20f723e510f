use super::*;

/// Single-use transform over one parsed document.
pub struct Sectionizer {
  html: dom_query::Document,
  options: SectionizeOptions,
}

impl Sectionizer {
  pub fn new(html: &str, options: SectionizeOptions) -> Self {
    Self {
      html: dom_query::Document::from(html),
      options,
    }
  }

  pub fn parse(mut self) -> Result<Book> {
    let context = Context::new(&mut self.html, &self.options);

    let mut context = Pipeline::with_default_stages(context).run()?;

    let outline = context.take_contents().unwrap_or_else(|| OutlineEntry {
      level: Level::ROOT.get(),
      class: self.options.level_name(Level::ROOT),
      id: None,
      title: None,
      children: Vec::new(),
    });

    let sections = outline.walk().count() - 1;

    Ok(Book {
      content: self.html.html().to_string(),
      outline,
      sections,
    })
  }
}
