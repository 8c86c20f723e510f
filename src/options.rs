use super::*;

/// Class names given to containers, indexed by level.
pub const DEFAULT_LEVEL_NAMES: &[&str] =
  &["book", "chapter", "section", "sub-section", "sub-sub-section"];

#[derive(Debug, Clone)]
pub struct SectionizeOptions {
  pub host_selector: String,
  pub level_names: Vec<String>,
  pub max_elems_to_parse: Option<usize>,
  pub preface_anchor: Option<String>,
}

impl Default for SectionizeOptions {
  fn default() -> Self {
    Self {
      host_selector: ".container".to_string(),
      level_names: DEFAULT_LEVEL_NAMES
        .iter()
        .map(|name| name.to_string())
        .collect(),
      max_elems_to_parse: None,
      preface_anchor: None,
    }
  }
}

impl SectionizeOptions {
  #[must_use]
  pub fn builder() -> SectionizeOptionsBuilder {
    SectionizeOptionsBuilder::default()
  }

  /// Class name for containers at `level`; levels past the configured names
  /// fall back to `level-N`.
  #[must_use]
  pub fn level_name(&self, level: Level) -> String {
    self
      .level_names
      .get(usize::from(level.get()))
      .cloned()
      .unwrap_or_else(|| format!("level-{level}"))
  }
}

#[derive(Default)]
pub struct SectionizeOptionsBuilder {
  inner: SectionizeOptions,
}

impl SectionizeOptionsBuilder {
  #[must_use]
  pub fn build(self) -> SectionizeOptions {
    self.inner
  }

  #[must_use]
  pub fn host_selector(self, host_selector: impl Into<String>) -> Self {
    Self {
      inner: SectionizeOptions {
        host_selector: host_selector.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn level_names<I, S>(self, names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: SectionizeOptions {
        level_names: names.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_elems_to_parse(self, max_elems_to_parse: Option<usize>) -> Self {
    Self {
      inner: SectionizeOptions {
        max_elems_to_parse,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn preface_anchor(self, preface_anchor: Option<String>) -> Self {
    Self {
      inner: SectionizeOptions {
        preface_anchor,
        ..self.inner
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_levels_from_the_table() {
    let options = SectionizeOptions::default();

    assert_eq!(options.level_name(Level::ROOT), "book");
    assert_eq!(options.level_name(Level::new(1)), "chapter");
    assert_eq!(options.level_name(Level::new(4)), "sub-sub-section");
    assert_eq!(options.level_name(Level::new(6)), "level-6");
  }

  #[test]
  fn builder_overrides_defaults() {
    let options = SectionizeOptions::builder()
      .host_selector("#manuscript")
      .level_names(["volume", "part"])
      .max_elems_to_parse(Some(10))
      .preface_anchor(Some("title".into()))
      .build();

    assert_eq!(options.host_selector, "#manuscript");
    assert_eq!(options.level_name(Level::new(1)), "part");
    assert_eq!(options.level_name(Level::new(2)), "level-2");
    assert_eq!(options.max_elems_to_parse, Some(10));
    assert_eq!(options.preface_anchor.as_deref(), Some("title"));
  }
}
