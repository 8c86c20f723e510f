use super::*;

/// The result of sectioning a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
  /// The full document markup after the host was rewritten.
  pub content: String,
  pub outline: OutlineEntry,
  /// Containers below the book root.
  pub sections: usize,
}

/// One container in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
  pub level: u8,
  pub class: String,
  pub id: Option<String>,
  pub title: Option<String>,
  pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
  /// Iterates over this entry and all nested entries, depth first.
  pub fn walk(&self) -> Box<dyn Iterator<Item = &OutlineEntry> + '_> {
    Box::new(
      std::iter::once(self)
        .chain(self.children.iter().flat_map(OutlineEntry::walk)),
    )
  }
}
