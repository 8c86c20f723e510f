use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
  Content,
  Heading(Level),
}

/// One node of the flat input sequence.
///
/// The payload is opaque to the tree builder; the DOM adapter stores the
/// node's id in the parsed document, tests store plain labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<T> {
  id: Option<String>,
  kind: BlockKind,
  payload: T,
  tag: String,
}

impl<T> Block<T> {
  #[must_use]
  pub fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  #[must_use]
  pub fn is_heading(&self) -> bool {
    matches!(self.kind, BlockKind::Heading(_))
  }

  #[must_use]
  pub fn kind(&self) -> BlockKind {
    self.kind
  }

  #[must_use]
  pub fn level(&self) -> Option<Level> {
    match self.kind {
      BlockKind::Heading(level) => Some(level),
      BlockKind::Content => None,
    }
  }

  pub fn new(tag: impl Into<String>, id: Option<String>, payload: T) -> Self {
    let tag = tag.into();

    Self {
      id: id.filter(|id| !id.is_empty()),
      kind: Level::from_tag(&tag).map_or(BlockKind::Content, BlockKind::Heading),
      payload,
      tag,
    }
  }

  #[must_use]
  pub fn payload(&self) -> &T {
    &self.payload
  }

  #[must_use]
  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub(crate) fn take_id(&mut self) -> Option<String> {
    self.id.take()
  }
}
