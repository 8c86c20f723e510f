use super::*;

pub(crate) struct Context<'a> {
  blocks: Vec<Block<NodeId>>,
  contents: Option<OutlineEntry>,
  host: Option<NodeId>,
  html: &'a mut dom_query::Document,
  options: &'a SectionizeOptions,
  outline: Option<Container<NodeId>>,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&mut self) -> Document<'_> {
    Document::new(&mut *self.html)
  }

  pub(crate) fn host(&self) -> Option<NodeId> {
    self.host
  }

  pub(crate) fn new(
    html: &'a mut dom_query::Document,
    options: &'a SectionizeOptions,
  ) -> Self {
    Self {
      blocks: Vec::new(),
      contents: None,
      host: None,
      html,
      options,
      outline: None,
    }
  }

  pub(crate) fn options(&self) -> &'a SectionizeOptions {
    self.options
  }

  pub(crate) fn outline_mut(&mut self) -> Option<&mut Container<NodeId>> {
    self.outline.as_mut()
  }

  pub(crate) fn set_blocks(&mut self, blocks: Vec<Block<NodeId>>) {
    self.blocks = blocks;
  }

  pub(crate) fn set_contents(&mut self, contents: OutlineEntry) {
    self.contents = Some(contents);
  }

  pub(crate) fn set_host(&mut self, host: NodeId) {
    self.host = Some(host);
  }

  pub(crate) fn set_outline(&mut self, outline: Container<NodeId>) {
    self.outline = Some(outline);
  }

  pub(crate) fn take_blocks(&mut self) -> Vec<Block<NodeId>> {
    std::mem::take(&mut self.blocks)
  }

  pub(crate) fn take_contents(&mut self) -> Option<OutlineEntry> {
    self.contents.take()
  }

  pub(crate) fn take_outline(&mut self) -> Option<Container<NodeId>> {
    self.outline.take()
  }
}
