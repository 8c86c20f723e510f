use super::*;

/// Tag recorded for loose text sitting directly in the host.
const TEXT_TAG: &str = "#text";

pub(crate) struct Document<'a> {
  document: &'a mut dom_query::Document,
}

impl<'a> Document<'a> {
  /// Reads the host's children as a flat block sequence. Whitespace-only text
  /// and comments are left out.
  pub(crate) fn blocks(&self, host: NodeId) -> Vec<Block<NodeId>> {
    let Some(host) = self.document.tree.get(&host) else {
      return Vec::new();
    };

    host
      .children()
      .into_iter()
      .filter_map(|child| {
        if child.is_element() {
          let tag = child.node_name()?.to_lowercase();
          let id = child.attr("id").map(|id| id.to_string());
          Some(Block::new(tag, id, child.id))
        } else if child.is_text() && !child.text().trim().is_empty() {
          Some(Block::new(TEXT_TAG, None, child.id))
        } else {
          None
        }
      })
      .collect()
  }

  pub(crate) fn element_count(&self) -> usize {
    self
      .document
      .root()
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .count()
  }

  /// Resolves the first element matching `selector`.
  pub(crate) fn host(&self, selector: &str) -> Result<NodeId> {
    let matcher = Matcher::new(selector)
      .map_err(|_| Error::InvalidSelector(selector.to_string()))?;

    self
      .document
      .select_matcher(&matcher)
      .nodes()
      .first()
      .map(|node| node.id)
      .ok_or_else(|| Error::MissingHost {
        selector: selector.to_string(),
      })
  }

  pub(crate) fn new(document: &'a mut dom_query::Document) -> Self {
    Document { document }
  }

  /// Replaces the host's children with the rendered container tree. The
  /// original nodes are moved, not copied; headings give up their `id`.
  pub(crate) fn replace_children(
    &mut self,
    host: NodeId,
    root: &Container<NodeId>,
    options: &SectionizeOptions,
  ) {
    let tree = &self.document.tree;

    let Some(host) = tree.get(&host) else {
      return;
    };

    for child in host.children() {
      child.remove_from_parent();
    }

    host.append_child(&Self::render(tree, root, options));
  }

  /// Trimmed text content of a node.
  pub(crate) fn text(&self, id: NodeId) -> Option<String> {
    let text = self.document.tree.get(&id)?.text();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
  }

  fn render<'t>(
    tree: &'t dom_query::Tree,
    container: &Container<NodeId>,
    options: &SectionizeOptions,
  ) -> NodeRef<'t> {
    let level = container.level();

    let element = tree.new_element("div");
    element.set_attr("class", &options.level_name(level));
    element.set_attr("data-level", &level.to_string());

    if let Some(id) = container.id() {
      element.set_attr("id", id);
    }

    trace!(%level, id = ?container.id(), "rendering container");

    for child in container.children() {
      match child {
        Child::Block(block) => {
          let Some(node) = tree.get(block.payload()) else {
            continue;
          };

          if block.is_heading() {
            node.remove_attr("id");
          }

          element.append_child(&node);
        }
        Child::Container(inner) => {
          element.append_child(&Self::render(tree, inner, options));
        }
      }
    }

    element
  }
}
