use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child<T> {
  Block(Block<T>),
  Container(Container<T>),
}

impl<T> Child<T> {
  /// The identifier rendered for this child: a container's id, or the id
  /// still carried by a content block.
  #[must_use]
  pub fn id(&self) -> Option<&str> {
    match self {
      Child::Block(block) => block.id(),
      Child::Container(container) => container.id(),
    }
  }
}

/// A synthetic wrapper grouping a heading with everything subordinate to it.
///
/// The root container sits at [`Level::ROOT`] and has no heading. Every other
/// container starts with the heading block it was opened for and owns that
/// heading's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T> {
  children: Vec<Child<T>>,
  id: Option<String>,
  level: Level,
}

impl<T> Container<T> {
  /// Nests a flat block sequence by heading level in a single pass.
  ///
  /// A heading closes every open container at the same or a deeper level
  /// before opening its own, so siblings never merge and skipped levels nest
  /// directly. Content attaches to the innermost open container. Input
  /// without headings yields a root holding the blocks unchanged.
  pub fn build<I>(blocks: I) -> Self
  where
    I: IntoIterator<Item = Block<T>>,
  {
    let mut builder = Builder::default();

    for block in blocks {
      builder.push(block);
    }

    builder.finish()
  }

  #[must_use]
  pub fn children(&self) -> &[Child<T>] {
    &self.children
  }

  /// Number of containers below this one, at any depth.
  #[must_use]
  pub fn container_count(&self) -> usize {
    self
      .containers()
      .map(|container| 1 + container.container_count())
      .sum()
  }

  /// Direct child containers, in document order.
  pub fn containers(&self) -> impl Iterator<Item = &Container<T>> {
    self.children.iter().filter_map(|child| match child {
      Child::Container(container) => Some(container),
      Child::Block(_) => None,
    })
  }

  /// The heading this container was opened for.
  #[must_use]
  pub fn heading(&self) -> Option<&Block<T>> {
    match self.children.first() {
      Some(Child::Block(block)) if block.is_heading() => Some(block),
      _ => None,
    }
  }

  #[must_use]
  pub fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  #[must_use]
  pub fn level(&self) -> Level {
    self.level
  }

  /// Moves every top-level child preceding the child identified by `anchor`
  /// to the end, keeping their relative order. Returns whether anything
  /// moved; a missing anchor or one that is already first is a no-op.
  pub fn move_before_anchor_to_end(&mut self, anchor: &str) -> bool {
    match self
      .children
      .iter()
      .position(|child| child.id() == Some(anchor))
    {
      Some(index) if index > 0 => {
        self.children.rotate_left(index);
        true
      }
      _ => false,
    }
  }

  fn open(mut heading: Block<T>, level: Level) -> Self {
    Self {
      id: heading.take_id(),
      level,
      children: vec![Child::Block(heading)],
    }
  }

  fn root() -> Self {
    Self {
      children: Vec::new(),
      id: None,
      level: Level::ROOT,
    }
  }
}

struct Builder<T> {
  open: Vec<Container<T>>,
  root: Container<T>,
}

impl<T> Default for Builder<T> {
  fn default() -> Self {
    Self {
      open: Vec::new(),
      root: Container::root(),
    }
  }
}

impl<T> Builder<T> {
  fn close(&mut self) -> bool {
    let Some(container) = self.open.pop() else {
      return false;
    };

    self.top().children.push(Child::Container(container));

    true
  }

  fn finish(mut self) -> Container<T> {
    while self.close() {}
    self.root
  }

  fn push(&mut self, block: Block<T>) {
    let Some(level) = block.level() else {
      self.top().children.push(Child::Block(block));
      return;
    };

    while self.open.last().is_some_and(|top| top.level >= level) {
      self.close();
    }

    self.open.push(Container::open(block, level));
  }

  fn top(&mut self) -> &mut Container<T> {
    self.open.last_mut().unwrap_or(&mut self.root)
  }
}
