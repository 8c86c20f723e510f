//! Reorganizes a flat run of HTML headings and content into nested
//! `book`, `chapter`, `section` containers, and models the scroll-triggered
//! purchase modal shown alongside rendered books.

use {
  context::Context,
  document::Document,
  dom_query::{Matcher, NodeId, NodeRef},
  pipeline::Pipeline,
  regex::Regex,
  serde::{Deserialize, Serialize},
  stage::{
    BuildOutlineStage, CollectBlocksStage, ElementLimitStage,
    RenderOutlineStage, ReorderPrefaceStage, Stage, TableOfContentsStage,
  },
  std::{
    fmt::{self, Display, Formatter},
    sync::LazyLock,
    time::{Duration, Instant},
  },
  tracing::{debug, trace},
  url::Url,
};

pub use crate::{
  block::{Block, BlockKind},
  book::{Book, OutlineEntry},
  error::Error,
  level::Level,
  options::{DEFAULT_LEVEL_NAMES, SectionizeOptions, SectionizeOptionsBuilder},
  outline::{Child, Container},
  sectionizer::Sectionizer,
};

pub mod speed_bump;

mod block;
mod book;
mod context;
mod document;
mod error;
mod level;
mod options;
mod outline;
mod pipeline;
mod sectionizer;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
