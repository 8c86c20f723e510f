use super::*;

mod build_outline;
mod collect_blocks;
mod element_limit;
mod render_outline;
mod reorder_preface;
mod table_of_contents;

pub use {
  build_outline::BuildOutlineStage, collect_blocks::CollectBlocksStage,
  element_limit::ElementLimitStage, render_outline::RenderOutlineStage,
  reorder_preface::ReorderPrefaceStage,
  table_of_contents::TableOfContentsStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
