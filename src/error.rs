#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting sectioning; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error("invalid purchase form action: {source}")]
  InvalidFormAction {
    #[from]
    source: url::ParseError,
  },
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("no element matches host selector `{selector}`")]
  MissingHost { selector: String },
}
