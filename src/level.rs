use super::*;

static REGEX_HEADING_TAG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?i)h([1-9])$").unwrap());

/// Nesting rank of a container: `0` is the synthetic book root, `1` wraps
/// an `<h1>`, `2` an `<h2>`, and so on.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct Level(u8);

impl Level {
  pub const ROOT: Level = Level(0);

  /// Recognizes heading tags (`h1` through `h9`, any case) and returns their
  /// level. Every other tag is content.
  pub fn from_tag(tag: &str) -> Option<Self> {
    REGEX_HEADING_TAG
      .captures(tag)
      .and_then(|captures| captures[1].parse().ok())
      .map(Level)
  }

  #[must_use]
  pub fn get(self) -> u8 {
    self.0
  }

  #[must_use]
  pub fn is_root(self) -> bool {
    self == Self::ROOT
  }

  #[must_use]
  pub fn new(level: u8) -> Self {
    Self(level)
  }
}

impl Display for Level {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
