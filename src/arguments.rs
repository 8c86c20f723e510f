use super::*;

#[derive(Parser)]
#[command(name = "sectionize")]
#[command(
  about = "Nest the headings of an HTML book into chapter and section containers",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long = "host",
    value_name = "SELECTOR",
    default_value = ".container",
    help = "CSS selector of the element holding the flat headings"
  )]
  host_selector: String,
  #[arg(value_name = "FILE", help = "Path to the HTML file to sectionize")]
  input: PathBuf,
  #[arg(
    long = "max-elements",
    value_name = "N",
    help = "Refuse documents with more than N elements"
  )]
  max_elements: Option<usize>,
  #[arg(
    long,
    help = "Print the table of contents as JSON instead of the markup"
  )]
  outline: bool,
  #[arg(
    long,
    short,
    value_name = "FILE",
    help = "Write the result to FILE instead of stdout"
  )]
  output: Option<PathBuf>,
  #[arg(
    long = "preface-anchor",
    value_name = "ID",
    help = "Move top-level content preceding the element with this id to the end"
  )]
  preface_anchor: Option<String>,
}

impl Arguments {
  fn options(&self) -> SectionizeOptions {
    SectionizeOptions::builder()
      .host_selector(self.host_selector.clone())
      .max_elems_to_parse(self.max_elements)
      .preface_anchor(self.preface_anchor.clone())
      .build()
  }

  pub(crate) fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let book = Sectionizer::new(&html, self.options())
      .parse()
      .context("failed to sectionize document")?;

    tracing::info!(sections = book.sections, "sectionized document");

    let rendered = if self.outline {
      serde_json::to_string_pretty(&book.outline)
        .context("failed to serialize outline")?
    } else {
      book.content
    };

    match &self.output {
      Some(path) => fs::write(path, rendered).with_context(|| {
        format!("failed to write output to `{}`", path.display())
      })?,
      None => println!("{rendered}"),
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn maps_flags_onto_options() {
    let arguments = Arguments::parse_from([
      "sectionize",
      "book.html",
      "--host",
      "#manuscript",
      "--max-elements",
      "500",
      "--preface-anchor",
      "title",
      "--outline",
    ]);

    let options = arguments.options();

    assert!(arguments.outline);
    assert_eq!(arguments.input, PathBuf::from("book.html"));
    assert_eq!(options.host_selector, "#manuscript");
    assert_eq!(options.max_elems_to_parse, Some(500));
    assert_eq!(options.preface_anchor.as_deref(), Some("title"));
  }

  #[test]
  fn defaults_to_container_host() {
    let options = Arguments::parse_from(["sectionize", "book.html"]).options();

    assert_eq!(options.host_selector, ".container");
    assert_eq!(options.preface_anchor, None);
  }
}
