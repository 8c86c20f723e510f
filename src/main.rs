use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  sectionize::{SectionizeOptions, Sectionizer},
  std::{fs, path::PathBuf, process},
  tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt},
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
