//! Command-line front end: load a delimited file, search it, page through it,
//! and export the matching rows.
//!
//! # Usage
//!
//! Show the first page:
//! ```sh
//! tablescope people.csv
//! ```
//!
//! Search, jump to page 2, and export the matches into the current directory:
//! ```sh
//! tablescope people.csv --search ana --page 2 --export .
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`), written to stderr.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tablescope::config::ViewConfig;
use tablescope::io::{FileSink, FileSource, Sink, Source};
use tablescope::view::{Event, Output, Renderer, Session, TextRenderer};
use tracing_subscriber::{EnvFilter, fmt};

/// Browse and filter delimited text files
#[derive(Parser, Debug)]
#[command(
    name = "tablescope",
    about = "Search, paginate and export rows of a .csv or .txt file",
    version
)]
struct Args {
    /// Input file (.csv or .txt)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Case-insensitive search term
    #[arg(short, long, default_value = "")]
    search: String,

    /// Page to show (1-based; clamped into range)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// YAML view configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export matching rows; a directory uses the suggested filename
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// How to print the visible page
    #[arg(long, value_enum, default_value = "table")]
    format: FormatArg,

    /// Maximum characters per cell in table output
    #[arg(long, default_value_t = 32)]
    max_cell_width: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Aligned plain-text table
    Table,
    /// YAML document of the render payload
    Yaml,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewConfig::from_path(path)?,
        None => ViewConfig::default(),
    };
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
        config.validate()?;
    }

    let source = FileSource::open(&args.input)?;
    let raw = source.load().await?;

    let mut session = Session::new(config);
    let mut last_output = None;
    for event in [
        Event::FileLoaded(raw),
        Event::SearchChanged(args.search.clone()),
        Event::PageChanged(args.page),
    ] {
        let (next, output) = session.apply(event)?;
        session = next;
        last_output = Some(output);
    }

    if let Some(Output::Render(payload)) = last_output {
        match args.format {
            FormatArg::Table => {
                let mut renderer = TextRenderer::new().with_max_cell_width(args.max_cell_width);
                print!("{}", renderer.render(&payload));
            },
            FormatArg::Yaml => {
                let yaml = serde_saphyr::to_string(&payload)
                    .map_err(|e| format!("Failed to serialize page to YAML: {}", e))?;
                print!("{}", yaml);
            },
        }
    }

    if let Some(target) = &args.export {
        let (_, output) = session.apply(Event::ExportRequested)?;
        if let Output::Export(payload) = output {
            let sink = if target.is_dir() {
                FileSink::in_dir(target)
            } else {
                FileSink::to_path(target)
            };
            sink.accept(&payload).await?;
        }
    }

    Ok(())
}
