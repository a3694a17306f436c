//! `mdclip`: convert an HTML selection to Markdown.

mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use markdown_clip::{ConversionOptions, ConvertError, MarkdownConverter};

use crate::config::Loader;

#[derive(Parser, Debug)]
#[command(name = "mdclip", author, version, about)]
struct Cli {
    /// HTML file to convert; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write Markdown to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file layered over the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render links as [text](url)
    #[arg(long, value_name = "BOOL")]
    preserve_links: Option<bool>,

    /// Render images as ![alt](src)
    #[arg(long, value_name = "BOOL")]
    preserve_images: Option<bool>,

    /// Append a source citation line
    #[arg(long, value_name = "BOOL")]
    include_source: Option<bool>,

    /// Title of the page the selection came from
    #[arg(long)]
    title: Option<String>,

    /// Url of the page the selection came from
    #[arg(long)]
    url: Option<String>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to write output: {0}")]
    Write(io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    let config = loader
        .with_env()
        .set_override_option("options.preserve_links", cli.preserve_links)?
        .set_override_option("options.preserve_images", cli.preserve_images)?
        .set_override_option("options.include_source", cli.include_source)?
        .set_override_option("source.title", cli.title.clone())?
        .set_override_option("source.url", cli.url.clone())?
        .build()?;

    let options: ConversionOptions = config.options.into();
    let source = config.source.document();
    log::debug!("options: {options:?}, source: {source:?}");

    let html = read_input(cli.input.as_ref())?;
    let markdown = MarkdownConverter::with_options(options).convert_html(&html, source.as_ref())?;

    write_output(cli.output.as_ref(), &markdown)
}

fn read_input(input: Option<&PathBuf>) -> Result<String, CliError> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })
        }
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .map_err(CliError::Stdin)?;
            Ok(html)
        }
    }
}

fn write_output(output: Option<&PathBuf>, markdown: &str) -> Result<(), CliError> {
    let mut text = String::with_capacity(markdown.len() + 1);
    text.push_str(markdown);
    text.push('\n');

    match output {
        Some(path) => fs::write(path, text).map_err(CliError::Write),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::Write)
        }
    }
}
