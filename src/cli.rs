use clap::Parser;
use std::path::PathBuf;

/// Convert a simple Markdown file to HTML
#[derive(Parser, Debug)]
#[command(
    name = "markdown2html",
    version,
    about,
    override_usage = "markdown2html README.md README.html"
)]
pub struct Cli {
    /// Path to the input Markdown file
    pub input: PathBuf,

    /// Path the HTML output is written to
    pub output: PathBuf,

    /// Anything after the two paths is accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}
