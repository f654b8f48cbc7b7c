use crate::cli::Cli;
use crate::markdown;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

pub fn convert(cli: &Cli) -> Result<()> {
    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", cli.ignored);
    }

    if !cli.input.exists() {
        bail!("Missing {}", cli.input.display());
    }

    let markdown_text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;

    let html = markdown::markdown_to_html(&markdown_text);

    write_output(&cli.output, &html)?;

    log::info!(
        "Converted {} ({} bytes) to {} ({} lines)",
        cli.input.display(),
        markdown_text.len(),
        cli.output.display(),
        if html.is_empty() { 0 } else { html.lines().count() }
    );

    Ok(())
}

fn write_output(output_path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(output_path, html)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    Ok(())
}
