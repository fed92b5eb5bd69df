use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use mdcal_core::{html, ics, parse_document};
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

/// Where the conversion wrote its artifacts.
#[derive(Debug)]
pub struct Outputs {
    /// Directory containing the generated files (used by --generate-index).
    pub directory: PathBuf,
}

pub fn run(
    input: &Path,
    output: Option<&str>,
    ical_only: bool,
    html_only: bool,
    config: &GlobalConfig,
) -> Result<Outputs> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Could not read input file '{}'", input.display()))?;

    let outcome = parse_document(&text);

    for error in &outcome.errors {
        eprintln!("{} skipped block at {}", "warning:".yellow(), error);
    }

    if outcome.events.is_empty() {
        if outcome.errors.is_empty() {
            bail!("No events found in '{}'", input.display());
        }
        bail!(
            "No parsable events in '{}' (all {} blocks failed)",
            input.display(),
            outcome.errors.len()
        );
    }

    println!(
        "Parsed {} events from '{}'{}",
        outcome.events.len(),
        input.display(),
        if outcome.errors.is_empty() {
            String::new()
        } else {
            format!(" ({} skipped)", outcome.errors.len())
        }
    );

    let (base, name) = output_base(input, output);
    let title = config.calendar_title.as_deref().unwrap_or(&name);

    let ics_path = base.with_extension("ics");
    let html_path = base.with_extension("html");
    let ics_filename = ics_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());

    // Render everything before writing anything, so a render failure
    // never leaves a partial set of output files behind.
    let ics_content = (!html_only).then(|| ics::generate_ics(&outcome.events));
    let html_content = (!ical_only).then(|| {
        html::generate_html(
            &outcome.events,
            title,
            if html_only { None } else { ics_filename.as_deref() },
        )
    });

    if let Some(content) = ics_content {
        fs::write(&ics_path, content)
            .with_context(|| format!("Could not write '{}'", ics_path.display()))?;
        println!("{}", format!("✓ iCal file created: {}", ics_path.display()).green());
    }

    if let Some(content) = html_content {
        fs::write(&html_path, content)
            .with_context(|| format!("Could not write '{}'", html_path.display()))?;
        println!("{}", format!("✓ HTML file created: {}", html_path.display()).green());
    }

    let directory = base
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(Outputs { directory })
}

/// Resolve the output base path and the display name derived from it.
/// `-o NAME` wins; otherwise the input file's stem is used.
fn output_base(input: &Path, output: Option<&str>) -> (PathBuf, String) {
    let base = match output {
        Some(name) => PathBuf::from(name),
        None => input.with_extension(""),
    };
    let name = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "calendar".to_string());
    (base, name)
}
