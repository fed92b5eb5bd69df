use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mdcal_core::html::{IndexEntry, render_index};
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

const DEFAULT_INDEX_TITLE: &str = "Calendars";

/// Rebuild index.html in the output directory (or the configured
/// index_dir), listing every generated calendar page with its iCal
/// download when one sits next to it.
pub fn run(output_dir: &Path, config: &GlobalConfig) -> Result<()> {
    let dir = config.index_dir.as_deref().unwrap_or(output_dir);
    let title = config.index_title.as_deref().unwrap_or(DEFAULT_INDEX_TITLE);

    let entries = scan(dir)?;
    let html = render_index(&entries, title);

    let index_path = dir.join("index.html");
    fs::write(&index_path, html)
        .with_context(|| format!("Could not write '{}'", index_path.display()))?;

    println!(
        "{}",
        format!(
            "✓ Index created: {} ({} calendars)",
            index_path.display(),
            entries.len()
        )
        .green()
    );

    Ok(())
}

/// Scan a directory for generated calendar pages: every `*.html` except
/// `index.html`, paired with a same-stem `.ics` when present, sorted by
/// name.
fn scan(dir: &Path) -> Result<Vec<IndexEntry>> {
    let read = fs::read_dir(dir)
        .with_context(|| format!("Could not scan directory '{}'", dir.display()))?;

    let mut entries: Vec<IndexEntry> = read
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "html")
                && path.file_name().is_some_and(|name| name != "index.html")
        })
        .filter_map(|path| {
            let name = path.file_stem()?.to_string_lossy().into_owned();
            let html_file = path.file_name()?.to_string_lossy().into_owned();
            let ics_file = sibling_ics(&path);
            Some(IndexEntry {
                name,
                html_file,
                ics_file,
            })
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn sibling_ics(html_path: &Path) -> Option<String> {
    let ics_path: PathBuf = html_path.with_extension("ics");
    if ics_path.exists() {
        Some(ics_path.file_name()?.to_string_lossy().into_owned())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_pairs_pages_with_ics_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("shows.html"), "x").unwrap();
        fs::write(dir.path().join("races.html"), "x").unwrap();
        fs::write(dir.path().join("races.ics"), "x").unwrap();
        fs::write(dir.path().join("index.html"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let entries = scan(dir.path()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "races");
        assert_eq!(entries[0].ics_file.as_deref(), Some("races.ics"));
        assert_eq!(entries[1].name, "shows");
        assert_eq!(entries[1].ics_file, None);
    }

    #[test]
    fn test_run_writes_index_html() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("races.html"), "x").unwrap();

        run(dir.path(), &GlobalConfig::default()).unwrap();

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"<a href="races.html">races</a>"#));
        assert!(index.contains("<title>Calendars</title>"));
    }

    #[test]
    fn test_empty_directory_still_produces_an_index() {
        let dir = tempfile::tempdir().unwrap();

        run(dir.path(), &GlobalConfig::default()).unwrap();

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("No calendars generated yet."));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = scan(Path::new("/nonexistent/outputs")).unwrap_err();
        assert!(err.to_string().contains("Could not scan"));
    }

    #[test]
    fn test_config_index_dir_and_title_are_honored() {
        let outputs = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        fs::write(elsewhere.path().join("club.html"), "x").unwrap();

        let config = GlobalConfig {
            index_dir: Some(elsewhere.path().to_path_buf()),
            index_title: Some("All Calendars".to_string()),
            ..GlobalConfig::default()
        };
        run(outputs.path(), &config).unwrap();

        assert!(!outputs.path().join("index.html").exists());
        let index = fs::read_to_string(elsewhere.path().join("index.html")).unwrap();
        assert!(index.contains("<title>All Calendars</title>"));
        assert!(index.contains("club"));
    }
}
