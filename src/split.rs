//! The `split` command.
//!
//! Reads the monolithic source document, pulls its template fragments and
//! per-page sections apart, and writes one standalone document per
//! registry entry. Every page is composed in memory before anything is
//! written, so a failing page leaves the output directory untouched.

use crate::compose::{build_nav, compose_page};
use crate::config::SplitConfig;
use crate::document::Document;
use crate::log;
use crate::utils::fs::write_atomic;
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Split the source document into standalone pages.
pub fn split_site(config: &SplitConfig) -> Result<()> {
    let source = &config.split.source;
    let text = fs::read_to_string(source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    let outputs = compose_all(config, text)?;

    for (path, contents) in &outputs {
        write_atomic(path, contents)?;
        log!("split"; "wrote {}", path.display());
    }

    log!("split"; "{} pages split out of {}", outputs.len(), source.display());
    Ok(())
}

/// Compose every registry page against one parsed document.
pub fn compose_all(config: &SplitConfig, text: String) -> Result<Vec<(PathBuf, String)>> {
    let markers = &config.markers;
    let doc = Document::parse(text, markers)?;
    let layout = doc.layout(markers)?;
    let global = doc.global_modals(markers)?;

    let mut outputs = Vec::with_capacity(config.pages.len());
    for page in &config.pages {
        let nav = build_nav(&config.pages, layout.nav_open, &page.key);
        let section = doc.section(&page.key)?;
        let modal = page
            .modal
            .as_deref()
            .map(|m| doc.modal(m, markers))
            .transpose()?;

        let html = compose_page(&layout, page, &nav, section, modal, global, &markers.modals);
        outputs.push((config.output_path(&page.file), html));
    }

    Ok(outputs)
}
