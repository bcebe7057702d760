//! The `restitch` command.
//!
//! Re-assembles every page out of already-split files: the template
//! fragments come from the configured layout file, the modals from the
//! modals file, and each section from whichever file `[restitch.sections]`
//! maps its key to. Useful when hand edits left the per-page documents
//! inconsistent and they need to be rebuilt from the surviving copies.

use crate::compose::{build_nav, compose_page};
use crate::config::SplitConfig;
use crate::document::Document;
use crate::log;
use crate::utils::fs::write_atomic;
use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::PathBuf};

/// Rebuild every registry page from the configured source files.
pub fn restitch_site(config: &SplitConfig) -> Result<()> {
    let outputs = compose_all(config)?;

    for (path, contents) in &outputs {
        write_atomic(path, contents)?;
        log!("restitch"; "wrote {}", path.display());
    }

    log!("restitch"; "{} pages re-assembled", outputs.len());
    Ok(())
}

/// Compose every page in memory. All source files are read and parsed up
/// front, so nothing is written when any of them is unusable.
fn compose_all(config: &SplitConfig) -> Result<Vec<(PathBuf, String)>> {
    let markers = &config.markers;
    let restitch = &config.restitch;

    let mut names = vec![restitch.layout.as_str(), restitch.modals.as_str()];
    names.extend(config.pages.iter().map(|p| restitch.section_source(&p.key)));
    names.sort_unstable();
    names.dedup();

    let mut sources: HashMap<&str, Document> = HashMap::new();
    for name in names {
        let path = config.output_path(name);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let doc = Document::parse(text, markers)
            .with_context(|| format!("Failed to index {name}"))?;
        sources.insert(name, doc);
    }

    let layout_doc = &sources[restitch.layout.as_str()];
    let layout = layout_doc.layout(markers)?;
    let modals_doc = &sources[restitch.modals.as_str()];
    let global = modals_doc.global_modals(markers)?;

    let mut outputs = Vec::with_capacity(config.pages.len());
    for page in &config.pages {
        let section_doc = &sources[restitch.section_source(&page.key)];
        let section = section_doc
            .section(&page.key)
            .with_context(|| format!("In {}", restitch.section_source(&page.key)))?;
        let modal = page
            .modal
            .as_deref()
            .map(|m| modals_doc.modal(m, markers))
            .transpose()?;

        let nav = build_nav(&config.pages, layout.nav_open, &page.key);
        let html = compose_page(&layout, page, &nav, section, modal, global, &markers.modals);
        outputs.push((config.output_path(&page.file), html));
    }

    Ok(outputs)
}
