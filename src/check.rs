//! The `check` command.
//!
//! Verifies the split output against the page registry: every page file
//! must exist, carry exactly one active navigation button pointing at
//! itself, contain its own section exactly once, and hold the modals its
//! registry entry promises. Detached pages additionally keep their main
//! container empty with the section placed after it.

use crate::config::{PageSpec, Placement, SplitConfig};
use crate::document::Document;
use crate::log;
use anyhow::{Result, bail};
use regex::Regex;
use std::{fs, sync::OnceLock};

fn active_nav_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"class="nav-btn active-nav" onclick="window\.location\.href='([^']+)'""#)
            .unwrap()
    })
}

/// Verify every registry page, reporting all failures before bailing.
pub fn check_site(config: &SplitConfig) -> Result<()> {
    let mut failures = 0usize;

    for page in &config.pages {
        let problems = check_page(config, page);
        if problems.is_empty() {
            log!("check"; "{}: ok", page.file);
        } else {
            failures += problems.len();
            for problem in problems {
                log!("error"; "{}: {}", page.file, problem);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} check(s) failed across {} pages", config.pages.len());
    }
    log!("check"; "all {} pages pass", config.pages.len());
    Ok(())
}

fn check_page(config: &SplitConfig, page: &PageSpec) -> Vec<String> {
    let markers = &config.markers;
    let path = config.output_path(&page.file);
    let mut problems = Vec::new();

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => return vec![format!("unreadable: {err}")],
    };

    // Navigation: exactly one active button, and it points at this page
    let actives: Vec<&str> = active_nav_re()
        .captures_iter(&text)
        .map(|c| c.get(1).map_or("", |m| m.as_str()))
        .collect();
    match actives.as_slice() {
        [href] if *href == page.file => {}
        [href] => problems.push(format!("active nav points at {href}")),
        [] => problems.push("no active nav button".to_owned()),
        _ => problems.push(format!("{} active nav buttons", actives.len())),
    }

    // Modal markers, counted in the raw text
    if let Some(marker) = &page.modal {
        let count = text.matches(&format!("<!-- {marker} -->")).count();
        if count != 1 {
            problems.push(format!("{count} `{marker}` markers, expected 1"));
        }
    }
    let global = format!("<!-- {} -->", markers.global_modal);
    if !text.contains(&global) {
        problems.push(format!("missing `{}` block", markers.global_modal));
    }

    // Structural checks need the index
    let doc = match Document::parse(text, markers) {
        Ok(doc) => doc,
        Err(err) => {
            problems.push(format!("does not index: {err}"));
            return problems;
        }
    };

    let section = match doc.section_span(&page.key) {
        Ok(span) => Some(span),
        Err(err) => {
            problems.push(err.to_string());
            None
        }
    };

    match page.placement {
        Placement::Inline => {
            if let Ok(section) = doc.section(&page.key)
                && !section.contains("active")
            {
                problems.push("section is not activated".to_owned());
            }
        }
        Placement::Detached => {
            match doc.element_content("main", &markers.main_id) {
                Ok(content) if !content.trim().is_empty() => {
                    problems.push("main container is not empty".to_owned());
                }
                Ok(_) => {}
                Err(err) => problems.push(err.to_string()),
            }
            if let (Some(section), Ok(main)) =
                (section, doc.element_span("main", &markers.main_id))
                && section.start < main.end
            {
                problems.push("section sits inside main".to_owned());
            }
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fixture::MONOLITH;
    use crate::split::split_site;
    use std::path::Path;

    fn split_fixture(dir: &Path) -> SplitConfig {
        let mut config = SplitConfig::default();
        config.split.source = dir.join("index.html");
        config.split.output = dir.to_path_buf();
        fs::write(&config.split.source, MONOLITH).unwrap();
        split_site(&config).unwrap();
        config
    }

    #[test]
    fn test_check_passes_on_fresh_split() {
        let dir = tempfile::tempdir().unwrap();
        let config = split_fixture(dir.path());
        check_site(&config).unwrap();
    }

    #[test]
    fn test_check_catches_wrong_active_button() {
        let dir = tempfile::tempdir().unwrap();
        let config = split_fixture(dir.path());

        let brew = fs::read_to_string(dir.path().join("brew.html"))
            .unwrap()
            .replace(
                "class=\"nav-btn active-nav\" onclick=\"window.location.href='brew.html'\"",
                "class=\"nav-btn active-nav\" onclick=\"window.location.href='drinks.html'\"",
            );
        fs::write(dir.path().join("brew.html"), brew).unwrap();

        let page = config.page("brew").unwrap();
        let problems = check_page(&config, page);
        assert!(problems.iter().any(|p| p.contains("drinks.html")));
        assert!(check_site(&config).is_err());
    }

    #[test]
    fn test_check_catches_duplicate_modal_marker() {
        let dir = tempfile::tempdir().unwrap();
        let config = split_fixture(dir.path());

        let drinks = fs::read_to_string(dir.path().join("drinks.html")).unwrap();
        let doubled = drinks.replace(
            "<!-- Drink Modal -->",
            "<!-- Drink Modal -->\n    <!-- Drink Modal -->",
        );
        fs::write(dir.path().join("drinks.html"), doubled).unwrap();

        let problems = check_page(&config, config.page("drinks").unwrap());
        assert!(problems.iter().any(|p| p.contains("Drink Modal")));
    }

    #[test]
    fn test_check_catches_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = split_fixture(dir.path());
        fs::remove_file(dir.path().join("shops.html")).unwrap();

        let problems = check_page(&config, config.page("shops").unwrap());
        assert!(problems.iter().any(|p| p.contains("unreadable")));
    }

    #[test]
    fn test_check_catches_inactive_section() {
        let dir = tempfile::tempdir().unwrap();
        let config = split_fixture(dir.path());

        let home = fs::read_to_string(dir.path().join("index.html"))
            .unwrap()
            .replace("class=\"page active\"", "class=\"page\"");
        fs::write(dir.path().join("index.html"), home).unwrap();

        let problems = check_page(&config, config.page("home").unwrap());
        assert!(problems.iter().any(|p| p.contains("not activated")));
    }

    #[test]
    fn test_check_catches_populated_detached_main() {
        let dir = tempfile::tempdir().unwrap();
        let config = split_fixture(dir.path());

        let knowledge = fs::read_to_string(dir.path().join("knowledge.html"))
            .unwrap()
            .replace(
                "<main id=\"app\">\n    </main>",
                "<main id=\"app\">\n        <p>stray</p>\n    </main>",
            );
        fs::write(dir.path().join("knowledge.html"), knowledge).unwrap();

        let problems = check_page(&config, config.page("knowledge").unwrap());
        assert!(problems.iter().any(|p| p.contains("not empty")));
    }
}
