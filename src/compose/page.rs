//! Standalone page document assembly.

use crate::config::{PageSpec, Placement};
use crate::document::Layout;
use std::borrow::Cow;

/// Assemble one standalone page document.
///
/// The layout fragments come from the source document, `nav` is the
/// per-page navigation bar and `section` the page's own content. Pages
/// with a [`Placement::Detached`] role keep the main container empty and
/// place their section right after it; everyone else gets the section
/// inside main with its visibility class activated.
pub fn compose_page(
    layout: &Layout<'_>,
    page: &PageSpec,
    nav: &str,
    section: &str,
    modal: Option<&str>,
    global_modals: &str,
    modals_marker: &str,
) -> String {
    let mut out = String::with_capacity(layout.head_and_top.len() + section.len() + 4096);

    out.push_str(layout.head_and_top);
    out.push_str(nav);
    out.push('\n');
    out.push_str(layout.nav_to_main.trim());
    out.push_str("\n\n");

    match page.placement {
        Placement::Inline => {
            out.push_str("    ");
            out.push_str(layout.main_open);
            out.push('\n');
            out.push_str("        ");
            out.push_str(inject_active(section).trim());
            out.push_str("\n    </main>\n");
            out.push_str(&format!("\n    <!-- {modals_marker} -->\n"));
            if let Some(modal) = modal {
                out.push_str(modal);
                out.push_str("\n\n");
            }
            out.push_str(global_modals);
            out.push('\n');
        }
        Placement::Detached => {
            out.push_str("    ");
            out.push_str(layout.main_open);
            out.push_str("\n    </main>\n");
            out.push_str(section.trim());
            out.push('\n');
            out.push_str(&format!("    <!-- {modals_marker} -->\n"));
            out.push_str(global_modals);
            out.push('\n');
        }
    }

    out.push_str(layout.scripts);
    out
}

/// Switch the section's visibility class on.
///
/// The source document shows pages by toggling `class="page active"` at
/// runtime; standalone pages need their own section pre-activated. The
/// replacement is skipped entirely when "active" already appears anywhere
/// in the fragment, so re-splitting an activated fragment is a no-op.
fn inject_active(section: &str) -> Cow<'_, str> {
    if section.contains("class=\"page\"") && !section.contains("active") {
        Cow::Owned(section.replace("class=\"page\"", "class=\"page active\""))
    } else {
        Cow::Borrowed(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::build_nav;
    use crate::config::{Markers, defaults};
    use crate::document::Document;
    use crate::document::fixture::MONOLITH;

    fn compose_fixture(key: &str) -> String {
        let markers = Markers::default();
        let doc = Document::parse(MONOLITH.to_owned(), &markers).unwrap();
        let layout = doc.layout(&markers).unwrap();
        let pages = defaults::pages::registry();
        let page = pages.iter().find(|p| p.key == key).unwrap();

        let nav = build_nav(&pages, layout.nav_open, key);
        let section = doc.section(key).unwrap();
        let modal = page
            .modal
            .as_deref()
            .map(|m| doc.modal(m, &markers).unwrap());
        let global = doc.global_modals(&markers).unwrap();

        compose_page(
            &layout,
            page,
            &nav,
            section,
            modal.as_deref(),
            global,
            &markers.modals,
        )
    }

    #[test]
    fn test_inline_page_shape() {
        let out = compose_fixture("brew");
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<main id=\"app\">"));
        assert!(out.contains("class=\"page active\""));
        assert!(out.contains("<!-- MODALS -->"));
        assert!(out.contains("<!-- Brew Modal -->"));
        assert!(out.contains("<!-- Auth Modal -->"));
        assert!(out.contains("firebase-config.js"));
        // Only this page's section is present
        assert!(out.contains("id=\"brew\""));
        assert!(!out.contains("id=\"drinks\""));
    }

    #[test]
    fn test_inline_page_excludes_other_modals() {
        let out = compose_fixture("drinks");
        assert!(out.contains("<!-- Drink Modal -->"));
        assert!(!out.contains("<!-- Brew Modal -->"));
        assert!(!out.contains("<!-- Shop Modal -->"));
    }

    #[test]
    fn test_detached_page_keeps_main_empty() {
        let out = compose_fixture("knowledge");
        let main_at = out.find("<main id=\"app\">").unwrap();
        let close_at = out.find("</main>").unwrap();
        let inside = &out[main_at + "<main id=\"app\">".len()..close_at];
        assert!(inside.trim().is_empty());

        // Section follows the container
        let section_at = out.find("id=\"knowledge\"").unwrap();
        assert!(section_at > close_at);
        // Detached sections never get the activation treatment
        assert!(!out.contains("class=\"page active\""));
    }

    #[test]
    fn test_exactly_one_active_nav_button() {
        for key in ["home", "brew", "knowledge"] {
            let out = compose_fixture(key);
            assert_eq!(out.matches("active-nav").count(), 1, "page {key}");
        }
    }

    #[test]
    fn test_inject_active_replaces_page_class() {
        let section = "<section id=\"brew\" class=\"page\">\n</section>";
        let injected = inject_active(section);
        assert!(injected.contains("class=\"page active\""));
    }

    #[test]
    fn test_inject_active_skips_already_active() {
        let section = "<section id=\"brew\" class=\"page active\">\n</section>";
        assert!(matches!(inject_active(section), Cow::Borrowed(_)));
    }

    #[test]
    fn test_inject_active_skips_any_active_mention() {
        // Coarse check: any "active" in the fragment disables injection
        let section = "<section id=\"brew\" class=\"page\">\n<p>active brewing</p>\n</section>";
        assert!(matches!(inject_active(section), Cow::Borrowed(_)));
    }
}
