//! Source document model.
//!
//! A [`Document`] pairs the raw text of one HTML file with a structural
//! index built in a single scan pass. The text is read once and never
//! mutated; every fragment handed to the composer is a borrowed slice of
//! it.
//!
//! # Fragments
//!
//! | Fragment       | Bounds                                                |
//! |----------------|-------------------------------------------------------|
//! | `head_and_top` | start of file → opening `<nav id=...>`                |
//! | `nav_open`     | the nav opening tag, reused verbatim                  |
//! | `nav_to_main`  | after `</nav>` → opening `<main id=...>`              |
//! | `main_open`    | the main opening tag, reused verbatim                 |
//! | `scripts`      | scripts-marker `<script>` → end of file               |
//! | section        | preceding comments + `<section id=key>` → `</section>`|
//! | page modal     | `<!-- X Modal -->` → end of the element following it  |
//! | global modals  | global-modal comment → end of the modals region       |

mod error;
pub mod scan;

#[cfg(test)]
pub mod fixture;

pub use error::SplitError;

use crate::config::Markers;
use scan::{DocumentIndex, Span};

/// One source HTML file plus its structural index.
pub struct Document {
    text: String,
    index: DocumentIndex,
}

/// The shared template fragments of a page, borrowed from one [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub head_and_top: &'a str,
    pub nav_open: &'a str,
    pub nav_to_main: &'a str,
    pub main_open: &'a str,
    pub scripts: &'a str,
}

impl Document {
    /// Index `text`, stopping at the configured scripts marker.
    pub fn parse(text: String, markers: &Markers) -> Result<Self, SplitError> {
        let index = scan::scan(&text, Some(&markers.scripts_src))?;
        Ok(Self { text, index })
    }

    /// Derive the shared template fragments.
    pub fn layout(&self, markers: &Markers) -> Result<Layout<'_>, SplitError> {
        let nav = self.index.unique_element("nav", &markers.nav_id)?;
        let main = self.index.unique_element("main", &markers.main_id)?;
        let scripts_start = self.index.scripts_start.ok_or_else(|| {
            SplitError::MarkerNotFound(format!("script[src=\"{}\"]", markers.scripts_src))
        })?;

        Ok(Layout {
            head_and_top: &self.text[..nav.span.start],
            nav_open: &self.text[nav.span.start..nav.span.open_end],
            nav_to_main: &self.text[nav.span.end..main.span.start],
            main_open: &self.text[main.span.start..main.span.open_end],
            scripts: &self.text[scripts_start..],
        })
    }

    /// Extract the section for one page key, including any comments
    /// immediately preceding it.
    ///
    /// A missing id is `SectionNotFound`; a duplicated id is
    /// `AmbiguousSection` — duplicates are reported, never tie-broken.
    pub fn section(&self, key: &str) -> Result<&str, SplitError> {
        let span = self.section_span(key)?;
        let start = extend_over_leading_comments(&self.text, span.start);
        Ok(&self.text[start..span.end])
    }

    /// Byte span of the section element itself (without leading comments).
    pub fn section_span(&self, key: &str) -> Result<Span, SplitError> {
        let found = self.index.elements_with_id("section", key);
        match found.as_slice() {
            [] => Err(SplitError::SectionNotFound(key.to_owned())),
            [one] => Ok(one.span),
            _ => Err(SplitError::AmbiguousSection(key.to_owned())),
        }
    }

    /// Byte span of the unique element with the given tag and id.
    pub fn element_span(&self, tag: &str, id: &str) -> Result<Span, SplitError> {
        Ok(self.index.unique_element(tag, id)?.span)
    }

    /// Inner content of the unique element with the given tag and id.
    pub fn element_content(&self, tag: &str, id: &str) -> Result<&str, SplitError> {
        let span = self.element_span(tag, id)?;
        let outer = &self.text[span.open_end..span.end];
        Ok(outer.strip_suffix(&format!("</{tag}>")).unwrap_or(outer))
    }

    /// One page-specific modal: its comment marker through the end of the
    /// element that follows it.
    pub fn modal(&self, marker: &str, markers: &Markers) -> Result<&str, SplitError> {
        let (from, to) = self.modals_region(markers)?;
        let comment = self
            .index
            .comment_equal(marker, from, to)
            .ok_or_else(|| SplitError::ModalNotFound(marker.to_owned()))?;
        let elem = self
            .index
            .element_after(comment.end, "div")
            .filter(|e| e.span.start < to)
            .ok_or_else(|| SplitError::ModalNotFound(marker.to_owned()))?;
        Ok(&self.text[comment.start..elem.span.end])
    }

    /// The shared modal block: global-modal comment through the end of the
    /// modals region.
    pub fn global_modals(&self, markers: &Markers) -> Result<&str, SplitError> {
        let (from, to) = self.modals_region(markers)?;
        let comment = self
            .index
            .comment_containing(&markers.global_modal, from, to)
            .ok_or_else(|| SplitError::MarkerNotFound(markers.global_modal.clone()))?;
        Ok(self.text[comment.start..to].trim_end())
    }

    /// Bounds of the modals region: after the modals comment, up to the
    /// region end comment if configured and present, else the scripts
    /// marker, else end of file.
    fn modals_region(&self, markers: &Markers) -> Result<(usize, usize), SplitError> {
        let opening = self
            .index
            .comment_containing(&markers.modals, 0, self.text.len())
            .ok_or_else(|| SplitError::MarkerNotFound(markers.modals.clone()))?;
        let from = opening.end;

        let to = markers
            .modals_end
            .as_deref()
            .and_then(|m| self.index.comment_containing(m, from, self.text.len()))
            .map(|c| c.start)
            .or(self.index.scripts_start)
            .unwrap_or(self.text.len());

        Ok((from, to))
    }
}

/// Walk `start` backwards over whitespace-introduced HTML comments, so a
/// section keeps the label comments sitting right above it.
///
/// Whitespace alone is never included; only runs that lead to a `<!-- -->`
/// pair extend the fragment.
fn extend_over_leading_comments(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut committed = start;
    let mut cursor = start;
    loop {
        let mut p = cursor;
        while p > 0 && bytes[p - 1].is_ascii_whitespace() {
            p -= 1;
        }
        if p >= 3 && &text[p - 3..p] == "-->" {
            match text[..p - 3].rfind("<!--") {
                Some(open) => {
                    committed = open;
                    cursor = open;
                }
                None => break,
            }
        } else {
            break;
        }
    }
    committed
}
