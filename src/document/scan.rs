//! One-pass structural index over an HTML document.
//!
//! Records byte spans for the elements and comments the composer needs, so
//! fragments can be borrowed straight out of the source text. Locating a
//! block by tag and id through the index (instead of first-closing-marker
//! string splits) makes nested same-tag blocks and duplicate ids visible
//! instead of silently truncating.
//!
//! The reader is configured the lenient way: end-name checks off, text kept
//! verbatim. HTML void elements (`<img>`, `<meta>`, ...) open without ever
//! closing, so end tags are matched with implicit-close recovery: a close
//! tag pops everything above the nearest open element of the same name.

use super::error::SplitError;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

/// Tags worth indexing. Everything else only participates in nesting.
const INDEXED_TAGS: &[&str] = &["nav", "main", "section", "div", "script"];

/// Byte range of one element, inclusive of both tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the `<` of the opening tag.
    pub start: usize,
    /// Offset just past the `>` of the opening tag.
    pub open_end: usize,
    /// Offset just past the `>` of the closing tag.
    pub end: usize,
}

/// An indexed element occurrence.
#[derive(Debug, Clone)]
pub struct LocatedElement {
    pub tag: String,
    pub id: Option<String>,
    pub span: Span,
}

/// An HTML comment occurrence. `text` is the content between `<!--` and `-->`.
#[derive(Debug, Clone)]
pub struct LocatedComment {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Structural index built by [`scan`]. Elements and comments are in
/// document order of their opening offsets.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    pub elements: Vec<LocatedElement>,
    pub comments: Vec<LocatedComment>,
    /// Offset of the scripts-marker `<script>` element, if one was configured
    /// and found. Scanning stops there; everything after is opaque tail.
    pub scripts_start: Option<usize>,
}

/// Scan `source`, indexing elements and comments up to the scripts marker.
///
/// `scripts_src` is the `src` attribute value identifying the trailing
/// script-inclusion block. When present, the scan stops at that element so
/// inline script bodies after it are never parsed as markup.
pub fn scan(source: &str, scripts_src: Option<&str>) -> Result<DocumentIndex, SplitError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);

    let mut index = DocumentIndex::default();
    // Open elements: (tag, index into `index.elements` if indexed)
    let mut stack: Vec<(String, Option<usize>)> = Vec::new();

    loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(elem)) => {
                let open_end = reader.buffer_position() as usize;
                let tag = String::from_utf8_lossy(elem.name().as_ref()).into_owned();

                if tag == "script"
                    && let Some(marker) = scripts_src
                    && attr_value(&elem, b"src").as_deref() == Some(marker)
                {
                    index.scripts_start = Some(start);
                    break;
                }

                let slot = if INDEXED_TAGS.contains(&tag.as_str()) {
                    index.elements.push(LocatedElement {
                        tag: tag.clone(),
                        id: attr_value(&elem, b"id"),
                        span: Span {
                            start,
                            open_end,
                            end: 0,
                        },
                    });
                    Some(index.elements.len() - 1)
                } else {
                    None
                };
                stack.push((tag, slot));
            }
            Ok(Event::Empty(elem)) => {
                let end = reader.buffer_position() as usize;
                let tag = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
                if INDEXED_TAGS.contains(&tag.as_str()) {
                    index.elements.push(LocatedElement {
                        id: attr_value(&elem, b"id"),
                        tag,
                        span: Span {
                            start,
                            open_end: end,
                            end,
                        },
                    });
                }
            }
            Ok(Event::End(elem)) => {
                let end = reader.buffer_position() as usize;
                let name = elem.name();
                let tag = String::from_utf8_lossy(name.as_ref());
                if let Some(pos) = stack.iter().rposition(|(t, _)| t == tag.as_ref()) {
                    // Entries above the match were never closed (void tags,
                    // sloppy markup): close them just before this end tag.
                    for (depth, (_, slot)) in stack.drain(pos..).enumerate() {
                        if let Some(i) = slot {
                            index.elements[i].span.end = if depth == 0 { end } else { start };
                        }
                    }
                }
            }
            Ok(Event::Comment(text)) => {
                let end = reader.buffer_position() as usize;
                index.comments.push(LocatedComment {
                    text: String::from_utf8_lossy(text.as_ref()).into_owned(),
                    start,
                    end,
                });
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(SplitError::Parse {
                    position: reader.error_position(),
                    message: format!("{e:?}"),
                });
            }
        }
    }

    // Elements still open at the stop point have no usable span
    index.elements.retain(|e| e.span.end != 0);

    Ok(index)
}

/// Read one attribute value off an opening tag.
fn attr_value(elem: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    elem.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(attr.value.as_ref()).into_owned())
}

impl DocumentIndex {
    /// All element occurrences with the given tag and id, in document order.
    pub fn elements_with_id(&self, tag: &str, id: &str) -> Vec<&LocatedElement> {
        self.elements
            .iter()
            .filter(|e| e.tag == tag && e.id.as_deref() == Some(id))
            .collect()
    }

    /// The unique element with the given tag and id.
    ///
    /// Zero or multiple occurrences are both reported as a missing marker;
    /// sections get their own error mapping in `Document::section`.
    pub fn unique_element(&self, tag: &str, id: &str) -> Result<&LocatedElement, SplitError> {
        let found = self.elements_with_id(tag, id);
        match found.as_slice() {
            [one] => Ok(one),
            _ => Err(SplitError::MarkerNotFound(format!("{tag}#{id}"))),
        }
    }

    /// First comment within `[from, to)` whose text contains `needle`.
    pub fn comment_containing(
        &self,
        needle: &str,
        from: usize,
        to: usize,
    ) -> Option<&LocatedComment> {
        self.comments
            .iter()
            .find(|c| c.start >= from && c.start < to && c.text.contains(needle))
    }

    /// First comment within `[from, to)` whose trimmed text equals `text`.
    pub fn comment_equal(&self, text: &str, from: usize, to: usize) -> Option<&LocatedComment> {
        self.comments
            .iter()
            .find(|c| c.start >= from && c.start < to && c.text.trim() == text)
    }

    /// First element of `tag` opening at or after `offset`.
    pub fn element_after(&self, offset: usize, tag: &str) -> Option<&LocatedElement> {
        self.elements
            .iter()
            .filter(|e| e.tag == tag && e.span.start >= offset)
            .min_by_key(|e| e.span.start)
    }
}
