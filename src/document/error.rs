//! Extraction error types.

use thiserror::Error;

/// Errors raised while locating fragments in a source document.
///
/// Every absent or ambiguous marker is a named condition. Nothing in the
/// extraction path panics and nothing silently yields an empty fragment.
#[derive(Debug, Error)]
pub enum SplitError {
    /// No `<section id="...">` element exists for the given page key.
    #[error("section `{0}` not found in source document")]
    SectionNotFound(String),

    /// More than one `<section id="...">` element shares the given page key.
    #[error("section id `{0}` appears more than once in source document")]
    AmbiguousSection(String),

    /// A structural marker (nav/main/scripts/modals region) is missing.
    #[error("marker `{0}` not found in source document")]
    MarkerNotFound(String),

    /// A per-page modal comment marker is missing from the modals region.
    #[error("modal marker `{0}` not found in modals region")]
    ModalNotFound(String),

    /// The reader could not make sense of the markup.
    #[error("markup parse error at byte {position}: {message}")]
    Parse { position: u64, message: String },
}
