//! `[modals]` section configuration.
//!
//! Settings for the modal snippet scanner, which reads the source file at
//! a version-control revision and captures id-delimited blocks.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[modals]` section in pagesplit.toml.
///
/// # Example
/// ```toml
/// [modals]
/// file = "index.html"
/// revision = "HEAD"
///
/// [[modals.snippets]]
/// id = "brew-modal"
/// output = "brew_modal.txt"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ModalsConfig {
    /// Repository-relative file the snippets are scanned out of.
    #[serde(default = "defaults::modals::file")]
    #[educe(Default = defaults::modals::file())]
    pub file: String,

    /// Revision passed to `git show`.
    #[serde(default = "defaults::modals::revision")]
    #[educe(Default = defaults::modals::revision())]
    pub revision: String,

    /// Blocks to capture.
    #[serde(default = "defaults::modals::snippets")]
    #[educe(Default = defaults::modals::snippets())]
    pub snippets: Vec<SnippetSpec>,
}

/// One id-delimited block to capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnippetSpec {
    /// Element id whose line opens the block.
    pub id: String,

    /// Output file name, written next to the config root.
    pub output: String,
}

impl SnippetSpec {
    pub fn new(id: &str, output: &str) -> Self {
        Self {
            id: id.to_owned(),
            output: output.to_owned(),
        }
    }
}
