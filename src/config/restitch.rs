//! `[restitch]` section configuration.
//!
//! Which already-split files the layout, sections and modals are taken
//! back out of when re-assembling the site.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `[restitch]` section in pagesplit.toml.
///
/// # Example
/// ```toml
/// [restitch]
/// layout = "index.html"
/// modals = "shops.html"
///
/// [restitch.sections]
/// home = "index.html"
/// brew = "shops.html"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RestitchConfig {
    /// File the template fragments (head, nav surroundings, scripts) come from.
    #[serde(default = "defaults::restitch::layout")]
    #[educe(Default = defaults::restitch::layout())]
    pub layout: String,

    /// File the modals region comes from.
    #[serde(default = "defaults::restitch::modals")]
    #[educe(Default = defaults::restitch::modals())]
    pub modals: String,

    /// Page key → file its section is extracted from. Keys missing from the
    /// map fall back to the layout file.
    #[serde(default = "defaults::restitch::sections")]
    #[educe(Default = defaults::restitch::sections())]
    pub sections: HashMap<String, String>,
}

impl RestitchConfig {
    /// The file the given page's section is read from.
    pub fn section_source(&self, key: &str) -> &str {
        self.sections.get(key).map_or(&self.layout, String::as_str)
    }
}
