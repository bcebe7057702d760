//! `[[pages]]` section configuration — the page registry.
//!
//! An ordered array of page entries. Order defines both the navigation
//! button order and the composition order.

use super::defaults;
use serde::{Deserialize, Serialize};

/// One entry of the page registry.
///
/// # Example
/// ```toml
/// [[pages]]
/// key = "brew"
/// file = "brew.html"
/// icon = "coffee_maker"
/// modal = "Brew Modal"
///
/// [[pages]]
/// key = "knowledge"
/// file = "knowledge.html"
/// icon = "school"
/// placement = "detached"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    /// Page key; must match the `id` of the section in the source.
    pub key: String,

    /// Output file name, also used as the navigation link target.
    pub file: String,

    /// Icon name rendered inside the navigation button.
    pub icon: String,

    /// Comment marker of the page-specific modal inlined into this page.
    #[serde(default)]
    pub modal: Option<String>,

    /// Where the section lands relative to the main container.
    #[serde(default = "defaults::pages::placement")]
    pub placement: Placement,
}

/// Section placement role of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Section sits inside the main container (the normal shape).
    #[default]
    Inline,

    /// Main container stays empty and the section follows it. The
    /// knowledge page ships this way; kept as an explicit role so the
    /// historical output shape is reproducible.
    Detached,
}

impl PageSpec {
    pub fn new(key: &str, file: &str, icon: &str) -> Self {
        Self {
            key: key.to_owned(),
            file: file.to_owned(),
            icon: icon.to_owned(),
            modal: None,
            placement: Placement::Inline,
        }
    }

    pub fn with_modal(mut self, marker: &str) -> Self {
        self.modal = Some(marker.to_owned());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
