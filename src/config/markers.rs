//! `[markers]` section configuration.
//!
//! The structural markers that delimit template fragments in the source
//! document. Defaults match the coffee-site markup.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[markers]` section in pagesplit.toml.
///
/// # Example
/// ```toml
/// [markers]
/// nav_id = "main-nav"
/// main_id = "app"
/// scripts_src = "js/firebase-config.js"
/// modals = "MODALS"
/// global_modal = "Auth Modal"
/// modals_end = "KNOWLEDGE BASE"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Markers {
    /// `id` of the navigation element.
    #[serde(default = "defaults::markers::nav_id")]
    #[educe(Default = defaults::markers::nav_id())]
    pub nav_id: String,

    /// `id` of the main content container.
    #[serde(default = "defaults::markers::main_id")]
    #[educe(Default = defaults::markers::main_id())]
    pub main_id: String,

    /// `src` of the script element opening the trailing script block.
    #[serde(default = "defaults::markers::scripts_src")]
    #[educe(Default = defaults::markers::scripts_src())]
    pub scripts_src: String,

    /// Comment text opening the modals region.
    #[serde(default = "defaults::markers::modals")]
    #[educe(Default = defaults::markers::modals())]
    pub modals: String,

    /// Comment text opening the shared (global) modal block.
    #[serde(default = "defaults::markers::global_modal")]
    #[educe(Default = defaults::markers::global_modal())]
    pub global_modal: String,

    /// Comment text ending the modals region. When absent from the source,
    /// the region runs to the scripts marker instead.
    #[serde(default = "defaults::markers::modals_end")]
    #[educe(Default = defaults::markers::modals_end())]
    pub modals_end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_defaults() {
        let markers = Markers::default();
        assert_eq!(markers.nav_id, "main-nav");
        assert_eq!(markers.main_id, "app");
        assert_eq!(markers.scripts_src, "js/firebase-config.js");
        assert_eq!(markers.modals, "MODALS");
        assert_eq!(markers.global_modal, "Auth Modal");
        assert_eq!(markers.modals_end.as_deref(), Some("KNOWLEDGE BASE"));
    }

    #[test]
    fn test_markers_partial_override() {
        let markers: Markers = toml::from_str(
            r#"
            nav_id = "site-nav"
            modals_end = "FOOTER"
        "#,
        )
        .unwrap();
        assert_eq!(markers.nav_id, "site-nav");
        assert_eq!(markers.main_id, "app");
        assert_eq!(markers.modals_end.as_deref(), Some("FOOTER"));
    }
}
