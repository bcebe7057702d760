//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. With no
//! config file at all, the defaults reproduce the original coffee-site
//! tables exactly.

pub mod split {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn source() -> PathBuf {
        "index.html".into()
    }

    pub fn output() -> PathBuf {
        ".".into()
    }
}

pub mod pages {
    use crate::config::pages::{PageSpec, Placement};

    /// The six known pages, in navigation order.
    pub fn registry() -> Vec<PageSpec> {
        vec![
            PageSpec::new("home", "index.html", "home"),
            PageSpec::new("brew", "brew.html", "coffee_maker").with_modal("Brew Modal"),
            PageSpec::new("drinks", "drinks.html", "menu_book").with_modal("Drink Modal"),
            PageSpec::new("shops", "shops.html", "storefront").with_modal("Shop Modal"),
            PageSpec::new("dialin", "dialin.html", "tune"),
            PageSpec::new("knowledge", "knowledge.html", "school").with_placement(Placement::Detached),
        ]
    }

    pub fn placement() -> Placement {
        Placement::Inline
    }
}

pub mod markers {
    pub fn nav_id() -> String {
        "main-nav".into()
    }

    pub fn main_id() -> String {
        "app".into()
    }

    pub fn scripts_src() -> String {
        "js/firebase-config.js".into()
    }

    pub fn modals() -> String {
        "MODALS".into()
    }

    pub fn global_modal() -> String {
        "Auth Modal".into()
    }

    pub fn modals_end() -> Option<String> {
        Some("KNOWLEDGE BASE".into())
    }
}

pub mod restitch {
    use std::collections::HashMap;

    pub fn layout() -> String {
        "index.html".into()
    }

    pub fn modals() -> String {
        "shops.html".into()
    }

    /// Which already-split file each section is taken back out of.
    pub fn sections() -> HashMap<String, String> {
        [
            ("home", "index.html"),
            ("brew", "shops.html"),
            ("drinks", "shops.html"),
            ("dialin", "shops.html"),
            ("shops", "shops.html"),
            ("knowledge", "knowledge.html"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }
}

pub mod modals {
    use crate::config::modals::SnippetSpec;

    pub fn file() -> String {
        "index.html".into()
    }

    pub fn revision() -> String {
        "HEAD".into()
    }

    pub fn snippets() -> Vec<SnippetSpec> {
        vec![
            SnippetSpec::new("brew-modal", "brew_modal.txt"),
            SnippetSpec::new("drink-modal", "drink_modal.txt"),
        ]
    }
}
