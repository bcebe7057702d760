//! Navigation bar builder.

use crate::config::PageSpec;

/// Rebuild the navigation bar for one page.
///
/// The opening tag is reused verbatim from the source document so any
/// classes or attributes on it survive. Buttons are emitted in registry
/// order; the entry whose key equals `active` gets the `active-nav`
/// class, all others stay plain.
pub fn build_nav(pages: &[PageSpec], nav_open: &str, active: &str) -> String {
    let mut lines = vec![nav_open.to_owned()];

    for page in pages {
        let class = if page.key == active {
            "nav-btn active-nav"
        } else {
            "nav-btn"
        };
        lines.push(format!(
            "        <button class=\"{class}\" onclick=\"window.location.href='{file}'\"><span class=\"material-symbols-rounded\">{icon}</span></button>",
            file = page.file,
            icon = page.icon,
        ));
    }

    lines.push("    </nav>".to_owned());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    const NAV_OPEN: &str = r#"<nav id="main-nav" class="glass-nav">"#;

    #[test]
    fn test_one_button_per_page() {
        let pages = defaults::pages::registry();
        let nav = build_nav(&pages, NAV_OPEN, "home");
        assert_eq!(nav.matches("<button").count(), pages.len());
        assert!(nav.starts_with(NAV_OPEN));
        assert!(nav.ends_with("    </nav>"));
    }

    #[test]
    fn test_exactly_one_active_button() {
        let pages = defaults::pages::registry();
        let nav = build_nav(&pages, NAV_OPEN, "drinks");
        assert_eq!(nav.matches("active-nav").count(), 1);

        let active_line = nav
            .lines()
            .find(|l| l.contains("active-nav"))
            .unwrap();
        assert!(active_line.contains("window.location.href='drinks.html'"));
        assert!(active_line.contains("menu_book"));
    }

    #[test]
    fn test_unrecognized_key_marks_nothing_active() {
        let pages = defaults::pages::registry();
        let nav = build_nav(&pages, NAV_OPEN, "espresso");
        assert_eq!(nav.matches("active-nav").count(), 0);
        assert_eq!(nav.matches("nav-btn").count(), pages.len());
    }

    #[test]
    fn test_button_order_follows_registry() {
        let pages = defaults::pages::registry();
        let nav = build_nav(&pages, NAV_OPEN, "home");
        let home = nav.find("index.html").unwrap();
        let brew = nav.find("brew.html").unwrap();
        let knowledge = nav.find("knowledge.html").unwrap();
        assert!(home < brew && brew < knowledge);
    }
}
