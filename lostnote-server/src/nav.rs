//! Site navigation drawer

use lostnote_core::encoder::escape_html;

/// One entry of the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/",
        label: "Home",
    },
    NavItem {
        href: "/story",
        label: "Story",
    },
    NavItem {
        href: "/sheet-music",
        label: "Sheet Music",
    },
];

/// `/` is active only on an exact match; other items match by prefix
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path.starts_with(href)
    }
}

/// Drawer markup for the page at `path`
///
/// A `<details>` element toggles the drawer so the menu works without script.
pub fn render_nav(path: &str) -> String {
    let mut html = String::from(
        "<details class=\"ln-nav\">\n\
         <summary aria-label=\"Toggle navigation menu\">&#9776;</summary>\n\
         <nav class=\"ln-nav-panel\">\n<h2>Menu</h2>\n",
    );
    for item in NAV_ITEMS {
        let (class, current) = if is_active(item.href, path) {
            ("ln-nav-item ln-nav-active", " aria-current=\"page\"")
        } else {
            ("ln-nav-item", "")
        };
        html.push_str(&format!(
            "<a class=\"{class}\" href=\"{}\"{current}>{}</a>\n",
            item.href,
            escape_html(item.label)
        ));
    }
    html.push_str("</nav>\n</details>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_exact_match_only() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/story"));
    }

    #[test]
    fn test_prefix_match() {
        assert!(is_active("/story", "/story"));
        assert!(is_active("/sheet-music", "/sheet-music/2"));
        assert!(!is_active("/story", "/sheet-music"));
    }

    #[test]
    fn test_render_marks_current_item() {
        let html = render_nav("/sheet-music");
        assert!(html.contains(
            "<a class=\"ln-nav-item ln-nav-active\" href=\"/sheet-music\" aria-current=\"page\">Sheet Music</a>"
        ));
        assert!(html.contains("<a class=\"ln-nav-item\" href=\"/\">Home</a>"));
    }
}
