//! Which chrome a page gets: the top navigation bar, the footer, and the
//! sidebar on the home page.

/// Sections that render their own header instead of the shared top nav.
const TOP_NAV_HIDDEN_PREFIXES: &[&str] = &["/dashboard", "/request", "/documents", "/admin"];

/// Sections that render without the shared footer.
const FOOTER_HIDDEN_PREFIXES: &[&str] = &[
    "/dashboard",
    "/request",
    "/documents",
    "/homepage",
    "/announcements",
    "/contact",
    "/inquiry",
    "/admin",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavVisibility {
    pub show_top_nav: bool,
    pub show_footer: bool,
}

impl NavVisibility {
    /// The landing page at `/` hides both.
    pub fn for_path(path: &str) -> Self {
        let is_landing = path == "/";
        Self {
            show_top_nav: !is_landing && !has_any_prefix(path, TOP_NAV_HIDDEN_PREFIXES),
            show_footer: !is_landing && !has_any_prefix(path, FOOTER_HIDDEN_PREFIXES),
        }
    }
}

fn has_any_prefix(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SIDEBAR_LINKS: &[SidebarLink] = &[
    SidebarLink { label: "About Us", href: "#" },
    SidebarLink { label: "Barangay Officials", href: "#Barangay-Officials" },
    SidebarLink { label: "Privacy Policy", href: "#Privacy-Policy" },
    SidebarLink { label: "FAQs", href: "#FAQs" },
    SidebarLink { label: "Our Location", href: "#Our-Location" },
];
