use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Everything the interaction layer needs to know about the page markup and
/// the demo requests it sends.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub result_ids: ResultIds,
    pub menu_open_class: &'static str,
    pub navbar_scroll_threshold: f64,
    pub reveal: RevealOptions,
    pub demo: DemoConfig,
}

#[derive(Clone, Debug)]
pub struct Selectors {
    pub hamburger: &'static str,
    pub nav_menu: &'static str,
    pub nav_link: &'static str,
    pub fragment_anchor: &'static str,
    pub navbar: &'static str,
    pub cards: &'static str,
}

#[derive(Clone, Debug)]
pub struct ResultIds {
    pub method: &'static str,
    pub performance: &'static str,
    pub security: &'static str,
}

#[derive(Clone, Debug)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub concurrent_requests: usize,
    pub large_payload_len: usize,
    pub large_payload_fill: char,
    pub traversal_path: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors {
                hamburger: ".hamburger",
                nav_menu: ".nav-menu",
                nav_link: ".nav-link",
                fragment_anchor: "a[href^=\"#\"]",
                navbar: ".navbar",
                cards: ".feature-card, .demo-card, .cgi-card, .test-card",
            },
            result_ids: ResultIds {
                method: "method-result",
                performance: "perf-result",
                security: "security-result",
            },
            menu_open_class: "active",
            navbar_scroll_threshold: 100.0,
            reveal: RevealOptions {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px", // trigger a little before the bottom edge
            },
            demo: DemoConfig {
                concurrent_requests: 10,
                large_payload_len: 10_000,
                large_payload_fill: 'A',
                traversal_path: "../../../etc/passwd",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageConfig;

    #[test]
    fn defaults_match_page_markup() {
        let config = PageConfig::default();
        assert_eq!(config.selectors.hamburger, ".hamburger");
        assert_eq!(config.selectors.fragment_anchor, "a[href^=\"#\"]");
        assert_eq!(config.result_ids.performance, "perf-result");
        assert_eq!(config.menu_open_class, "active");
    }

    #[test]
    fn demo_defaults() {
        let demo = PageConfig::default().demo;
        assert_eq!(demo.concurrent_requests, 10);
        assert_eq!(demo.large_payload_len, 10_000);
        assert!(demo.traversal_path.starts_with("../"));
    }
}
