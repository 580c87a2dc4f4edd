//! Page configuration.
//!
//! The frontend starts from an embedded TOML document and overlays whatever
//! the hosting page puts in `window.dashboardConfig`. Every field has a
//! default so partial documents are valid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Carousel autoplay period in milliseconds
    pub autoplay_ms: u32,
    /// Pause carousel autoplay while the pointer is over it
    pub pause_on_hover: bool,
    pub sidebar: SidebarToggleConfig,
    pub search_error_display: ErrorDisplay,
    /// Scroll offset (px) after which the back-to-top button appears
    pub back_to_top_threshold: f64,
    /// URL of the prefecture map SVG
    pub map_svg_url: String,
    pub slides: Vec<Slide>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            autoplay_ms: 3000,
            pause_on_hover: true,
            sidebar: SidebarToggleConfig::default(),
            search_error_display: ErrorDisplay::Inline,
            back_to_top_threshold: 300.0,
            map_svg_url: "/static/img/japan.svg".to_string(),
            slides: Vec::new(),
        }
    }
}

/// Which elements receive the toggle class when the menu icon is clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarToggleConfig {
    pub class_name: String,
    pub sidebar: bool,
    pub content: bool,
    pub icon: bool,
}

impl Default for SidebarToggleConfig {
    fn default() -> Self {
        Self {
            class_name: "active".to_string(),
            sidebar: true,
            content: true,
            icon: false,
        }
    }
}

/// How the search form reports an empty customer id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    #[default]
    Inline,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{"autoplay_ms": 5000, "sidebar": {"class_name": "open"}}"#)
                .unwrap();
        assert_eq!(config.autoplay_ms, 5000);
        assert_eq!(config.sidebar.class_name, "open");
        assert!(config.sidebar.sidebar);
        assert!(config.pause_on_hover);
        assert_eq!(config.search_error_display, ErrorDisplay::Inline);
    }

    #[test]
    fn test_error_display_names() {
        let display: ErrorDisplay = serde_json::from_str(r#""alert""#).unwrap();
        assert_eq!(display, ErrorDisplay::Alert);
    }
}
