use contracts::shared::page_config::PageConfig;
use serde_json::Value;

/// Site configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
autoplay_ms = 3000
pause_on_hover = true
search_error_display = "inline"
back_to_top_threshold = 300.0
map_svg_url = "/static/img/japan.svg"

[sidebar]
class_name = "active"
sidebar = true
content = true
icon = false

[[slides]]
src = "/static/img/slide1.jpg"
alt = "春の新商品"

[[slides]]
src = "/static/img/slide2.jpg"
alt = "期間限定セール"

[[slides]]
src = "/static/img/slide3.jpg"
alt = "会員特典のご案内"
"#;

/// Global the hosting page may define to override the embedded config
const CONFIG_GLOBAL: &str = "dashboardConfig";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("embedded config is invalid: {0}")]
    Embedded(#[from] toml::de::Error),
    #[error("page config override is invalid: {0}")]
    Overlay(String),
}

/// Parse the embedded TOML configuration.
pub fn embedded_config() -> Result<PageConfig, ConfigError> {
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Apply a JSON override on top of `base`. Objects merge key by key,
/// everything else replaces.
pub fn apply_overlay(base: &PageConfig, overlay: Value) -> Result<PageConfig, ConfigError> {
    let mut merged =
        serde_json::to_value(base).map_err(|e| ConfigError::Overlay(e.to_string()))?;
    merge_json(&mut merged, overlay);
    serde_json::from_value(merged).map_err(|e| ConfigError::Overlay(e.to_string()))
}

fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Load the page configuration: embedded defaults, then `window.dashboardConfig`.
///
/// Never fails; problems are logged and the best known config is returned.
pub fn load_page_config() -> PageConfig {
    let base = embedded_config().unwrap_or_else(|err| {
        log::error!("{}", err);
        PageConfig::default()
    });

    let overlay = match crate::shared::injected::read_global::<Value>(CONFIG_GLOBAL) {
        Ok(Some(value)) => value,
        Ok(None) => return base,
        Err(err) => {
            log::warn!("Ignoring window.{}: {}", CONFIG_GLOBAL, err);
            return base;
        }
    };

    match apply_overlay(&base, overlay) {
        Ok(config) => {
            log::debug!("Page config overridden by window.{}", CONFIG_GLOBAL);
            config
        }
        Err(err) => {
            log::warn!("{}", err);
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page_config::ErrorDisplay;
    use serde_json::json;

    #[test]
    fn test_default_config_loads() {
        let config = embedded_config().unwrap();
        assert_eq!(config.autoplay_ms, 3000);
        assert_eq!(config.slides.len(), 3);
        assert_eq!(config.sidebar, PageConfig::default().sidebar);
    }

    #[test]
    fn test_overlay_merges_nested_objects() {
        let base = embedded_config().unwrap();
        let config = apply_overlay(
            &base,
            json!({
                "search_error_display": "alert",
                "sidebar": { "class_name": "open", "content": false, "icon": true }
            }),
        )
        .unwrap();

        assert_eq!(config.search_error_display, ErrorDisplay::Alert);
        assert_eq!(config.sidebar.class_name, "open");
        assert!(config.sidebar.sidebar);
        assert!(!config.sidebar.content);
        assert!(config.sidebar.icon);
        assert_eq!(config.slides, base.slides);
    }

    #[test]
    fn test_overlay_replaces_arrays() {
        let base = embedded_config().unwrap();
        let config =
            apply_overlay(&base, json!({ "slides": [{ "src": "/a.png" }] })).unwrap();
        assert_eq!(config.slides.len(), 1);
        assert_eq!(config.slides[0].alt, "");
    }

    #[test]
    fn test_invalid_overlay_is_an_error() {
        let base = PageConfig::default();
        let result = apply_overlay(&base, json!({ "autoplay_ms": "fast" }));
        assert!(matches!(result, Err(ConfigError::Overlay(_))));
    }
}
