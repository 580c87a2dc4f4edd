use contracts::shared::page_config::{PageConfig, SidebarToggleConfig};
use leptos::prelude::*;

/// Page-wide state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_open: RwSignal<bool>,
    pub config: StoredValue<PageConfig>,
}

impl AppGlobalContext {
    pub fn new(config: PageConfig) -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
        log::debug!("Sidebar open: {}", self.sidebar_open.get_untracked());
    }

    pub fn sidebar_toggle(&self) -> SidebarToggle {
        self.config.with_value(|c| SidebarToggle::from(&c.sidebar))
    }
}

/// Elements the menu icon can mark as open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTarget {
    Sidebar,
    Content,
    Icon,
}

/// Which elements get which class while the sidebar is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarToggle {
    pub class_name: String,
    pub sidebar: bool,
    pub content: bool,
    pub icon: bool,
}

impl From<&SidebarToggleConfig> for SidebarToggle {
    fn from(config: &SidebarToggleConfig) -> Self {
        Self {
            class_name: config.class_name.clone(),
            sidebar: config.sidebar,
            content: config.content,
            icon: config.icon,
        }
    }
}

impl SidebarToggle {
    pub fn applies_to(&self, target: ToggleTarget) -> bool {
        match target {
            ToggleTarget::Sidebar => self.sidebar,
            ToggleTarget::Content => self.content,
            ToggleTarget::Icon => self.icon,
        }
    }

    /// Extra class for `target`; empty when closed or not targeted.
    pub fn class_for(&self, target: ToggleTarget, open: bool) -> &str {
        if open && self.applies_to(target) {
            &self.class_name
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(class_name: &str, sidebar: bool, content: bool, icon: bool) -> SidebarToggle {
        SidebarToggle {
            class_name: class_name.to_string(),
            sidebar,
            content,
            icon,
        }
    }

    #[test]
    fn test_sidebar_and_content_variant() {
        let t = SidebarToggle::from(&SidebarToggleConfig::default());
        assert_eq!(t.class_for(ToggleTarget::Sidebar, true), "active");
        assert_eq!(t.class_for(ToggleTarget::Content, true), "active");
        assert_eq!(t.class_for(ToggleTarget::Icon, true), "");
        assert_eq!(t.class_for(ToggleTarget::Sidebar, false), "");
    }

    #[test]
    fn test_open_class_on_icon_variant() {
        let t = toggle("open", true, false, true);
        assert_eq!(t.class_for(ToggleTarget::Sidebar, true), "open");
        assert_eq!(t.class_for(ToggleTarget::Icon, true), "open");
        assert_eq!(t.class_for(ToggleTarget::Content, true), "");
    }

    #[test]
    fn test_two_toggles_restore_state() {
        let t = toggle("active", true, false, true);
        let mut open = false;
        let before = t.class_for(ToggleTarget::Sidebar, open).to_string();
        open = !open;
        assert_eq!(t.class_for(ToggleTarget::Sidebar, open), "active");
        open = !open;
        assert_eq!(t.class_for(ToggleTarget::Sidebar, open), before);
    }
}
