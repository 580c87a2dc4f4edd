use crate::dashboards::SalesOverviewDashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::pages::search::SearchPage;
use crate::shared::injected::read_sales_overview;
use leptos::prelude::*;
use web_sys::window;

/// Pages rendered by this bundle. Everything else is served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Home,
    Search,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/home" | "/home.html" => Page::Home,
            "/search" | "/search.html" => Page::Search,
            _ => Page::Dashboard,
        }
    }
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let page = Page::from_path(&current_path());
    log::debug!("Rendering page {:?}", page);

    let center = move || match page {
        Page::Dashboard => view! { <SalesOverviewDashboard data=read_sales_overview() /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Search => {
            let display = ctx.config.with_value(|c| c.search_error_display);
            view! { <SearchPage error_display=display /> }.into_any()
        }
    };

    view! {
        <Shell center=center />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Dashboard);
        assert_eq!(Page::from_path(""), Page::Dashboard);
        assert_eq!(Page::from_path("/index.html"), Page::Dashboard);
        assert_eq!(Page::from_path("/dashboard"), Page::Dashboard);
        assert_eq!(Page::from_path("/home"), Page::Home);
        assert_eq!(Page::from_path("/home.html"), Page::Home);
        assert_eq!(Page::from_path("/search.html"), Page::Search);
        assert_eq!(Page::from_path("/search/"), Page::Search);
        assert_eq!(Page::from_path("/unknown"), Page::Dashboard);
    }
}
