//! Sidebar menu

use crate::routes::routes::{current_path, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Page highlighted by this item; `None` for server-rendered pages
    page: Option<Page>,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            href: "/home",
            label: "ホーム",
            icon: "home",
            page: Some(Page::Home),
        },
        MenuItem {
            href: "/",
            label: "経営ダッシュボード",
            icon: "bar-chart",
            page: Some(Page::Dashboard),
        },
        MenuItem {
            href: "/search.html",
            label: "顧客検索",
            icon: "search",
            page: Some(Page::Search),
        },
        MenuItem {
            href: "/stock.html",
            label: "在庫管理",
            icon: "package",
            page: None,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let current = Page::from_path(&current_path());

    view! {
        <ul class="app-sidebar__content">
            {get_menu_items()
                .into_iter()
                .map(|item| {
                    let is_active = item.page == Some(current);
                    view! {
                        <li>
                            <a
                                href=item.href
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=is_active
                            >
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
