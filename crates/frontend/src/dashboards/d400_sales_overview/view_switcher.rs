//! Mutually exclusive panels (map / graph / table) with their toggle buttons.

use crate::shared::icons::icon;
use leptos::prelude::*;

pub const ACTIVE_BUTTON_CLASS: &str = "active-btn";

/// A panel group: each variant is one panel with one button.
pub trait PanelView: Copy + PartialEq + Send + Sync + 'static {
    /// Panels in button order
    fn all() -> &'static [Self];
    fn label(&self) -> &'static str;
    fn icon_name(&self) -> &'static str;
    /// Id fragment: `region` + `Map` -> `regionMap` / `regionMapBtn`
    fn dom_suffix(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionView {
    #[default]
    Map,
    Graph,
    Table,
}

impl PanelView for RegionView {
    fn all() -> &'static [Self] {
        &[RegionView::Map, RegionView::Graph, RegionView::Table]
    }

    fn label(&self) -> &'static str {
        match self {
            RegionView::Map => "地図",
            RegionView::Graph => "グラフ",
            RegionView::Table => "表",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            RegionView::Map => "map",
            RegionView::Graph => "bar-chart",
            RegionView::Table => "table",
        }
    }

    fn dom_suffix(&self) -> &'static str {
        match self {
            RegionView::Map => "Map",
            RegionView::Graph => "Graph",
            RegionView::Table => "Table",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentView {
    #[default]
    Graph,
    Table,
}

impl PanelView for SegmentView {
    fn all() -> &'static [Self] {
        &[SegmentView::Graph, SegmentView::Table]
    }

    fn label(&self) -> &'static str {
        match self {
            SegmentView::Graph => "グラフ",
            SegmentView::Table => "表",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            SegmentView::Graph => "bar-chart",
            SegmentView::Table => "table",
        }
    }

    fn dom_suffix(&self) -> &'static str {
        match self {
            SegmentView::Graph => "Graph",
            SegmentView::Table => "Table",
        }
    }
}

pub fn is_visible<V: PanelView>(active: V, panel: V) -> bool {
    active == panel
}

pub fn display_style<V: PanelView>(active: V, panel: V) -> &'static str {
    if is_visible(active, panel) {
        "display: block;"
    } else {
        "display: none;"
    }
}

/// The color legend only makes sense next to the map.
pub fn legend_visible(active: RegionView) -> bool {
    active == RegionView::Map
}

pub fn button_class<V: PanelView>(active: V, panel: V) -> &'static str {
    if is_visible(active, panel) {
        ACTIVE_BUTTON_CLASS
    } else {
        ""
    }
}

/// Button row for a panel group. `prefix` is the group's id prefix
/// (`region`, `seg`).
#[component]
pub fn ViewSwitcher<V: PanelView>(prefix: &'static str, active: RwSignal<V>) -> impl IntoView {
    view! {
        <div class="view-switcher" role="tablist">
            {V::all()
                .iter()
                .copied()
                .map(|panel| {
                    view! {
                        <button
                            type="button"
                            id=format!("{}{}Btn", prefix, panel.dom_suffix())
                            class=move || format!("view-switcher__btn {}", button_class(active.get(), panel))
                            aria-pressed=move || is_visible(active.get(), panel).to_string()
                            on:click=move |_| active.set(panel)
                        >
                            {icon(panel.icon_name())}
                            <span>{panel.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One panel of a group; shown only while `panel` is active.
#[component]
pub fn ViewPanel<V: PanelView>(
    prefix: &'static str,
    panel: V,
    active: RwSignal<V>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=format!("{}{}", prefix, panel.dom_suffix())
            class="view-panel"
            style=move || display_style(active.get(), panel)
        >
            {children()}
        </div>
    }
}
