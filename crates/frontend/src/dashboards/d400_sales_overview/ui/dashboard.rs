use crate::dashboards::d400_sales_overview::api;
use crate::dashboards::d400_sales_overview::chart::{
    age_group_label, region_bar_chart, render_chart, segment_stacked_chart, DeferredChart,
    SegmentPivot,
};
use crate::dashboards::d400_sales_overview::color::ColorScale;
use crate::dashboards::d400_sales_overview::map_painter::paint_map;
use crate::dashboards::d400_sales_overview::prefectures::prefecture_keys;
use crate::dashboards::d400_sales_overview::view_switcher::{
    legend_visible, RegionView, SegmentView, ViewPanel, ViewSwitcher,
};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::number_format::{format_currency, format_yen};
use contracts::dashboards::d400_sales_overview::{RegionRecord, SalesOverviewData, Sex};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

const REGION_CHART_ID: &str = "regionBarChart";
const SEGMENT_CHART_ID: &str = "segStackBar";
const MAP_CONTAINER_ID: &str = "japanMapSvg";

/// Sales overview: regional map/graph/table and demographic graph/table
#[component]
pub fn SalesOverviewDashboard(data: SalesOverviewData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let map_svg_url = ctx.config.with_value(|c| c.map_svg_url.clone());

    let data = StoredValue::new(data);
    let region_view = RwSignal::new(RegionView::default());
    let segment_view = RwSignal::new(SegmentView::default());

    // Each chart is drawn when its Graph panel is first shown, so the
    // mount has a real width by then
    Effect::new(move |latch: Option<DeferredChart>| {
        let mut latch = latch.unwrap_or_default();
        if latch.should_render(region_view.get() == RegionView::Graph) {
            match data.with_value(|d| region_bar_chart(&d.regions)) {
                Some(chart) => render_chart(REGION_CHART_ID, &chart),
                None => log::debug!("No regional data, chart skipped"),
            }
        }
        latch
    });

    Effect::new(move |latch: Option<DeferredChart>| {
        let mut latch = latch.unwrap_or_default();
        if latch.should_render(segment_view.get() == SegmentView::Graph) {
            match data.with_value(|d| segment_stacked_chart(&d.segments)) {
                Some(chart) => render_chart(SEGMENT_CHART_ID, &chart),
                None => log::debug!("No segment data, chart skipped"),
            }
        }
        latch
    });

    let scale = data.with_value(|d| ColorScale::from_values(d.regions.iter().map(|r| r.total_sales)));
    let regions = data.with_value(|d| d.regions.clone());
    let pivot = data.with_value(|d| SegmentPivot::from_records(&d.segments));
    let legend_style = move || {
        if legend_visible(region_view.get()) {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    view! {
        <div id="d400_sales_overview--dashboard" class="d400-dashboard">
            <SummaryStrip data=data />

            <section class="dashboard-section">
                <div class="dashboard-section__header">
                    <h2 class="dashboard-section__title">"地域別売上"</h2>
                    <ViewSwitcher prefix="region" active=region_view />
                </div>

                <div
                    id="colorLegend"
                    class="color-legend"
                    style=legend_style
                >
                    <ColorLegend scale=scale />
                </div>

                <ViewPanel prefix="region" panel=RegionView::Map active=region_view>
                    <JapanMap data=data url=map_svg_url />
                </ViewPanel>
                <ViewPanel prefix="region" panel=RegionView::Graph active=region_view>
                    <div id=REGION_CHART_ID class="chart-mount"></div>
                </ViewPanel>
                <ViewPanel prefix="region" panel=RegionView::Table active=region_view>
                    <RegionTable regions=regions />
                </ViewPanel>
            </section>

            <section class="dashboard-section">
                <div class="dashboard-section__header">
                    <h2 class="dashboard-section__title">"年代・性別売上"</h2>
                    <ViewSwitcher prefix="seg" active=segment_view />
                </div>

                <ViewPanel prefix="seg" panel=SegmentView::Graph active=segment_view>
                    <div id=SEGMENT_CHART_ID class="chart-mount"></div>
                </ViewPanel>
                <ViewPanel prefix="seg" panel=SegmentView::Table active=segment_view>
                    <SegmentTable pivot=pivot />
                </ViewPanel>
            </section>
        </div>
    }
}

#[component]
fn SummaryStrip(data: StoredValue<SalesOverviewData>) -> impl IntoView {
    let (total, count, top) = data.with_value(|d| {
        (
            d.total_sales(),
            d.regions.len(),
            d.top_region().map(|r| format!("{} ({})", r.area, format_yen(r.total_sales))),
        )
    });

    view! {
        <div class="summary-strip">
            <div class="summary-strip__item">
                <div class="summary-strip__label">"総売上"</div>
                <div class="summary-strip__value">{format_yen(total)}</div>
            </div>
            <div class="summary-strip__item">
                <div class="summary-strip__label">"地域数"</div>
                <div class="summary-strip__value">{count}</div>
            </div>
            <div class="summary-strip__item">
                <div class="summary-strip__label">"売上トップ"</div>
                <div class="summary-strip__value">{top.unwrap_or_else(|| "-".to_string())}</div>
            </div>
        </div>
    }
}

#[component]
fn ColorLegend(scale: ColorScale) -> impl IntoView {
    let low = scale.color_for(scale.min).to_string();
    let high = scale.color_for(scale.max).to_string();

    view! {
        <div
            class="color-legend__bar"
            style=format!("background: linear-gradient(to right, {}, {});", low, high)
        ></div>
        <div class="color-legend__labels">
            <span>{format_yen(scale.min)}</span>
            <span>{format_yen(scale.max)}</span>
        </div>
    }
}

/// Loads the map SVG into the panel and paints it once mounted.
#[component]
fn JapanMap(data: StoredValue<SalesOverviewData>, url: String) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        if data.with_value(|d| d.regions.is_empty()) {
            return;
        }
        let Some(container) = container.get() else {
            return;
        };
        let url = url.clone();

        spawn_local(async move {
            match api::fetch_map_svg(&url).await {
                Ok(markup) => {
                    container.set_inner_html(&markup);
                    let result = data.with_value(|d| paint_map(&container, &d.regions, prefecture_keys()));
                    if let Err(err) = result {
                        log::error!("Failed to paint map: {:?}", err);
                    }
                }
                Err(err) => {
                    log::error!("Failed to load map from {}: {}", url, err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    view! {
        {move || error.get().map(|err| view! {
            <div class="d400-error">
                <strong>"⚠ 地図を読み込めませんでした: "</strong>
                {err}
            </div>
        })}
        <div id=MAP_CONTAINER_ID class="japan-map" node_ref=container></div>
    }
}

#[component]
fn RegionTable(regions: Vec<RegionRecord>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"地域"</TableHeaderCell>
                    <TableHeaderCell>"売上(円)"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {regions
                    .into_iter()
                    .map(|r| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout>{r.area}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_currency(r.total_sales)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn SegmentTable(pivot: SegmentPivot) -> impl IntoView {
    let rows: Vec<(u32, f64, f64)> = pivot
        .age_groups
        .iter()
        .zip(pivot.male.iter().zip(pivot.female.iter()))
        .map(|(age, (male, female))| (*age, *male, *female))
        .collect();

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"年代"</TableHeaderCell>
                    <TableHeaderCell>{Sex::Male.label()}</TableHeaderCell>
                    <TableHeaderCell>{Sex::Female.label()}</TableHeaderCell>
                    <TableHeaderCell>"合計"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows
                    .into_iter()
                    .map(|(age, male, female)| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout>{age_group_label(age)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_currency(male)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_currency(female)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_currency(male + female)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}
