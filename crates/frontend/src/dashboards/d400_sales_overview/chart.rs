//! ECharts (charming) builders for the regional and demographic views.

use charming::{
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::Bar,
    Chart, WasmRenderer,
};
use contracts::dashboards::d400_sales_overview::{RegionRecord, SegmentRecord, Sex};

const CHART_HEIGHT: u32 = 400;
const FALLBACK_WIDTH: u32 = 640;
const SEGMENT_STACK: &str = "gender";

/// Sales per age group, split by sex. Missing cells are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPivot {
    pub age_groups: Vec<u32>,
    pub male: Vec<f64>,
    pub female: Vec<f64>,
}

impl SegmentPivot {
    pub fn from_records(records: &[SegmentRecord]) -> Self {
        let mut age_groups: Vec<u32> = records.iter().map(|r| r.age_group).collect();
        age_groups.sort_unstable();
        age_groups.dedup();

        // Linear scan per cell; datasets are a few dozen rows
        let series_for = |sex: Sex| -> Vec<f64> {
            age_groups
                .iter()
                .map(|age| {
                    records
                        .iter()
                        .find(|r| r.age_group == *age && r.sex == sex)
                        .map(|r| r.total_sales)
                        .unwrap_or(0.0)
                })
                .collect()
        };

        Self {
            male: series_for(Sex::Male),
            female: series_for(Sex::Female),
            age_groups,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.age_groups.is_empty()
    }

    /// Category labels, e.g. "20代".
    pub fn labels(&self) -> Vec<String> {
        self.age_groups.iter().map(|a| age_group_label(*a)).collect()
    }
}

pub fn age_group_label(age_group: u32) -> String {
    format!("{}代", age_group)
}

fn yen_formatter() -> JsFunction {
    JsFunction::new_with_args("value", "return '¥' + Number(value).toLocaleString();")
}

fn yen_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(yen_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

fn grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

/// One bar per region. `None` when there is nothing to plot.
pub fn region_bar_chart(records: &[RegionRecord]) -> Option<Chart> {
    if records.is_empty() {
        return None;
    }

    let labels: Vec<String> = records.iter().map(|r| r.area.clone()).collect();
    let sales: Vec<f64> = records.iter().map(|r| r.total_sales).collect();

    Some(
        Chart::new()
            .tooltip(yen_tooltip())
            .grid(grid())
            .x_axis(Axis::new().type_(AxisType::Category).data(labels))
            .y_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .axis_label(AxisLabel::new().formatter(yen_formatter())),
            )
            .series(Bar::new().name("地域別売上").data(sales)),
    )
}

/// Sales by age group, male and female stacked. `None` when empty.
pub fn segment_stacked_chart(records: &[SegmentRecord]) -> Option<Chart> {
    let pivot = SegmentPivot::from_records(records);
    if pivot.is_empty() {
        return None;
    }

    Some(
        Chart::new()
            .tooltip(yen_tooltip())
            .legend(Legend::new().data(vec![Sex::Male.label(), Sex::Female.label()]))
            .grid(grid())
            .x_axis(Axis::new().type_(AxisType::Category).data(pivot.labels()))
            .y_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .axis_label(AxisLabel::new().formatter(yen_formatter())),
            )
            .series(
                Bar::new()
                    .name(Sex::Male.label())
                    .stack(SEGMENT_STACK)
                    .data(pivot.male),
            )
            .series(
                Bar::new()
                    .name(Sex::Female.label())
                    .stack(SEGMENT_STACK)
                    .data(pivot.female),
            ),
    )
}

/// Draw-once latch for a chart living in a switchable panel.
///
/// A hidden panel has `display: none`, so its mount reports a zero width.
/// The chart is drawn the first time its panel is shown and left alone after.
///
/// # Examples
///
/// ```
/// use frontend::dashboards::d400_sales_overview::chart::DeferredChart;
///
/// let mut latch = DeferredChart::default();
/// assert!(!latch.should_render(false)); // map panel shown at load
/// assert!(latch.should_render(true));   // first switch to the graph
/// assert!(!latch.should_render(false));
/// assert!(!latch.should_render(true));  // already drawn
/// assert!(latch.is_rendered());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeferredChart {
    rendered: bool,
}

impl DeferredChart {
    pub fn should_render(&mut self, visible: bool) -> bool {
        if visible && !self.rendered {
            self.rendered = true;
            return true;
        }
        false
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }
}

/// Render `chart` into the element with id `mount_id`.
/// A missing mount is a no-op; renderer failures are logged.
pub fn render_chart(mount_id: &str, chart: &Chart) {
    let Some(mount) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(mount_id))
    else {
        log::debug!("Chart mount #{} not found, skipping", mount_id);
        return;
    };

    let width = match mount.client_width() {
        w if w > 0 => w as u32,
        _ => FALLBACK_WIDTH,
    };

    let renderer = WasmRenderer::new(width, CHART_HEIGHT);
    match renderer.render(mount_id, chart) {
        Ok(_) => log::debug!("Rendered chart #{}", mount_id),
        Err(e) => log::error!("Chart render error in #{}: {:?}", mount_id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(age_group: u32, sex: Sex, total_sales: f64) -> SegmentRecord {
        SegmentRecord {
            age_group,
            sex,
            total_sales,
        }
    }

    #[test]
    fn test_pivot_fills_missing_cells_with_zero() {
        let pivot = SegmentPivot::from_records(&[
            seg(20, Sex::Male, 300.0),
            seg(30, Sex::Female, 150.0),
        ]);
        assert_eq!(pivot.age_groups, vec![20, 30]);
        assert_eq!(pivot.male, vec![300.0, 0.0]);
        assert_eq!(pivot.female, vec![0.0, 150.0]);
    }

    #[test]
    fn test_age_groups_sort_numerically() {
        let pivot = SegmentPivot::from_records(&[
            seg(100, Sex::Male, 1.0),
            seg(30, Sex::Male, 2.0),
            seg(9, Sex::Female, 3.0),
            seg(30, Sex::Female, 4.0),
        ]);
        assert_eq!(pivot.age_groups, vec![9, 30, 100]);
        assert_eq!(pivot.labels(), vec!["9代", "30代", "100代"]);
        assert_eq!(pivot.male, vec![0.0, 2.0, 1.0]);
        assert_eq!(pivot.female, vec![3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_empty_datasets_build_no_chart() {
        assert!(region_bar_chart(&[]).is_none());
        assert!(segment_stacked_chart(&[]).is_none());
    }

    #[test]
    fn test_deferred_chart_waits_for_visible_panel() {
        let mut latch = DeferredChart::default();
        assert!(!latch.should_render(false));
        assert!(!latch.should_render(false));
        assert!(!latch.is_rendered());

        assert!(latch.should_render(true));
        assert!(latch.is_rendered());
        // Switching away and back does not redraw
        assert!(!latch.should_render(false));
        assert!(!latch.should_render(true));
    }

    #[test]
    fn test_deferred_chart_visible_at_load_renders_immediately() {
        let mut latch = DeferredChart::default();
        assert!(latch.should_render(true));
        assert!(!latch.should_render(true));
    }

    #[test]
    fn test_charts_built_for_data() {
        let regions = vec![RegionRecord {
            area: "東京都".to_string(),
            total_sales: 500.0,
        }];
        assert!(region_bar_chart(&regions).is_some());
        assert!(segment_stacked_chart(&[seg(40, Sex::Male, 10.0)]).is_some());
    }
}
