use super::color::{ColorScale, Rgb};
use super::prefectures::PrefectureKeyTable;
use crate::shared::number_format::format_yen;
use contracts::dashboards::d400_sales_overview::RegionRecord;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, SvgElement};

const STROKE_COLOR: &str = "#333";
const STROKE_WIDTH: &str = "1";

/// What to apply to one prefecture group of the map
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPaint {
    pub key: &'static str,
    pub fill: Rgb,
    pub tooltip: String,
}

impl RegionPaint {
    pub fn selector(&self) -> String {
        format!("g.{}.prefecture", self.key)
    }
}

/// Compute fills and tooltips for every record with a known prefecture.
///
/// The color range spans all records, including ones that end up skipped.
pub fn plan_region_paint(records: &[RegionRecord], table: &PrefectureKeyTable) -> Vec<RegionPaint> {
    let scale = ColorScale::from_values(records.iter().map(|r| r.total_sales));

    records
        .iter()
        .filter_map(|record| {
            let Some(key) = table.get(record.area.as_str()).copied() else {
                log::warn!("No map key for area '{}'", record.area);
                return None;
            };
            Some(RegionPaint {
                key,
                fill: scale.color_for(record.total_sales),
                tooltip: format!("{}: {}", record.area, format_yen(record.total_sales)),
            })
        })
        .collect()
}

/// Paint the prefecture groups under `svg_root`. Groups missing from the
/// asset are skipped. Returns how many groups were painted.
pub fn paint_map(
    svg_root: &Element,
    records: &[RegionRecord],
    table: &PrefectureKeyTable,
) -> Result<usize, JsValue> {
    let mut painted = 0;

    for paint in plan_region_paint(records, table) {
        let Some(element) = svg_root.query_selector(&paint.selector())? else {
            continue;
        };
        let Some(group) = element.dyn_ref::<SvgElement>() else {
            continue;
        };

        let style = group.style();
        style.set_property("fill", &paint.fill.to_string())?;
        style.set_property("stroke", STROKE_COLOR)?;
        style.set_property("stroke-width", STROKE_WIDTH)?;
        group.set_attribute("title", &paint.tooltip)?;
        painted += 1;
    }

    log::debug!("Painted {} of {} regions", painted, records.len());
    Ok(painted)
}
