//! Values injected into `window` by the server-rendered page.

use contracts::dashboards::d400_sales_overview::{RegionRecord, SalesOverviewData, SegmentRecord};
use js_sys::Reflect;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::JsValue;

pub const REGION_DATA_GLOBAL: &str = "regionDataFromFlask";
pub const SEGMENT_DATA_GLOBAL: &str = "segDataFromFlask";

#[derive(Debug, thiserror::Error)]
pub enum InjectedDataError {
    #[error("window is not available")]
    NoWindow,
    #[error("cannot read window.{name}: {message}")]
    Read { name: String, message: String },
    #[error("window.{name} has unexpected shape: {message}")]
    Shape { name: String, message: String },
}

/// Read and deserialize `window[name]`.
///
/// `Ok(None)` when the global is absent, `undefined` or `null`.
pub fn read_global<T: DeserializeOwned>(name: &str) -> Result<Option<T>, InjectedDataError> {
    let window = web_sys::window().ok_or(InjectedDataError::NoWindow)?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).map_err(|e| {
        InjectedDataError::Read {
            name: name.to_string(),
            message: format!("{:?}", e),
        }
    })?;

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| InjectedDataError::Shape {
            name: name.to_string(),
            message: e.to_string(),
        })
}

/// Deserialize each row on its own. Rows that don't fit `T` are logged and
/// dropped; the rest are kept in order.
///
/// # Examples
///
/// ```
/// use contracts::dashboards::d400_sales_overview::SegmentRecord;
/// use frontend::shared::injected::collect_valid_rows;
/// use serde_json::json;
///
/// let rows = vec![
///     json!({ "age_group": 20, "sex": 1, "total_sales": 300 }),
///     json!({ "age_group": 40, "sex": 0, "total_sales": 80 }),
/// ];
/// let records: Vec<SegmentRecord> = collect_valid_rows("segDataFromFlask", rows);
/// assert_eq!(records.len(), 1);
/// ```
pub fn collect_valid_rows<T: DeserializeOwned>(name: &str, rows: Vec<Value>) -> Vec<T> {
    let total = rows.len();
    let records: Vec<T> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping window.{}[{}]: {}", name, i, err);
                None
            }
        })
        .collect();

    if records.len() < total {
        log::warn!("window.{}: kept {} of {} rows", name, records.len(), total);
    }
    records
}

fn read_records<T: DeserializeOwned>(name: &str) -> Vec<T> {
    match read_global::<Vec<Value>>(name) {
        Ok(Some(rows)) => collect_valid_rows(name, rows),
        Ok(None) => {
            log::debug!("window.{} not set", name);
            Vec::new()
        }
        Err(err) => {
            log::warn!("{}", err);
            Vec::new()
        }
    }
}

/// Both sales datasets. A missing global or one that is not an array yields
/// an empty list; malformed rows are dropped one by one.
pub fn read_sales_overview() -> SalesOverviewData {
    let regions: Vec<RegionRecord> = read_records(REGION_DATA_GLOBAL);
    let segments: Vec<SegmentRecord> = read_records(SEGMENT_DATA_GLOBAL);
    log::debug!(
        "Injected data: {} regions, {} segments",
        regions.len(),
        segments.len()
    );
    SalesOverviewData { regions, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_sales_overview::Sex;
    use serde_json::json;

    #[test]
    fn test_bad_segment_rows_do_not_empty_the_list() {
        let rows = vec![
            json!({ "age_group": 20, "sex": 1, "total_sales": 300 }),
            json!({ "age_group": 30, "sex": 2, "total_sales": 150 }),
            json!({ "age_group": 40, "sex": 0, "total_sales": 80 }),
            json!({ "age_group": 50, "sex": 2, "total_sales": null }),
        ];
        let records: Vec<SegmentRecord> = collect_valid_rows(SEGMENT_DATA_GLOBAL, rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sex, Sex::Male);
        assert_eq!(records[1].age_group, 30);
    }

    #[test]
    fn test_bad_region_rows_do_not_empty_the_list() {
        let rows = vec![
            json!({ "area": "滋賀県", "total_sales": 100 }),
            json!({ "area": "京都府", "total_sales": null }),
            json!("not a record"),
            json!({ "area": "東京都", "total_sales": 500.5 }),
        ];
        let records: Vec<RegionRecord> = collect_valid_rows(REGION_DATA_GLOBAL, rows);
        let areas: Vec<&str> = records.iter().map(|r| r.area.as_str()).collect();
        assert_eq!(areas, ["滋賀県", "東京都"]);
        assert_eq!(records[1].total_sales, 500.5);
    }

    #[test]
    fn test_all_valid_rows_are_kept_in_order() {
        let rows = vec![
            json!({ "area": "大阪府", "total_sales": 3 }),
            json!({ "area": "北海道", "total_sales": 1 }),
        ];
        let records: Vec<RegionRecord> = collect_valid_rows(REGION_DATA_GLOBAL, rows);
        assert_eq!(records[0].area, "大阪府");
        assert_eq!(records[1].area, "北海道");
    }
}
