use serde::{Deserialize, Serialize};

/// Sales total for one prefecture (`window.regionDataFromFlask` item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Prefecture display name, e.g. "東京都"
    pub area: String,
    pub total_sales: f64,
}

/// Sales total for one demographic cell (`window.segDataFromFlask` item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Decade bucket: 20, 30, 40, ...
    pub age_group: u32,
    pub sex: Sex,
    pub total_sales: f64,
}

/// Customer sex as coded by the sales database (1 = male, 2 = female)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Label used for chart series and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "男性",
            Sex::Female => "女性",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sex code: {0}")]
pub struct UnknownSexCode(pub u8);

impl TryFrom<u8> for Sex {
    type Error = UnknownSexCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Sex::Male),
            2 => Ok(Sex::Female),
            other => Err(UnknownSexCode(other)),
        }
    }
}

impl From<Sex> for u8 {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => 1,
            Sex::Female => 2,
        }
    }
}

/// Both datasets the dashboard page is rendered with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewData {
    pub regions: Vec<RegionRecord>,
    pub segments: Vec<SegmentRecord>,
}

impl SalesOverviewData {
    /// Sum of all regional totals.
    pub fn total_sales(&self) -> f64 {
        self.regions.iter().map(|r| r.total_sales).sum()
    }

    /// Region with the highest total; the first one wins on ties.
    pub fn top_region(&self) -> Option<&RegionRecord> {
        self.regions.iter().fold(None, |best, r| match best {
            Some(b) if b.total_sales >= r.total_sales => Some(b),
            _ => Some(r),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_record_uses_numeric_sex_code() {
        let json = r#"[{"age_group":20,"sex":1,"total_sales":300},{"age_group":30,"sex":2,"total_sales":150.5}]"#;
        let records: Vec<SegmentRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].sex, Sex::Male);
        assert_eq!(records[1].sex, Sex::Female);
        assert_eq!(records[1].total_sales, 150.5);

        let back = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(back["sex"], 1);
    }

    #[test]
    fn test_unknown_sex_code_is_rejected() {
        let json = r#"{"age_group":20,"sex":3,"total_sales":1}"#;
        assert!(serde_json::from_str::<SegmentRecord>(json).is_err());
        assert_eq!(Sex::try_from(0), Err(UnknownSexCode(0)));
    }

    #[test]
    fn test_total_and_top_region() {
        let data = SalesOverviewData {
            regions: vec![
                RegionRecord { area: "滋賀県".into(), total_sales: 100.0 },
                RegionRecord { area: "東京都".into(), total_sales: 500.0 },
                RegionRecord { area: "大阪府".into(), total_sales: 500.0 },
            ],
            segments: vec![],
        };
        assert_eq!(data.total_sales(), 1100.0);
        assert_eq!(data.top_region().map(|r| r.area.as_str()), Some("東京都"));
        assert!(SalesOverviewData::default().top_region().is_none());
    }
}
