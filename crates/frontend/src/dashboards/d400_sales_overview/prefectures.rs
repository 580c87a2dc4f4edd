//! Prefecture display name -> SVG group class used by the Japan map asset.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const PREFECTURES: [(&str, &str); 47] = [
    ("北海道", "hokkaido"),
    ("青森県", "aomori"),
    ("岩手県", "iwate"),
    ("宮城県", "miyagi"),
    ("秋田県", "akita"),
    ("山形県", "yamagata"),
    ("福島県", "fukushima"),
    ("茨城県", "ibaraki"),
    ("栃木県", "tochigi"),
    ("群馬県", "gunma"),
    ("埼玉県", "saitama"),
    ("千葉県", "chiba"),
    ("東京都", "tokyo"),
    ("神奈川県", "kanagawa"),
    ("新潟県", "niigata"),
    ("富山県", "toyama"),
    ("石川県", "ishikawa"),
    ("福井県", "fukui"),
    ("山梨県", "yamanashi"),
    ("長野県", "nagano"),
    ("岐阜県", "gifu"),
    ("静岡県", "shizuoka"),
    ("愛知県", "aichi"),
    ("三重県", "mie"),
    ("滋賀県", "shiga"),
    ("京都府", "kyoto"),
    ("大阪府", "osaka"),
    ("兵庫県", "hyogo"),
    ("奈良県", "nara"),
    ("和歌山県", "wakayama"),
    ("鳥取県", "tottori"),
    ("島根県", "shimane"),
    ("岡山県", "okayama"),
    ("広島県", "hiroshima"),
    ("山口県", "yamaguchi"),
    ("徳島県", "tokushima"),
    ("香川県", "kagawa"),
    ("愛媛県", "ehime"),
    ("高知県", "kochi"),
    ("福岡県", "fukuoka"),
    ("佐賀県", "saga"),
    ("長崎県", "nagasaki"),
    ("熊本県", "kumamoto"),
    ("大分県", "oita"),
    ("宮崎県", "miyazaki"),
    ("鹿児島県", "kagoshima"),
    ("沖縄県", "okinawa"),
];

pub type PrefectureKeyTable = HashMap<&'static str, &'static str>;

static PREFECTURE_KEYS: Lazy<PrefectureKeyTable> =
    Lazy::new(|| PREFECTURES.iter().copied().collect());

pub fn prefecture_keys() -> &'static PrefectureKeyTable {
    &PREFECTURE_KEYS
}

/// Map key for a display name, if the prefecture is known.
pub fn prefecture_key(area: &str) -> Option<&'static str> {
    PREFECTURE_KEYS.get(area).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup() {
        assert_eq!(prefecture_key("滋賀県"), Some("shiga"));
        assert_eq!(prefecture_key("東京都"), Some("tokyo"));
        assert_eq!(prefecture_key("Tokyo"), None);
        assert_eq!(prefecture_key(""), None);
    }

    #[test]
    fn test_all_47_prefectures_with_unique_keys() {
        assert_eq!(prefecture_keys().len(), 47);
        let keys: HashSet<_> = prefecture_keys().values().collect();
        assert_eq!(keys.len(), 47);
        assert!(keys
            .iter()
            .all(|k| k.chars().all(|c| c.is_ascii_lowercase())));
    }
}
