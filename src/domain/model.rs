use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::code::MunicipalityCode;
use crate::domain::prefecture::Prefecture;

/// A municipality (市区町村) entry as stored in the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityRecord {
    pub code: MunicipalityCode,
    pub prefecture: Prefecture,
    pub name: String,
    pub name_kana: String,
    /// Set when the municipality ceased to exist (merger or abolition).
    pub deprecated_at: Option<DateTime<Utc>>,
}

impl MunicipalityRecord {
    pub fn new(code: MunicipalityCode, name: &str, name_kana: &str) -> MunicipalityRecord {
        let prefecture = code.prefecture();
        MunicipalityRecord {
            code,
            prefecture,
            name: name.to_string(),
            name_kana: name_kana.to_string(),
            deprecated_at: None,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated_at.is_some()
    }

    /// Prefecture label plus municipality name, e.g. "東京都新宿区".
    pub fn full_name(&self) -> String {
        format!("{}{}", self.prefecture.label(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_prepends_prefecture_label() {
        let record = MunicipalityRecord::new(
            MunicipalityCode::new("131041").unwrap(),
            "新宿区",
            "シンジュクク",
        );
        assert_eq!(record.full_name(), "東京都新宿区");
        assert_eq!(record.prefecture, Prefecture::Tokyo);
        assert!(!record.is_deprecated());
    }
}
