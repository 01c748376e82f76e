use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::ports::CodeDataSource;
use crate::utils::error::{JlgError, Result};

/// Default origin of the reference dataset.
///
/// <https://github.com/nojimage/local-gov-code-jp>
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/nojimage/local-gov-code-jp/master/index.json";

/// One entry of the upstream index.json. Prefecture-level entries and
/// other types are present in the feed but not imported.
#[derive(Debug, Deserialize)]
struct SourceEntry {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    code: String,
    #[serde(default)]
    pref_code: Option<String>,
    #[serde(default)]
    city_name: Option<String>,
    #[serde(default)]
    city_kana: Option<String>,
    #[serde(default)]
    ward_name: Option<String>,
    #[serde(default)]
    ward_kana: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CsvRow {
    code: String,
    prefecture_code: String,
    name: String,
    name_kana: String,
}

/// Refreshes the local municipalities CSV from a remote data source.
pub struct MunicipalityUpdater;

impl MunicipalityUpdater {
    /// Fetches the upstream index, converts it to the 4-column CSV and
    /// writes it to `output_path`. Returns the number of data rows.
    pub async fn update<D: CodeDataSource>(source: &D, output_path: &Path) -> Result<usize> {
        let body = source.fetch().await?;

        let entries: Vec<SourceEntry> = serde_json::from_str(&body)?;
        let rows = Self::build_rows(entries);

        if let Some(dir) = output_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut writer = csv::Writer::from_path(output_path)?;
        writer.write_record(["code", "prefecture_code", "name", "name_kana"])?;
        for row in &rows {
            writer.write_record([&row.code, &row.prefecture_code, &row.name, &row.name_kana])?;
        }
        writer.flush().map_err(JlgError::Io)?;

        Ok(rows.len())
    }

    /// Keeps `city` and `ward` entries, normalizes kana to katakana and
    /// sorts by code.
    fn build_rows(entries: Vec<SourceEntry>) -> Vec<CsvRow> {
        let mut rows: Vec<CsvRow> = entries
            .into_iter()
            .filter_map(|entry| {
                let (name, kana) = match entry.kind.as_str() {
                    "city" => (entry.city_name, entry.city_kana),
                    "ward" => (entry.ward_name, entry.ward_kana),
                    _ => return None,
                };

                let name = name.unwrap_or_default();
                if entry.code.is_empty() || name.is_empty() {
                    return None;
                }

                let prefecture_code = entry
                    .pref_code
                    .unwrap_or_else(|| entry.code.clone())
                    .chars()
                    .take(2)
                    .collect();

                Some(CsvRow {
                    code: entry.code,
                    prefecture_code,
                    name,
                    name_kana: hiragana_to_katakana(&kana.unwrap_or_default()),
                })
            })
            .collect();

        rows.sort_by(|a, b| a.code.cmp(&b.code));
        rows
    }
}

/// Maps hiragana (U+3041..U+3096) onto the katakana block; everything
/// else passes through.
fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if (0x3041..=0x3096).contains(&cp) {
                char::from_u32(cp + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("しんじゅくく"), "シンジュクク");
        assert_eq!(hiragana_to_katakana("よっかいちし"), "ヨッカイチシ");
        // Katakana and other characters pass through untouched.
        assert_eq!(hiragana_to_katakana("シブヤク123"), "シブヤク123");
        assert_eq!(hiragana_to_katakana(""), "");
    }

    #[test]
    fn build_rows_filters_sorts_and_normalizes() {
        let entries: Vec<SourceEntry> = serde_json::from_str(
            r#"[
                {"type": "prefecture", "code": "130001", "pref_code": "13"},
                {"type": "ward", "code": "131041", "pref_code": "13",
                 "ward_name": "新宿区", "ward_kana": "しんじゅくく"},
                {"type": "city", "code": "011002", "pref_code": "01",
                 "city_name": "札幌市", "city_kana": "さっぽろし"},
                {"type": "city", "code": "", "city_name": "欠番市"},
                {"type": "city", "code": "999999"}
            ]"#,
        )
        .unwrap();

        let rows = MunicipalityUpdater::build_rows(entries);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "011002");
        assert_eq!(rows[0].name, "札幌市");
        assert_eq!(rows[0].name_kana, "サッポロシ");
        assert_eq!(rows[1].code, "131041");
        assert_eq!(rows[1].prefecture_code, "13");
        assert_eq!(rows[1].name_kana, "シンジュクク");
    }

    #[test]
    fn pref_code_falls_back_to_code_prefix() {
        let entries: Vec<SourceEntry> = serde_json::from_str(
            r#"[{"type": "city", "code": "242012", "city_name": "四日市市",
                 "city_kana": "よっかいちし"}]"#,
        )
        .unwrap();

        let rows = MunicipalityUpdater::build_rows(entries);
        assert_eq!(rows[0].prefecture_code, "24");
    }
}
