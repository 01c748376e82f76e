use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;

use crate::domain::code::MunicipalityCode;
use crate::domain::model::MunicipalityRecord;
use crate::domain::ports::MunicipalityStore;
use crate::utils::error::Result;

/// Outcome of one CSV import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub deprecated: usize,
}

/// Loads municipality reference data from a 4-column CSV
/// (`code,prefecture_code,name,name_kana`, with header) into a store.
pub struct MunicipalityImporter;

impl MunicipalityImporter {
    /// Imports `csv_path` into `store`.
    ///
    /// With `mark_deprecated`, codes absent from the CSV are stamped as
    /// deprecated afterwards. Only use that with a full dataset; a
    /// partial CSV would deprecate everything it does not mention.
    pub fn import<S: MunicipalityStore>(
        store: &mut S,
        csv_path: &Path,
        mark_deprecated: bool,
    ) -> Result<ImportSummary> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(csv_path)?;

        let mut records = Vec::new();
        let mut skipped = 0;

        for row in reader.records() {
            let row = row?;
            if row.len() < 4 {
                skipped += 1;
                continue;
            }

            let code = match MunicipalityCode::new(&row[0]) {
                Ok(code) => code,
                Err(e) => {
                    tracing::warn!("Skipping CSV row with invalid code {:?}: {}", &row[0], e);
                    skipped += 1;
                    continue;
                }
            };

            records.push(MunicipalityRecord::new(code, &row[2], &row[3]));
        }

        let active_codes: HashSet<String> = records
            .iter()
            .map(|r| r.code.as_str().to_string())
            .collect();

        let imported = store.upsert(records)?;

        let deprecated = if mark_deprecated && !active_codes.is_empty() {
            store.deprecate_missing(&active_codes, Utc::now())?
        } else {
            0
        };

        Ok(ImportSummary {
            imported,
            skipped,
            deprecated,
        })
    }
}
