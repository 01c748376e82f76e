use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::code::MunicipalityCode;
use crate::domain::model::MunicipalityRecord;
use crate::domain::ports::{MunicipalityLookup, MunicipalityStore};
use crate::domain::prefecture::Prefecture;
use crate::utils::error::Result;

/// In-memory municipality store, keyed by code so iteration is already
/// in code order. Backs the CLI and tests; anything persistent plugs in
/// behind the same traits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: BTreeMap<String, MunicipalityRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MunicipalityLookup for InMemoryStore {
    fn find(&self, prefecture_code: &str, name: &str) -> Result<Option<MunicipalityCode>> {
        Ok(self
            .records
            .values()
            .find(|r| {
                !r.is_deprecated() && r.prefecture.code() == prefecture_code && r.name == name
            })
            .map(|r| r.code.clone()))
    }
}

impl MunicipalityStore for InMemoryStore {
    fn upsert(&mut self, records: Vec<MunicipalityRecord>) -> Result<usize> {
        let count = records.len();
        for record in records {
            self.records.insert(record.code.as_str().to_string(), record);
        }
        Ok(count)
    }

    fn deprecate_missing(
        &mut self,
        active_codes: &HashSet<String>,
        at: DateTime<Utc>,
    ) -> Result<usize> {
        let mut touched = 0;
        for record in self.records.values_mut() {
            if record.deprecated_at.is_none() && !active_codes.contains(record.code.as_str()) {
                record.deprecated_at = Some(at);
                touched += 1;
            }
        }
        Ok(touched)
    }

    fn get(&self, code: &MunicipalityCode) -> Result<Option<MunicipalityRecord>> {
        Ok(self.records.get(code.as_str()).cloned())
    }

    fn list_by_prefecture(&self, prefecture: Prefecture) -> Result<Vec<MunicipalityRecord>> {
        Ok(self
            .records
            .values()
            .filter(|r| !r.is_deprecated() && r.prefecture == prefecture)
            .cloned()
            .collect())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
