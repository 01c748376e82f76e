use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::code::MunicipalityCode;
use crate::domain::model::MunicipalityRecord;
use crate::domain::prefecture::Prefecture;
use crate::utils::error::Result;

/// Read-side capability the resolver depends on.
///
/// `find` must only consider active (non-deprecated) records and match
/// `name` by exact string equality.
pub trait MunicipalityLookup: Send + Sync {
    fn find(&self, prefecture_code: &str, name: &str) -> Result<Option<MunicipalityCode>>;
}

/// Full store surface used by the importer and the CLI.
pub trait MunicipalityStore: MunicipalityLookup {
    /// Inserts or replaces records keyed by code. An upsert reactivates a
    /// previously deprecated code. Returns the number of records written.
    fn upsert(&mut self, records: Vec<MunicipalityRecord>) -> Result<usize>;

    /// Marks every active record whose code is absent from `active_codes`
    /// as deprecated at `at`. Returns the number of records touched.
    fn deprecate_missing(
        &mut self,
        active_codes: &HashSet<String>,
        at: DateTime<Utc>,
    ) -> Result<usize>;

    fn get(&self, code: &MunicipalityCode) -> Result<Option<MunicipalityRecord>>;

    /// Active records for one prefecture, in code order.
    fn list_by_prefecture(&self, prefecture: Prefecture) -> Result<Vec<MunicipalityRecord>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Remote origin of the reference dataset.
#[async_trait::async_trait]
pub trait CodeDataSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}
