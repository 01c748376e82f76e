pub mod importer;
pub mod parser;
pub mod resolver;
pub mod updater;

pub use crate::domain::code::MunicipalityCode;
pub use crate::domain::model::MunicipalityRecord;
pub use crate::domain::ports::{CodeDataSource, MunicipalityLookup, MunicipalityStore};
pub use crate::domain::prefecture::Prefecture;
pub use crate::utils::error::Result;
