pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpDataSource;
pub use adapters::memory::InMemoryStore;
pub use config::JlgConfig;
pub use core::importer::{ImportSummary, MunicipalityImporter};
pub use core::parser::{AddressParser, ParsedAddress};
pub use core::resolver::{AddressResolver, Resolution};
pub use core::updater::{MunicipalityUpdater, DEFAULT_SOURCE_URL};
pub use domain::code::MunicipalityCode;
pub use domain::model::MunicipalityRecord;
pub use domain::ports::{CodeDataSource, MunicipalityLookup, MunicipalityStore};
pub use domain::prefecture::Prefecture;
pub use utils::error::{JlgError, Result};
