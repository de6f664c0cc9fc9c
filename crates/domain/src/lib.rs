//! Ferrous Zonecheck Domain Layer
pub mod config;
pub mod errors;
pub mod record_set;
pub mod zone_record;

pub use config::{CliOverrides, Config, ConfigError, ReportFormat};
pub use errors::DomainError;
pub use record_set::{collect_issues, RecordSet, RecordSetIndex, RecordSetIssue};
pub use zone_record::{RecordType, Ttl, ZoneRecord};
