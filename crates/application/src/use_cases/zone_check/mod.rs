pub mod check;
pub mod report;

pub use check::CheckZoneRecordsUseCase;
pub use report::ZoneCheckReport;
