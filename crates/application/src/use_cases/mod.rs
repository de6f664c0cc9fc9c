pub mod zone_check;

pub use zone_check::{CheckZoneRecordsUseCase, ZoneCheckReport};
