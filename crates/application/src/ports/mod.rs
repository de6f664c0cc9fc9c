mod zone_record_source;

pub use zone_record_source::ZoneRecordSource;
