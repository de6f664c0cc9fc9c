mod record;
mod record_type;
mod ttl;

pub use record::{trim_trailing_dot, ZoneRecord};
pub use record_type::RecordType;
pub use ttl::Ttl;
