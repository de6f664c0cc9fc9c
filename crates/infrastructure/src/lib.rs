//! Ferrous Zonecheck Infrastructure Layer
pub mod sources;
