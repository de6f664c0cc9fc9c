use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Resource record types the zone editor can list and edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    AFSDB,
    CAA,
    CNAME,
    DNAME,
    DS,
    HINFO,
    LOC,
    MX,
    NAPTR,
    NS,
    PTR,
    RP,
    SOA,
    SRV,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::AFSDB => "AFSDB",
            RecordType::CAA => "CAA",
            RecordType::CNAME => "CNAME",
            RecordType::DNAME => "DNAME",
            RecordType::DS => "DS",
            RecordType::HINFO => "HINFO",
            RecordType::LOC => "LOC",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::RP => "RP",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
        }
    }

    /// Exact, case-sensitive match on the tag the zone API sends.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == tag)
    }

    /// Types that may appear at most once per owner name.
    ///
    /// DNAME and SOA are singletons in the DNS sense too, but DNAME is not
    /// editable here and the editor never creates a second SOA.
    pub fn is_singleton(&self) -> bool {
        matches!(self, RecordType::CNAME)
    }

    pub fn all() -> &'static [RecordType] {
        use RecordType::*;
        &[
            A, AAAA, AFSDB, CAA, CNAME, DNAME, DS, HINFO, LOC, MX, NAPTR, NS, PTR, RP, SOA, SRV,
            TXT,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))
    }
}
