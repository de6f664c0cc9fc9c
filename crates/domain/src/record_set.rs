mod index;
mod issue;
mod set;

pub use index::RecordSetIndex;
pub use issue::{collect_issues, list_and, RecordSetIssue};
pub use set::RecordSet;
