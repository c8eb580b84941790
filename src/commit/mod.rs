//! Raw commit line splitting and conventional subject parsing.

pub mod line;
pub mod subject;

pub use line::CommitLine;
pub use subject::{ParsedSubject, Subject, parse_conventional, parse_subject, release_version};
