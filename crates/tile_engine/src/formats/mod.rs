//! Persisted level encoding

mod level_format;
pub use level_format::*;
