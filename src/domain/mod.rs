pub mod result;
pub mod target;

pub use result::{ErrorKind, FetchOutcome, FetchResult, ResultSet};
pub use target::TargetSpec;
