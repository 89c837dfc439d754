pub mod cs;
pub mod error;

pub use cs::{counting, sort, string};
pub use error::{Error, Result};
