mod source;
mod source_error;

pub use source::{load_campaigns, DataSource};
pub use source_error::DataError;
