//! Parameter model and query serialization
//!
//! [`ParameterStore`] accumulates command values for one build session and
//! [`query`] turns it into the query string appended to an image path.

pub mod query;
pub mod store;

pub use query::{append_to_path, encode_value, QueryPairs};
pub use store::ParameterStore;
