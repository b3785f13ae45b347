pub mod config;
pub mod errors;
pub mod matrix;
pub mod query;
pub mod trie;
pub mod validate;

pub use config::QueryConfig;
pub use errors::{GridError, GridResult};
pub use matrix::WordMatrix;
pub use query::{find, MAX_RESULTS};
pub use trie::WordTrie;
pub use validate::{Violation, MAX_COLUMNS, MAX_ROWS};
