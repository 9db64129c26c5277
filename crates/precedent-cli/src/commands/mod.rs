//! Command implementations.
//!
//! Each command returns its rendered output; `main` prints it.

pub mod ingest;
pub mod init;
pub mod ping;
pub mod relate;
pub mod search;
pub mod seed;

pub use self::ingest::execute_ingest;
pub use self::init::execute_init;
pub use self::ping::execute_ping;
pub use self::relate::execute_relate;
pub use self::search::execute_search;
pub use self::seed::execute_seed;

use crate::config::Config;
use crate::output::Formatter;
use precedent_store::{GraphStore, SchemaManager};
use std::sync::Arc;

/// State shared by every command.
pub struct Context {
    /// Effective configuration
    pub config: Config,
    /// Shared graph store
    pub store: Arc<dyn GraphStore>,
    /// Output formatter
    pub formatter: Formatter,
}

impl Context {
    /// Schema manager over the shared store.
    pub fn schema(&self) -> SchemaManager<dyn GraphStore> {
        SchemaManager::new(Arc::clone(&self.store))
    }
}
