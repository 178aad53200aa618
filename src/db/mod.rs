//! Database layer: pool, migrations and the account store.

#[cfg(test)]
pub(crate) mod memory;
mod pool;
mod repositories;

pub use pool::{create_pool, run_migrations, DbPool};
pub use repositories::*;
