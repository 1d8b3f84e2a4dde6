//! Store traits and backend selection.
//!
//! The auth core and the hotel handlers only ever see these traits. Two
//! backends implement them:
//! - PostgreSQL repositories (`repositories`)
//! - In-memory maps (`memory`), for tests and throwaway development runs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use hotels_core::config::{DatabaseConfig, StoreProvider};
use hotels_core::result::AppResult;
use hotels_core::types::PageResponse;
use hotels_entity::hotel::{Address, CreateHotel, Hotel, HotelQuery};
use hotels_entity::user::{CreateUser, User};

use crate::connection::DatabasePool;
use crate::memory::{MemoryHotelStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{HotelRepository, UserRepository};

/// System of record for user credentials.
///
/// Implementations must make `insert` an atomic insert-if-absent on the
/// username: two concurrent inserts of the same name yield exactly one
/// success and one `Conflict`.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user, failing with `Conflict` if the username is taken.
    async fn insert(&self, data: CreateUser) -> AppResult<User>;
}

/// Hotel catalogue persistence.
#[async_trait]
pub trait HotelStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return one page of hotels matching the query.
    async fn find_page(&self, query: &HotelQuery) -> AppResult<PageResponse<Hotel>>;

    /// Insert a hotel and return it with its assigned id.
    async fn insert(&self, data: CreateHotel) -> AppResult<Hotel>;

    /// Replace a hotel's address. `NotFound` if the id does not exist.
    async fn update_address(&self, id: i64, address: Address) -> AppResult<Hotel>;

    /// Delete a hotel. `NotFound` if the id does not exist.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// The configured store backend, shared across request handlers.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Credential records.
    pub users: Arc<dyn UserStore>,
    /// Hotel records.
    pub hotels: Arc<dyn HotelStore>,
    /// Present only for the PostgreSQL backend.
    pub database: Option<DatabasePool>,
}

impl Stores {
    /// Build the backend selected by `config.provider`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let database = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(database.pool()).await?;
                }
                info!("Using PostgreSQL store");
                Ok(Self {
                    users: Arc::new(UserRepository::new(database.pool().clone())),
                    hotels: Arc::new(HotelRepository::new(database.pool().clone())),
                    database: Some(database),
                })
            }
            StoreProvider::Memory => {
                info!("Using in-memory store");
                Ok(Self::in_memory())
            }
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            hotels: Arc::new(MemoryHotelStore::new()),
            database: None,
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(database) = &self.database {
            database.close().await;
        }
    }
}
