use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::errors::ReportError;

pub mod user_activity;
pub mod users;

/// Handle on one MongoDB database. Owns the client so `close` can shut it down.
#[derive(Clone)]
pub struct Database {
    client: Client,
    name: String,
}

impl Database {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, ReportError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|source| ReportError::Connection {
                uri: uri.to_string(),
                source,
            })?;
        info!("Connected to MongoDB, using database '{}'", database);
        Ok(Self {
            client,
            name: database.to_string(),
        })
    }

    pub(crate) fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.name).collection(name)
    }

    /// Release the underlying connections.
    pub async fn close(self) {
        debug!("Shutting down MongoDB client");
        self.client.shutdown().await;
    }
}
