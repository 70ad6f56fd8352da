//! Test utilities for running the report against a throwaway MongoDB
//!
//! `TestContext` starts a `mongo` container through testcontainers, seeds
//! collections on demand and hands out a connected [`Database`].

use mongodb::bson::Document;
use mongodb::Client;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

use crate::config::ReportConfig;
use crate::db::Database;
use crate::report::Report;

/// Render a report into a string for assertions.
pub fn render_report(report: &Report) -> String {
    let mut buf = Vec::new();
    report.render(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

pub struct TestContext {
    pub config: ReportConfig,
    client: Client,
    _container: ContainerAsync<Mongo>,
}

impl TestContext {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = Mongo::default()
            .start()
            .await
            .map_err(|e| format!("Failed to start mongo container: {}", e))?;
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .map_err(|e| format!("Failed to get mongo port: {}", e))?;

        let config = ReportConfig {
            mongodb_uri: format!("mongodb://127.0.0.1:{}/", port),
            database: "phimkhoi_test".to_string(),
            ..ReportConfig::default()
        };
        let client = Client::with_uri_str(&config.mongodb_uri).await?;

        Ok(Self {
            config,
            client,
            _container: container,
        })
    }

    /// Insert raw documents into a collection of the test database.
    pub async fn seed(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if documents.is_empty() {
            return Ok(());
        }
        self.client
            .database(&self.config.database)
            .collection::<Document>(collection)
            .insert_many(documents)
            .await?;
        Ok(())
    }

    pub async fn database(&self) -> Result<Database, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Database::connect(&self.config.mongodb_uri, &self.config.database).await?)
    }
}
