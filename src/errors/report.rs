use thiserror::Error;

use super::{AppError, ErrorCategory};

/// Errors raised while reading the report collections
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to connect to MongoDB at '{uri}': {source}")]
    Connection {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Query on collection '{collection}' failed: {source}")]
    Query {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
}

impl ReportError {
    pub(crate) fn query(collection: &str, source: mongodb::error::Error) -> Self {
        ReportError::Query {
            collection: collection.to_string(),
            source,
        }
    }
}

impl AppError for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            ReportError::Connection { .. } => "REPORT_CONNECTION_FAILED",
            ReportError::Query { .. } => "REPORT_QUERY_FAILED",
        }
    }

    fn error_category(&self) -> ErrorCategory {
        ErrorCategory::Database
    }

    fn suggested_action(&self) -> Option<String> {
        match self {
            ReportError::Connection { .. } => {
                Some("Check that mongod is running and MONGODB_URI is correct".to_string())
            }
            ReportError::Query { .. } => None,
        }
    }
}
