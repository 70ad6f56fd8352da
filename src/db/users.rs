use futures::TryStreamExt;
use mongodb::bson::doc;

use super::Database;
use crate::errors::ReportError;
use crate::models::UserSummary;

impl Database {
    pub async fn list_users(&self, collection: &str) -> Result<Vec<UserSummary>, ReportError> {
        let cursor = self
            .collection::<UserSummary>(collection)
            .find(doc! {})
            .projection(doc! { "_id": 1, "name": 1, "email": 1, "role": 1 })
            .await
            .map_err(|e| ReportError::query(collection, e))?;

        cursor
            .try_collect::<Vec<UserSummary>>()
            .await
            .map_err(|e| ReportError::query(collection, e))
    }
}
