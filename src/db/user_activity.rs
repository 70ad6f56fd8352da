use mongodb::bson::{doc, Bson, Document};
use tracing::debug;

use super::Database;
use crate::errors::ReportError;
use crate::models::UserCount;

const USER_ID_FIELD: &str = "userId";

fn user_filter(user_id: &Bson) -> Document {
    let mut filter = Document::new();
    filter.insert(USER_ID_FIELD, user_id.clone());
    filter
}

impl Database {
    /// Distinct `userId` values in `collection`, in the order the server returns them.
    pub async fn distinct_user_ids(
        &self,
        collection: &str,
    ) -> Result<Vec<Bson>, ReportError> {
        self.collection::<Document>(collection)
            .distinct(USER_ID_FIELD, doc! {})
            .await
            .map_err(|e| ReportError::query(collection, e))
    }

    pub async fn count_for_user(
        &self,
        collection: &str,
        user_id: &Bson,
    ) -> Result<u64, ReportError> {
        self.collection::<Document>(collection)
            .count_documents(user_filter(user_id))
            .await
            .map_err(|e| ReportError::query(collection, e))
    }

    /// One entry per distinct `userId` with its document count.
    pub async fn user_counts(&self, collection: &str) -> Result<Vec<UserCount>, ReportError> {
        let user_ids = self.distinct_user_ids(collection).await?;
        debug!("{} distinct userIds in '{}'", user_ids.len(), collection);

        let mut counts = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            let count = self.count_for_user(collection, &user_id).await?;
            counts.push(UserCount { user_id, count });
        }
        Ok(counts)
    }
}
