use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::{MongoPersistence, NEWSLETTERS},
    app_error::AppResult,
    domain::entities::newsletter_subscriber::NewsletterSubscriber,
    use_cases::newsletter::NewsletterRepo,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsletterDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
}

#[async_trait]
impl NewsletterRepo for MongoPersistence {
    // Uniqueness is enforced by the index, so never insert before it exists.
    async fn insert(&self, email: &str) -> AppResult<NewsletterSubscriber> {
        self.ensure_indexes().await?;

        let doc = NewsletterDoc {
            id: ObjectId::new(),
            email: email.trim().to_string(),
        };
        self.collection::<NewsletterDoc>(NEWSLETTERS)
            .insert_one(&doc)
            .await?;
        Ok(NewsletterSubscriber {
            id: doc.id.to_hex(),
            email: doc.email,
        })
    }
}
