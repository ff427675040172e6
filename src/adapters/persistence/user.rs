use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::{MongoPersistence, USERS},
    app_error::AppResult,
    domain::entities::user::User,
    use_cases::user::{NewUser, UserRepo},
};

// User document as stored in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<UserDoc> for User {
    fn from(doc: UserDoc) -> Self {
        User {
            id: doc.id.to_hex(),
            name: doc.name,
            email: doc.email,
            password: doc.password,
        }
    }
}

#[async_trait]
impl UserRepo for MongoPersistence {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let doc = UserDoc {
            id: ObjectId::new(),
            name: user.name,
            email: user.email,
            password: user.password,
        };
        self.collection::<UserDoc>(USERS).insert_one(&doc).await?;
        Ok(doc.into())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let found = self
            .collection::<UserDoc>(USERS)
            .find_one(doc! { "email": email })
            .await?;
        Ok(found.map(User::from))
    }
}
