use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::{MongoPersistence, RESERVATIONS},
    app_error::AppResult,
    domain::entities::reservation::Reservation,
    use_cases::reservation::{NewReservation, ReservationRepo},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ReservationDoc> for Reservation {
    fn from(doc: ReservationDoc) -> Self {
        Reservation {
            id: doc.id.to_hex(),
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            date: doc.date,
            time: doc.time,
            guests: doc.guests,
            message: doc.message,
        }
    }
}

#[async_trait]
impl ReservationRepo for MongoPersistence {
    async fn insert(&self, reservation: NewReservation) -> AppResult<Reservation> {
        let doc = ReservationDoc {
            id: ObjectId::new(),
            name: reservation.name,
            email: reservation.email,
            phone: reservation.phone,
            date: reservation.date,
            time: reservation.time,
            guests: reservation.guests,
            message: reservation.message,
        };
        self.collection::<ReservationDoc>(RESERVATIONS)
            .insert_one(&doc)
            .await?;
        Ok(doc.into())
    }
}
