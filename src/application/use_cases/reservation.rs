use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::AppResult;
use crate::domain::entities::reservation::Reservation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReservation {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<i32>,
    pub message: Option<String>,
}

#[async_trait]
pub trait ReservationRepo: Send + Sync {
    async fn insert(&self, reservation: NewReservation) -> AppResult<Reservation>;
}

#[derive(Clone)]
pub struct ReservationUseCases {
    repo: Arc<dyn ReservationRepo>,
}

impl ReservationUseCases {
    pub fn new(repo: Arc<dyn ReservationRepo>) -> Self {
        Self { repo }
    }

    /// Stores the booking as-is. Overlapping bookings are not detected.
    #[instrument(skip_all, fields(date = ?reservation.date, time = ?reservation.time))]
    pub async fn submit(&self, reservation: NewReservation) -> AppResult<Reservation> {
        let saved = self.repo.insert(reservation).await?;
        tracing::info!(
            reservation_id = %saved.id,
            guests = ?saved.guests,
            "Reservation saved"
        );
        Ok(saved)
    }
}
