use axum::{Form, extract::State, response::Response};
use serde::Deserialize;

use super::found;
use crate::{
    adapters::http::{
        app_error_impl::{FormAction, FormError, FormResultExt},
        app_state::AppState,
    },
    application::validators::parse_guests,
    use_cases::reservation::NewReservation,
};

#[derive(Deserialize)]
pub(super) struct ReservationForm {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    date: Option<String>,
    time: Option<String>,
    guests: Option<String>,
    message: Option<String>,
}

impl TryFrom<ReservationForm> for NewReservation {
    type Error = crate::app_error::AppError;

    fn try_from(form: ReservationForm) -> Result<Self, Self::Error> {
        Ok(NewReservation {
            guests: parse_guests(form.guests.as_deref())?,
            name: form.name,
            email: form.email,
            phone: form.phone,
            date: form.date,
            time: form.time,
            message: form.message,
        })
    }
}

/// POST /submit-reservation
pub(super) async fn submit(
    State(app_state): State<AppState>,
    Form(form): Form<ReservationForm>,
) -> Result<Response, FormError> {
    let reservation = NewReservation::try_from(form).during(FormAction::Reservation)?;

    app_state
        .reservation_use_cases
        .submit(reservation)
        .await
        .during(FormAction::Reservation)?;

    Ok(found("/index"))
}
