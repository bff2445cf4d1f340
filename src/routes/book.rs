use axum::{response::IntoResponse, Form, Json};

use serde::Deserialize;

use crate::ticket::Ticket;

use super::errors::make_missing_field;

#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
    your_name: Option<String>,
    event_name: Option<String>,
}

#[tracing::instrument]
pub async fn book(form: Option<Form<BookingForm>>) -> impl IntoResponse {
    // A body that can't be read as a form counts the same as missing fields
    let BookingForm {
        your_name,
        event_name,
    } = form.map(|Form(form)| form).unwrap_or_default();

    let (name, event) = match (present(your_name), present(event_name)) {
        (Some(name), Some(event)) => (name, event),
        _ => return make_missing_field(),
    };

    let ticket = Ticket::new(name, event);
    tracing::debug!("booked ticket {} for {}", ticket.id, ticket.event);

    Json(ticket).into_response()
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
