//! TicketHub booking API client
//!
//! Sends a booking to the TicketHub API as a single JSON POST and classifies
//! the result into one of the three terminal submission outcomes.

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::booking::BookingFormValues;

/// Default TicketHub endpoint that receives bookings
pub const DEFAULT_ENDPOINT: &str =
    "https://nscc-0490104-tickethub-eqcvgpbnhtb2c2he.canadacentral-01.azurewebsites.net/api/tickets";

/// Errors that can occur when submitting a booking
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered with a non-2xx status
    #[error("Booking rejected with HTTP status {0}")]
    Rejected(StatusCode),

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Terminal outcome of one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 2xx response received
    Booked,
    /// Non-2xx response received
    Rejected,
    /// No response received
    NetworkError,
}

impl SubmissionOutcome {
    /// Classifies the result of `BookingClient::submit`
    pub fn from_result(result: &Result<StatusCode, SubmitError>) -> Self {
        match result {
            Ok(_) => SubmissionOutcome::Booked,
            Err(SubmitError::Rejected(_)) => SubmissionOutcome::Rejected,
            Err(SubmitError::Transport(_)) => SubmissionOutcome::NetworkError,
        }
    }

    /// Message shown to the user for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Booked => "Ticket booked successfully!",
            SubmissionOutcome::Rejected => "Booking failed",
            SubmissionOutcome::NetworkError => "Network error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Booked)
    }
}

/// Client for posting bookings to the TicketHub API
#[derive(Debug, Clone)]
pub struct BookingClient {
    http_client: Client,
    endpoint: Url,
}

impl BookingClient {
    /// Creates a client that posts to the given endpoint
    pub fn new(endpoint: Url) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
        }
    }

    /// The endpoint bookings are posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits a booking
    ///
    /// Sends exactly one request. The response body is ignored.
    ///
    /// # Returns
    /// * `Ok(StatusCode)` - The server accepted the booking with a 2xx status
    /// * `Err(SubmitError::Rejected)` - The server answered with any other status
    /// * `Err(SubmitError::Transport)` - The request could not complete
    pub async fn submit(&self, values: &BookingFormValues) -> Result<StatusCode, SubmitError> {
        info!(
            endpoint = %self.endpoint,
            concert_id = %values.concert_id,
            quantity = %values.quantity,
            "submitting booking"
        );

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(values)
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "booking request failed"))?;

        let status = response.status();
        if status.is_success() {
            info!(%status, "booking accepted");
            Ok(status)
        } else {
            warn!(%status, "booking rejected");
            let body = response.text().await.ok();
            debug!(body = ?body, "rejection body");
            Err(SubmitError::Rejected(status))
        }
    }
}
