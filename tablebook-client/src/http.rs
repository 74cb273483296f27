//! HTTP client for network-based API calls
//!
//! One round-trip per operation: build the URL, wrap the body in the
//! `{data}` envelope, send with JSON headers, then normalize the response
//! through [`ApiResponse::into_result`]. Cancellation resolves with a
//! per-operation fallback instead of an error so a dashboard unmounting
//! mid-request never sees a failure state.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use shared::client::{SeatTable, StatusUpdate};
use shared::models::{Reservation, ReservationCreate, ReservationStatus, Table, TableCreate};

use crate::{ApiResponse, ClientConfig, ClientError, ClientResult, format};

/// HTTP client for making network requests to the reservation backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Perform one round-trip and normalize its outcome.
    ///
    /// Resolves with `fallback` if `cancel` fires (or already fired)
    /// before the request settles; dropping the in-flight future aborts
    /// the connection. A 204 response short-circuits to `Ok(None)`
    /// without touching the body. Anything else is decoded as an
    /// [`ApiResponse`] envelope: a non-empty `error` becomes
    /// [`ClientError::Remote`] regardless of HTTP status, otherwise the
    /// call resolves with the envelope's `data`.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        cancel: &CancellationToken,
        fallback: Option<T>,
    ) -> ClientResult<Option<T>> {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => Ok(fallback),
            outcome = Self::round_trip(request) => outcome,
        }
    }

    async fn round_trip<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<Option<T>> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("request failed: {e}");
                return Err(e.into());
            }
        };

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let envelope = match response.json::<ApiResponse<T>>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!("invalid response body: {e}");
                return Err(e.into());
            }
        };

        envelope.into_result().map_err(ClientError::Remote)
    }

    // ========== Reservations API ==========

    /// List reservations matching the given query parameters.
    ///
    /// Each `(key, value)` pair is appended to the query string in order,
    /// values coerced to text. Dates are normalized before times in the
    /// returned records. Cancellation resolves with an empty list.
    pub async fn list_reservations<K, V>(
        &self,
        params: &[(K, V)],
        cancel: &CancellationToken,
    ) -> ClientResult<Vec<Reservation>>
    where
        K: AsRef<str>,
        V: ToString,
    {
        let query: Vec<(&str, String)> = params
            .iter()
            .map(|(key, value)| (key.as_ref(), value.to_string()))
            .collect();
        let request = self.client.get(self.url("/reservations")).query(&query);
        let reservations = self
            .fetch_json(request, cancel, Some(Vec::new()))
            .await?
            .unwrap_or_default();
        Ok(format::format_reservation_times(
            format::format_reservation_dates(reservations),
        ))
    }

    /// Create a reservation.
    ///
    /// Resolves with the literal `"seated"` whenever nothing went wrong;
    /// the dashboard flow only cares that the POST went through, not
    /// about the echoed record.
    pub async fn create_reservation(
        &self,
        reservation: &ReservationCreate,
        cancel: &CancellationToken,
    ) -> ClientResult<&'static str> {
        let request = self
            .client
            .post(self.url("/reservations"))
            .json(&ApiResponse::data(reservation));
        self.fetch_json::<serde_json::Value>(request, cancel, None)
            .await?;
        Ok("seated")
    }

    /// Fetch a single reservation by id, date/time normalized.
    pub async fn read_reservation(
        &self,
        reservation_id: i64,
        cancel: &CancellationToken,
    ) -> ClientResult<Option<Reservation>> {
        let request = self
            .client
            .get(self.url(&format!("/reservations/{reservation_id}")));
        let reservation = self.fetch_json(request, cancel, None).await?;
        Ok(reservation.map(|r| format::format_time(format::format_date(r))))
    }

    /// Search reservations by (partial) phone number.
    pub async fn search_reservations_by_phone(
        &self,
        mobile_number: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<Vec<Reservation>> {
        self.list_reservations(&[("mobile_number", mobile_number)], cancel)
            .await
    }

    /// Transition a reservation to a new status.
    pub async fn update_reservation_status(
        &self,
        reservation_id: i64,
        status: ReservationStatus,
        cancel: &CancellationToken,
    ) -> ClientResult<Option<Reservation>> {
        let request = self
            .client
            .put(self.url(&format!("/reservations/{reservation_id}/status")))
            .json(&ApiResponse::data(StatusUpdate { status }));
        self.fetch_json(request, cancel, None).await
    }

    /// Cancel a reservation.
    pub async fn cancel_reservation(
        &self,
        reservation_id: i64,
        cancel: &CancellationToken,
    ) -> ClientResult<Option<Reservation>> {
        self.update_reservation_status(reservation_id, ReservationStatus::Cancelled, cancel)
            .await
    }

    /// Replace an existing reservation.
    pub async fn edit_reservation(
        &self,
        reservation_id: i64,
        reservation: &ReservationCreate,
        cancel: &CancellationToken,
    ) -> ClientResult<Option<Reservation>> {
        let request = self
            .client
            .put(self.url(&format!("/reservations/{reservation_id}")))
            .json(&ApiResponse::data(reservation));
        self.fetch_json(request, cancel, None).await
    }

    // ========== Tables API ==========

    /// List all tables. Cancellation resolves with an empty list.
    pub async fn list_tables(&self, cancel: &CancellationToken) -> ClientResult<Vec<Table>> {
        let request = self.client.get(self.url("/tables"));
        Ok(self
            .fetch_json(request, cancel, Some(Vec::new()))
            .await?
            .unwrap_or_default())
    }

    /// Create a table.
    pub async fn create_table(
        &self,
        table: &TableCreate,
        cancel: &CancellationToken,
    ) -> ClientResult<Option<Table>> {
        let request = self
            .client
            .post(self.url("/tables"))
            .json(&ApiResponse::data(table));
        self.fetch_json(request, cancel, None).await
    }

    /// Seat a reservation at a table.
    pub async fn seat_table(
        &self,
        table_id: i64,
        reservation_id: i64,
        cancel: &CancellationToken,
    ) -> ClientResult<Option<Table>> {
        let request = self
            .client
            .put(self.url(&format!("/tables/{table_id}/seat")))
            .json(&ApiResponse::data(SeatTable { reservation_id }));
        self.fetch_json(request, cancel, None).await
    }

    /// Clear a table after its party finishes. No request body.
    pub async fn clear_table(
        &self,
        table_id: i64,
        cancel: &CancellationToken,
    ) -> ClientResult<Option<Table>> {
        let request = self
            .client
            .delete(self.url(&format!("/tables/{table_id}/seat")));
        self.fetch_json(request, cancel, None).await
    }
}
