// tablebook-client/examples/dashboard.rs
// Walk a host's dashboard flow against a live reservation backend.

use tablebook_client::{CancellationToken, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let date = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2025-12-30".to_string());

    let config = ClientConfig::from_env();
    tracing::info!("Using backend at {}", config.base_url);
    let client = config.build_client();
    let cancel = CancellationToken::new();

    let reservations = client
        .list_reservations(&[("date", date.as_str())], &cancel)
        .await?;
    tracing::info!("{} reservation(s) on {date}", reservations.len());
    for reservation in &reservations {
        tracing::info!(
            "  #{} {} {} - party of {} at {} [{}]",
            reservation.reservation_id,
            reservation.first_name,
            reservation.last_name,
            reservation.people,
            reservation.reservation_time,
            reservation.status,
        );
    }

    let tables = client.list_tables(&cancel).await?;
    tracing::info!("{} table(s)", tables.len());
    for table in &tables {
        let state = match table.reservation_id {
            Some(reservation_id) => format!("occupied by reservation {reservation_id}"),
            None => "free".to_string(),
        };
        tracing::info!(
            "  {} (seats {}) - {}",
            table.table_name,
            table.capacity,
            state,
        );
    }

    Ok(())
}
