use axum::Json;
use axum::extract::State;
use crate::AppState;
use crate::logger;
use crate::models::Record;

pub async fn list_records(State(state): State<AppState>) -> Json<[Record; 2]> {

    let total_served = state.metrics.record_request();

    logger::log_request("GET", "/test", total_served);

    Json(state.records.clone())

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::metrics::Metrics;
    use crate::models::seed_records;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_records_returns_seeded_records() {

        let state = AppState {
            records: seed_records(),
            metrics: Arc::new(Metrics::new()),
        };

        let Json(records) = list_records(State(state)).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].val, "abc");
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].val, "cde");

    }

    #[tokio::test]
    async fn test_list_records_counts_every_request() {

        let state = AppState {
            records: seed_records(),
            metrics: Arc::new(Metrics::new()),
        };

        list_records(State(state.clone())).await;
        list_records(State(state.clone())).await;

        assert_eq!(state.metrics.record_request(), 3);

    }

}
