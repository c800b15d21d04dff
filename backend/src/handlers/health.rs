//! Health endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Liveness report including a round-trip check of the warehouse store
#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub database: &'static str,
}

/// Report service health; the store check distinguishes a live API from a
/// usable one, since every operation here is backed by the database
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => "reachable",
        Err(_) => "unreachable",
    };

    Json(HealthResponse {
        service: "warehouse-management",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        database,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_names_this_service() {
        let response = HealthResponse {
            service: "warehouse-management",
            version: env!("CARGO_PKG_VERSION"),
            environment: "development".to_string(),
            database: "reachable",
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(json["service"], "warehouse-management");
        assert_eq!(json["database"], "reachable");
        assert_eq!(json["environment"], "development");
    }
}
