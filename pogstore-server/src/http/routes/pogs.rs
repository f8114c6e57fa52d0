//! Pog endpoints
//!
//! Wire contract notes: success bodies are JSON arrays of pog records
//! (even for single-row operations), failures are fixed text, and
//! create answers 200 rather than 201. All of it is kept for
//! compatibility with existing callers.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{NewPog, Pog, PogRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create/update request body. All four fields are required; a body
/// that fails to deserialize is rejected with 422 before any SQL runs.
#[derive(Debug, Deserialize)]
pub struct PogInput {
    pub pogs_name: String,
    pub ticker_symbol: String,
    pub price: f64,
    pub color: String,
}

impl From<PogInput> for NewPog {
    fn from(input: PogInput) -> Self {
        Self {
            pogs_name: input.pogs_name,
            ticker_symbol: input.ticker_symbol,
            price: input.price,
            color: input.color,
        }
    }
}

/// Pog response record
#[derive(Debug, Serialize)]
pub struct PogResponse {
    pub pogs_id: i32,
    pub pogs_name: String,
    pub ticker_symbol: String,
    pub price: f64,
    pub color: String,
}

impl From<Pog> for PogResponse {
    fn from(p: Pog) -> Self {
        Self {
            pogs_id: p.pogs_id,
            pogs_name: p.pogs_name,
            ticker_symbol: p.ticker_symbol,
            price: p.price,
            color: p.color,
        }
    }
}

/// GET /pogs - list all pogs
async fn list_pogs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PogResponse>>, ApiError> {
    let pogs = PogRepo::new(&state.pool).list().await?;

    if pogs.is_empty() {
        return Err(ApiError::NotFound("pogs not found"));
    }

    Ok(Json(pogs.into_iter().map(PogResponse::from).collect()))
}

/// GET /pogs/{id} - get a single pog
async fn get_pog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<PogResponse>>, ApiError> {
    let pog = PogRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or(ApiError::NotFound("pogs not found"))?;

    Ok(Json(vec![PogResponse::from(pog)]))
}

/// POST /pogs - create a new pog
async fn create_pog(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PogInput>, JsonRejection>,
) -> Result<Json<Vec<PogResponse>>, ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::Unprocessable("POST failed"))?;

    // Uniqueness rides on the table constraints: a colliding insert
    // comes back as DbError::Duplicate and surfaces as 409.
    let pog = PogRepo::new(&state.pool).create(&input.into()).await?;

    Ok(Json(vec![PogResponse::from(pog)]))
}

/// PUT /pogs/{id} - replace all four fields of a pog
async fn update_pog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    payload: Result<Json<PogInput>, JsonRejection>,
) -> Result<Json<Vec<PogResponse>>, ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::Unprocessable("PUT failed"))?;

    let pog = PogRepo::new(&state.pool)
        .update(id, &input.into())
        .await?
        .ok_or(ApiError::NotFound("pogs not found"))?;

    Ok(Json(vec![PogResponse::from(pog)]))
}

/// DELETE /pogs/{id} - delete a pog
async fn delete_pog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<&'static str, ApiError> {
    PogRepo::new(&state.pool)
        .delete(id)
        .await?
        .ok_or(ApiError::NotFound("DELETE failed"))?;

    Ok("Deleted")
}

/// Pog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pogs", get(list_pogs).post(create_pog))
        .route(
            "/pogs/{id}",
            get(get_pog).put(update_pog).delete(delete_pog),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_requires_all_fields() {
        let missing_name = serde_json::json!({
            "ticker_symbol": "NP",
            "price": 10,
            "color": "red"
        });
        assert!(serde_json::from_value::<PogInput>(missing_name).is_err());

        let complete = serde_json::json!({
            "pogs_name": "New Pog",
            "ticker_symbol": "NP",
            "price": 10,
            "color": "red"
        });
        let input = serde_json::from_value::<PogInput>(complete).expect("valid input rejected");
        assert_eq!(input.pogs_name, "New Pog");
        assert_eq!(input.price, 10.0);
    }

    #[test]
    fn response_serializes_all_columns() {
        let response = PogResponse::from(Pog {
            pogs_id: 1,
            pogs_name: "New Pog".into(),
            ticker_symbol: "NP".into(),
            price: 10.0,
            color: "red".into(),
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["pogs_id"], 1);
        assert_eq!(value["pogs_name"], "New Pog");
        assert_eq!(value["ticker_symbol"], "NP");
        assert_eq!(value["price"], 10.0);
        assert_eq!(value["color"], "red");
    }
}
