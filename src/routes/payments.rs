use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::AppState;

/// Stubbed payment redirects: no signature, no webhook, no persisted
/// transaction at this layer.
#[derive(Debug, Deserialize)]
pub struct PaymentQuery {
    #[serde(rename = "childId")]
    pub child_id: Option<String>,
    pub amount: Option<String>,
    pub frequency: Option<String>,
}

pub async fn paypal_redirect(
    State(state): State<AppState>,
    Query(query): Query<PaymentQuery>,
) -> Redirect {
    Redirect::to(&provider_url(&state.config.paypal_donate_url, &query))
}

pub async fn stripe_redirect(
    State(state): State<AppState>,
    Query(query): Query<PaymentQuery>,
) -> Redirect {
    Redirect::to(&provider_url(&state.config.stripe_donate_url, &query))
}

fn provider_url(base: &str, query: &PaymentQuery) -> String {
    format!(
        "{}?childId={}&amount={}&frequency={}",
        base,
        query.child_id.as_deref().unwrap_or(""),
        query.amount.as_deref().unwrap_or(""),
        query.frequency.as_deref().unwrap_or("once"),
    )
}
