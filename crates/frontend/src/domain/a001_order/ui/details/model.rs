//! API layer for Order details

use crate::shared::api_utils::{api_url, auth_header};
use contracts::domain::a001_order::dto::{
    extract_list, FeedbackDto, OrderDto, SubmissionDto, FEEDBACKS_KEY, SUBMISSIONS_KEY,
};
use gloo_net::http::Request;

async fn get_json(path: &str) -> Result<serde_json::Value, String> {
    let url = api_url(path);
    log::debug!("GET {}", url);

    let mut request = Request::get(&url);
    if let Some(auth) = auth_header() {
        request = request.header("Authorization", &auth);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

pub fn order_path(order_id: &str) -> String {
    format!("/api/orders/{}", order_id)
}

pub fn submissions_path(order_id: &str) -> String {
    format!("/api/orders/{}/submissions", order_id)
}

pub fn feedbacks_path(order_id: &str) -> String {
    format!("/api/orders/{}/feedbacks", order_id)
}

pub async fn fetch_order(order_id: &str) -> Result<OrderDto, String> {
    let value = get_json(&order_path(order_id)).await?;
    serde_json::from_value(value).map_err(|e| format!("Failed to parse order: {}", e))
}

/// Submissions come either wrapped (`{"submissions": [...]}`) or as a bare array
pub async fn fetch_submissions(order_id: &str) -> Result<Vec<SubmissionDto>, String> {
    let value = get_json(&submissions_path(order_id)).await?;
    Ok(extract_list(value, SUBMISSIONS_KEY))
}

pub async fn fetch_feedbacks(order_id: &str) -> Result<Vec<FeedbackDto>, String> {
    let value = get_json(&feedbacks_path(order_id)).await?;
    Ok(extract_list(value, FEEDBACKS_KEY))
}
