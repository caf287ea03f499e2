use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Record id: the backend sends it either as a number or as a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Int(v) => write!(f, "{}", v),
            RecordKey::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        RecordKey::Int(value)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        RecordKey::Text(value.to_string())
    }
}

/// Order as returned by `GET /api/orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: RecordKey,

    // Descriptive fields
    #[serde(default)]
    pub writer_username: Option<String>,
    #[serde(default)]
    pub order_pages_name: Option<String>,
    #[serde(default)]
    pub order_urgency_name: Option<String>,
    #[serde(default)]
    pub order_style_name: Option<String>,
    #[serde(default)]
    pub order_language_name: Option<String>,

    // Flags
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plagiarism: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quality_check: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub draft: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sms: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_writer: bool,

    #[serde(default)]
    pub price: Option<f64>,
}

impl OrderDto {
    /// Order with the given id and no attributes
    pub fn new(id: impl Into<RecordKey>) -> Self {
        Self {
            id: id.into(),
            writer_username: None,
            order_pages_name: None,
            order_urgency_name: None,
            order_style_name: None,
            order_language_name: None,
            priority: false,
            plagiarism: false,
            summary: false,
            quality_check: false,
            draft: false,
            sms: false,
            sources: false,
            top_writer: false,
            price: None,
        }
    }
}

/// Deliverable uploaded by the writer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDto {
    #[serde(default)]
    pub id: Option<RecordKey>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub submission_file: Option<String>,
    #[serde(default)]
    pub submission_date: Option<String>,
}

impl SubmissionDto {
    /// File link, if present and not blank
    pub fn file_url(&self) -> Option<&str> {
        non_blank(self.submission_file.as_deref())
    }
}

/// Client feedback on the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDto {
    pub id: RecordKey,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: String,
    #[serde(default)]
    pub feedback_file: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FeedbackDto {
    /// File link, if present and not blank
    pub fn file_url(&self) -> Option<&str> {
        non_blank(self.feedback_file.as_deref())
    }
}

/// `null` is read the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Wrapper key of the `/submissions` response
pub const SUBMISSIONS_KEY: &str = "submissions";
/// Wrapper key of the `/feedbacks` response
pub const FEEDBACKS_KEY: &str = "feedbacks";

/// Pulls a list out of an API response.
///
/// Accepts a bare array or an object holding the array under `key`.
/// Any other shape (null, a number, an object without the key, broken
/// elements) gives an empty list.
pub fn extract_list<T: DeserializeOwned>(value: serde_json::Value, key: &str) -> Vec<T> {
    let inner = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => match map.remove(key) {
            Some(v @ serde_json::Value::Array(_)) => v,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    serde_json::from_value(inner).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_keeps_every_item() {
        let value = json!([
            { "description": "draft", "submission_file": null, "submission_date": "2024-03-15T14:02:26Z" },
            { "description": "final", "submission_file": "https://files.example.com/final.docx" },
            { "description": "sources" }
        ]);
        let items: Vec<SubmissionDto> = extract_list(value, SUBMISSIONS_KEY);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].description, "final");
    }

    #[test]
    fn test_wrapped_list_is_unwrapped() {
        let value = json!({
            "submissions": [
                { "description": "chapter 1", "submission_file": "https://files.example.com/ch1.pdf" }
            ]
        });
        let items: Vec<SubmissionDto> = extract_list(value, SUBMISSIONS_KEY);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].file_url(),
            Some("https://files.example.com/ch1.pdf")
        );
    }

    #[test]
    fn test_feedbacks_wrapped_and_keyed() {
        let value = json!({
            "feedbacks": [
                { "id": 7, "feedback": "Great work", "created_at": "2024-03-16T09:00:00Z" },
                { "id": "b2", "feedback": "Please fix refs", "feedback_file": "https://files.example.com/notes.pdf" }
            ]
        });
        let items: Vec<FeedbackDto> = extract_list(value, FEEDBACKS_KEY);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, RecordKey::Int(7));
        assert_eq!(items[1].id.to_string(), "b2");
        assert_eq!(items[0].file_url(), None);
    }

    #[test]
    fn test_unexpected_shapes_give_empty_list() {
        let shapes = [
            json!(null),
            json!({}),
            json!({ "submissions": null }),
            json!({ "submissions": false }),
            json!({ "other": [] }),
            json!(42),
            json!("submissions"),
            json!([1, 2, 3]),
        ];
        for shape in shapes {
            let items: Vec<SubmissionDto> = extract_list(shape.clone(), SUBMISSIONS_KEY);
            assert!(items.is_empty(), "expected empty list for {}", shape);
        }
    }

    #[test]
    fn test_null_text_keeps_the_list() {
        let value = json!({
            "submissions": [
                { "description": "ok", "submission_file": null, "submission_date": null },
                { "description": null }
            ]
        });
        let items: Vec<SubmissionDto> = extract_list(value, SUBMISSIONS_KEY);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].description, "");

        let value = json!({
            "feedbacks": [
                { "id": 1, "feedback": "ok" },
                { "id": 2, "feedback": null, "feedback_file": null, "created_at": null }
            ]
        });
        let items: Vec<FeedbackDto> = extract_list(value, FEEDBACKS_KEY);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].feedback, "");
    }

    #[test]
    fn test_null_flags_read_as_false() {
        let order: OrderDto = serde_json::from_value(json!({
            "id": 1,
            "writer_username": null,
            "priority": null,
            "plagiarism": null,
            "summary": null,
            "quality_check": null,
            "draft": null,
            "sms": null,
            "sources": null,
            "top_writer": true,
            "price": null
        }))
        .unwrap();
        assert!(!order.sms && !order.priority);
        assert!(order.top_writer);
        assert_eq!(order.price, None);
    }

    #[test]
    fn test_blank_file_is_treated_as_missing() {
        let submission = SubmissionDto {
            id: None,
            description: "x".into(),
            submission_file: Some("   ".into()),
            submission_date: None,
        };
        assert_eq!(submission.file_url(), None);
    }

    #[test]
    fn test_order_with_only_id() {
        let order: OrderDto = serde_json::from_value(json!({ "id": 15 })).unwrap();
        assert_eq!(order, OrderDto::new(15_i64));
        assert_eq!(order.price, None);
        assert!(!order.top_writer);
    }

    #[test]
    fn test_order_full_payload() {
        let order: OrderDto = serde_json::from_value(json!({
            "id": 3,
            "writer_username": "jdoe",
            "order_pages_name": "5 pages",
            "order_urgency_name": "24 hours",
            "order_style_name": "APA",
            "order_language_name": "English (US)",
            "priority": true,
            "plagiarism": true,
            "summary": false,
            "quality_check": true,
            "draft": false,
            "sms": false,
            "sources": true,
            "top_writer": true,
            "price": 49.5
        }))
        .unwrap();
        assert_eq!(order.writer_username.as_deref(), Some("jdoe"));
        assert_eq!(order.price, Some(49.5));
        assert!(order.priority && order.sources && !order.sms);
    }
}
