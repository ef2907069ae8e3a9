use serde::Serialize;

///
/// Body of every response sent by the server
///
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn success_has_no_error_field() {
        let envelope = Envelope::success("done", vec![1, 2]);

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "done",
                "data": [1, 2],
            })
        );
    }

    #[test]
    fn failure_without_error() {
        let envelope = Envelope::failure("Ticket not found", None);

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Ticket not found",
            })
        );
    }

    #[test]
    fn failure_with_error() {
        let envelope = Envelope::failure("failed", Some("reason".to_string()));

        let value = serde_json::to_value(&envelope).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.get("error"), Some(&Value::from("reason")));
        assert!(object.get("data").is_none());
    }
}
