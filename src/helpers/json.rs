use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Builds the `{"success": true, ...}` envelope every successful response uses.
///
/// ```ignore
/// JsonResponse::build().set_item("album", album).created()
/// ```
#[derive(Debug)]
pub struct JsonResponse {
    body: Map<String, Value>,
}

impl JsonResponse {
    pub fn build() -> Self {
        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(true));
        Self { body }
    }

    pub fn set_item<T: Serialize>(mut self, key: &str, item: T) -> Self {
        self.body.insert(key.to_string(), json!(item));
        self
    }

    pub fn ok(self) -> HttpResponse {
        self.respond(StatusCode::OK)
    }

    pub fn created(self) -> HttpResponse {
        self.respond(StatusCode::CREATED)
    }

    fn respond(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(Value::Object(self.body))
    }

    /// The `{"success": false, "error": <status>, "message": ...}` envelope.
    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }))
    }
}
