use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fields the handler reads from the request body.
/// Both are optional here; presence is checked by the handler so that a
/// missing field is a validation error rather than a parse error.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CreateCommentRequest {
    pub tenant_id: Option<String>,
    pub comentario: Option<String>,
}

/// Reads the two fields out of a parsed JSON object.
/// Non-string values (numbers, objects, null) are treated as absent.
impl From<Map<String, Value>> for CreateCommentRequest {
    fn from(mut object: Map<String, Value>) -> Self {
        let mut take = |field: &str| match object.remove(field) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        CreateCommentRequest {
            tenant_id: take("tenant_id"),
            comentario: take("comentario"),
        }
    }
}

/// Body of the 201 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCreatedResponse {
    pub message: String,
    pub uuid: String,
    pub s3_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(object) => object,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn it_reads_both_fields() {
        let req = CreateCommentRequest::from(object(
            json!({"tenant_id": "t1", "comentario": "hola", "extra": 1}),
        ));
        assert_eq!(req.tenant_id.as_deref(), Some("t1"));
        assert_eq!(req.comentario.as_deref(), Some("hola"));
    }

    #[test]
    fn missing_and_non_string_fields_are_none() {
        let req =
            CreateCommentRequest::from(object(json!({"tenant_id": 7, "comentario": null})));
        assert_eq!(req, CreateCommentRequest::default());

        let req = CreateCommentRequest::from(object(json!({"comentario": {"text": "hola"}})));
        assert_eq!(req, CreateCommentRequest::default());

        let req = CreateCommentRequest::from(Map::new());
        assert_eq!(req, CreateCommentRequest::default());
    }
}
