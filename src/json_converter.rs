use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Converts payloads between JSON text and Rust values.
///
/// Wire field names are lower case and underscore separated (`access_token`).
pub trait JsonConverter: Send + Sync {
    fn to_json<T: Serialize>(&self, value: &T) -> Result<String>;

    fn from_json<T: DeserializeOwned>(&self, json: &str) -> Result<T>;

    /// Decodes raw bytes; invalid UTF-8 is a decoding error.
    fn from_slice<T: DeserializeOwned>(&self, json: &[u8]) -> Result<T>;
}

/// [`JsonConverter`] backed by `serde_json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerdeJsonConverter;

impl JsonConverter for SerdeJsonConverter {
    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn from_json<T: DeserializeOwned>(&self, json: &str) -> Result<T> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_slice<T: DeserializeOwned>(&self, json: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YaasError;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    struct TestObject {
        id: u32,
        name: String,
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "id": 5312,
            "name": "test"
        }"#;

        let object: TestObject = SerdeJsonConverter.from_json(json).unwrap();

        assert_eq!(
            object,
            TestObject {
                id: 5312,
                name: "test".to_string()
            }
        );
    }

    #[test]
    fn test_to_json() {
        let object = TestObject {
            id: 5312,
            name: "test".to_string(),
        };

        let json = SerdeJsonConverter.to_json(&object).unwrap();

        assert_eq!(json, r#"{"id":5312,"name":"test"}"#);
    }

    #[test]
    fn test_from_slice() {
        let object: TestObject = SerdeJsonConverter
            .from_slice(br#"{"id":5312,"name":"test"}"#)
            .unwrap();
        assert_eq!(object.id, 5312);

        let err = SerdeJsonConverter
            .from_slice::<TestObject>(b"{\"id\":1,\"name\":\"\xff\"}")
            .unwrap_err();
        assert!(matches!(err, YaasError::Json(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = SerdeJsonConverter
            .from_json::<TestObject>("{\"id\":")
            .unwrap_err();

        assert!(matches!(err, YaasError::Json(_)));
    }
}
