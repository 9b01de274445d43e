use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The single content record shown on the user page and edited from the admin page.
///
/// Every field is optional on the wire: missing keys and `null` values decode
/// to an empty string, unknown keys are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

impl Content {
    /// Decodes an update payload.
    ///
    /// Only the first JSON value in `body` is read and anything after it is
    /// ignored. A top-level `null` yields the empty record. Keys match field
    /// names case-insensitively.
    pub fn from_request_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_slice(body);
        let Some(fields) = Option::<Map<String, Value>>::deserialize(&mut de)? else {
            return Ok(Content::default());
        };

        let folded: Map<String, Value> = fields
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();
        serde_json::from_value(Value::Object(folded))
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.text.is_empty() && self.image.is_empty() && self.link.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_decode_as_empty() {
        let content: Content = serde_json::from_str(r#"{"title":"Hi","image":null}"#).unwrap();
        assert_eq!(content.title, "Hi");
        assert_eq!(content.text, "");
        assert_eq!(content.image, "");
        assert_eq!(content.link, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let content: Content =
            serde_json::from_str(r#"{"title":"t","author":"someone","tags":[1,2]}"#).unwrap();
        assert_eq!(content.title, "t");
        assert!(!content.is_empty());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(serde_json::from_str::<Content>(r#""just a string""#).is_err());
        assert!(serde_json::from_str::<Content>(r#"{"title": 5}"#).is_err());
    }

    #[test]
    fn request_body_ignores_data_after_first_value() {
        let content = Content::from_request_body(br#"{"title":"a"} trailing"#).unwrap();
        assert_eq!(content.title, "a");

        let content = Content::from_request_body(br#"{"title":"a"}{"title":"b"}"#).unwrap();
        assert_eq!(content.title, "a");
    }

    #[test]
    fn request_body_null_is_empty_record() {
        assert_eq!(Content::from_request_body(b" null ").unwrap(), Content::default());
    }

    #[test]
    fn request_body_keys_match_case_insensitively() {
        let content =
            Content::from_request_body(br#"{"Title":"x","TEXT":"y","iMaGe":"z","link":"w"}"#).unwrap();
        assert_eq!(
            content,
            Content {
                title: "x".into(),
                text: "y".into(),
                image: "z".into(),
                link: "w".into(),
            }
        );
    }

    #[test]
    fn request_body_rejects_malformed_input() {
        assert!(Content::from_request_body(b"").is_err());
        assert!(Content::from_request_body(b"not json").is_err());
        assert!(Content::from_request_body(br#""a string""#).is_err());
        assert!(Content::from_request_body(br#"{"title":42}"#).is_err());
    }

    #[test]
    fn encodes_fields_in_declaration_order() {
        let content = Content {
            title: "Hi".into(),
            text: "body".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&content).unwrap(),
            r#"{"title":"Hi","text":"body","image":"","link":""}"#
        );
    }
}
