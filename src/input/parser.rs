//! Request item parser
//!
//! Classifies HTTPie command words into headers, string fields and typed
//! JSON fields. Precedence is fixed: `:=` beats `=`, and `:` only marks a
//! header when the word has no `=` at all.

use serde_json::Value as JsonValue;
use tracing::trace;

use super::InputItem;
use crate::strings::{trim_quotes, unquote};

const JSON_FIELD_SEPARATOR: &str = ":=";
const DATA_FIELD_SEPARATOR: char = '=';
const HEADER_SEPARATOR: char = ':';

/// Parse one command word into an InputItem
///
/// A word quoted as a whole (`'first name=Ann'`) is unquoted first.
pub fn parse(word: &str) -> Option<InputItem> {
    let word = unquote(word);

    if let Some((key, raw)) = word.split_once(JSON_FIELD_SEPARATOR) {
        return Some(InputItem::JsonField {
            key: key.to_string(),
            value: parse_typed_value(unquote(raw)),
        });
    }

    if let Some((key, value)) = word.split_once(DATA_FIELD_SEPARATOR) {
        return Some(InputItem::DataField {
            key: key.to_string(),
            value: unquote(value).to_string(),
        });
    }

    if let Some((name, value)) = word.split_once(HEADER_SEPARATOR) {
        return Some(InputItem::Header {
            name: name.to_string(),
            value: trim_quotes(value).to_string(),
        });
    }

    None
}

/// Parse the right-hand side of `key:=value`, keeping the raw text on failure
fn parse_typed_value(raw: &str) -> JsonValue {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            trace!(value = raw, error = %e, "typed field is not valid JSON, keeping raw text");
            JsonValue::String(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header() {
        assert_eq!(
            parse("Authorization:'Bearer abc'"),
            Some(InputItem::Header {
                name: "Authorization".to_string(),
                value: "Bearer abc".to_string(),
            })
        );
    }

    #[test]
    fn test_data_field() {
        assert_eq!(
            parse("name=Ann"),
            Some(InputItem::DataField {
                key: "name".to_string(),
                value: "Ann".to_string(),
            })
        );
    }

    #[test]
    fn test_data_field_value_keeps_later_separators() {
        let item = parse("redirect=https://x.test/a=b").unwrap();
        assert_eq!(item.key(), "redirect");
        assert_eq!(item.json_value(), Some(json!("https://x.test/a=b")));
    }

    #[test]
    fn test_json_field_types() {
        assert_eq!(parse("id:=5").unwrap().json_value(), Some(json!(5)));
        assert_eq!(parse("ok:=true").unwrap().json_value(), Some(json!(true)));
        assert_eq!(parse("none:=null").unwrap().json_value(), Some(json!(null)));
        assert_eq!(
            parse(r#"tags:='["a","b"]'"#).unwrap().json_value(),
            Some(json!(["a", "b"]))
        );
    }

    #[test]
    fn test_json_field_fallback_to_raw_text() {
        let item = parse("when:=tomorrow").unwrap();
        assert!(matches!(item, InputItem::JsonField { .. }));
        assert_eq!(item.json_value(), Some(json!("tomorrow")));
    }

    #[test]
    fn test_equals_wins_over_colon() {
        let item = parse("a:b=c").unwrap();
        assert!(item.json_value().is_some());
        assert_eq!(item.key(), "a:b");
    }

    #[test]
    fn test_whole_word_quoted() {
        assert_eq!(
            parse("'first name=Ann Lee'"),
            Some(InputItem::DataField {
                key: "first name".to_string(),
                value: "Ann Lee".to_string(),
            })
        );
        assert_eq!(parse("'a[b c]:=1'").unwrap().json_value(), Some(json!(1)));
        assert_eq!(parse("\"X-Note:two words\"").unwrap().key(), "X-Note");
    }

    #[test]
    fn test_bracket_key_is_literal() {
        assert_eq!(parse("user[name]=Ann").unwrap().key(), "user[name]");
    }

    #[test]
    fn test_not_an_item() {
        assert_eq!(parse("plainword"), None);
    }
}
