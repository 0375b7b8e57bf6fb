//! JWKS response envelope handling

use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

use crate::errors::{FetchError, MARSHAL_JWK, Result, UNMARSHAL_JWKS};

/// `{"keys": [...]}`, other members are ignored
#[derive(Deserialize)]
struct JwksEnvelope {
    #[serde(deserialize_with = "nullable_keys")]
    keys: Vec<Box<RawValue>>,
}

/// `"keys": null` is an empty set, a missing `keys` member is still an error
fn nullable_keys<'de, D>(deserializer: D) -> std::result::Result<Vec<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Box<RawValue>>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Splits a JWKS document into one compact JSON text per key
///
/// Keys are never decoded into a model: each one is the response text with the
/// insignificant whitespace removed, so number spelling, member order and
/// duplicate members are exactly what the server sent. Elements aren't checked
/// to be JWKs.
///
/// A missing `keys` member fails, `"keys": null` yields no keys.
pub fn parse_jwks(body: &[u8]) -> Result<Vec<String>> {
    let envelope: JwksEnvelope = serde_json::from_slice(body)
        .map_err(|e| FetchError::envelope(UNMARSHAL_JWKS, e.to_string()))?;

    envelope
        .keys
        .iter()
        .map(|key| compact(key.get()))
        .collect()
}

/// Strips whitespace outside string literals from already validated JSON text
fn compact(json: &str) -> Result<String> {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in json.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if !matches!(c, ' ' | '\t' | '\n' | '\r') {
            out.push(c);
        }
    }

    if in_string {
        return Err(FetchError::envelope(
            MARSHAL_JWK,
            "unterminated string in key",
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_set() {
        assert!(parse_jwks(br#"{"keys":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_keys_member() {
        let err = parse_jwks(br#"{"notkeys":[]}"#).unwrap_err();

        assert!(matches!(err, FetchError::Envelope { .. }));
        assert_eq!(err.operation(), UNMARSHAL_JWKS);
    }

    #[test]
    fn not_json() {
        let err = parse_jwks(b"<html>Unauthorized</html>").unwrap_err();
        assert!(matches!(err, FetchError::Envelope { .. }));
    }

    #[test]
    fn null_keys_is_an_empty_set() {
        assert!(parse_jwks(br#"{"keys":null}"#).unwrap().is_empty());
    }

    #[test]
    fn keys_must_be_an_array() {
        let err = parse_jwks(br#"{"keys":{"kid":"a"}}"#).unwrap_err();
        assert!(matches!(err, FetchError::Envelope { .. }));
    }

    #[test]
    fn numbers_keep_their_spelling() {
        let body = br#"{"keys":[{"a":1e2,"b":123456789012345678901234567890,"c":1.50,"d":-0}]}"#;

        assert_eq!(
            parse_jwks(body).unwrap(),
            vec![r#"{"a":1e2,"b":123456789012345678901234567890,"c":1.50,"d":-0}"#]
        );
    }

    #[test]
    fn duplicate_members_are_kept() {
        assert_eq!(
            parse_jwks(br#"{"keys":[{"kid":"a","kid":"b"}]}"#).unwrap(),
            vec![r#"{"kid":"a","kid":"b"}"#]
        );
    }

    #[test]
    fn whitespace_inside_strings_survives() {
        let body = b"{\"keys\": [ {\n  \"kid\" : \"a b\\\" c\",\t\"x5c\": [ \"M I\" ] } ]}";

        assert_eq!(
            parse_jwks(body).unwrap(),
            vec![r#"{"kid":"a b\" c","x5c":["M I"]}"#]
        );
    }

    #[test]
    fn fragments_keep_member_order() {
        let body = br#"{
            "keys": [
                {"kid": "a", "kty": "RSA"},
                {"use": "sig", "kty": "EC", "crv": "P-256", "x": "AA", "y": "AA"}
            ]
        }"#;

        assert_eq!(
            parse_jwks(body).unwrap(),
            vec![
                r#"{"kid":"a","kty":"RSA"}"#.to_string(),
                r#"{"use":"sig","kty":"EC","crv":"P-256","x":"AA","y":"AA"}"#.to_string(),
            ]
        );
    }

    #[test]
    fn elements_are_not_validated() {
        let body = br#"{"keys":[1,"two",{"three":[3]}],"extra":true}"#;

        assert_eq!(
            parse_jwks(body).unwrap(),
            vec!["1", r#""two""#, r#"{"three":[3]}"#]
        );
    }
}
