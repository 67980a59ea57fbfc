use common::transfer::{RelayerEnvelope, TransferResponse};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Backend-assigned correlation id for a submitted transfer. Opaque: no
/// client-side structure is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationId(String);

impl AuthorizationId {
    pub fn new(id: impl Into<String>) -> Self {
        AuthorizationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn raw_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""authorizationId"\s*:\s*"([^"]+)""#)
            .expect("authorization id pattern is valid")
    })
}

/// Locate the authorization id in a transfer response. Direct and relayed
/// execution paths on the backend produce different envelope shapes, so the
/// probes run in a fixed order:
///
/// 1. the top-level `authorizationId` field;
/// 2. the relayer envelope's own `authorizationId` field;
/// 3. the envelope's `raw` body parsed as JSON;
/// 4. if that body is not JSON, a plain scan of it for the field.
///
/// An empty value at any step counts as absent.
pub fn extract(response: &TransferResponse) -> Option<AuthorizationId> {
    match response {
        TransferResponse::Direct {
            authorization_id,
            relayer_response,
        } => {
            if !authorization_id.is_empty() {
                return Some(AuthorizationId::new(authorization_id.clone()));
            }
            relayer_response.as_ref().and_then(from_envelope)
        }
        TransferResponse::Relayed { relayer_response } => from_envelope(relayer_response),
        TransferResponse::Unknown(_) => None,
    }
}

fn from_envelope(envelope: &RelayerEnvelope) -> Option<AuthorizationId> {
    let RelayerEnvelope::Fields {
        authorization_id,
        raw,
    } = envelope
    else {
        return None;
    };

    if let Some(id) = authorization_id {
        if !id.is_empty() {
            return Some(AuthorizationId::new(id.clone()));
        }
    }

    let raw = raw.as_deref().filter(|r| !r.is_empty())?;

    match serde_json::from_str::<serde_json::Value>(raw) {
        // A parseable raw body answers for itself; the scan is only for
        // bodies that are not JSON at all.
        Ok(parsed) => parsed
            .get("authorizationId")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(AuthorizationId::new),
        Err(_) => raw_id_pattern()
            .captures(raw)
            .map(|caps| AuthorizationId::new(&caps[1])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> TransferResponse {
        serde_json::from_str(body).expect("body decodes")
    }

    fn extracted(body: &str) -> Option<String> {
        extract(&decode(body)).map(|id| id.as_str().to_string())
    }

    #[test]
    fn same_id_from_all_four_shapes() {
        let shapes = [
            r#"{"authorizationId":"auth-42"}"#,
            r#"{"relayer_response":{"authorizationId":"auth-42"}}"#,
            r#"{"relayer_response":{"raw":"{\"authorizationId\":\"auth-42\"}"}}"#,
            r#"{"relayer_response":{"raw":"queued; \"authorizationId\":\"auth-42\" (relayed)"}}"#,
        ];
        for shape in shapes {
            assert_eq!(extracted(shape).as_deref(), Some("auth-42"), "{}", shape);
        }
    }

    #[test]
    fn no_shape_present_is_none() {
        assert_eq!(extracted("{}"), None);
        assert_eq!(extracted(r#"{"ok":true}"#), None);
        assert_eq!(extracted(r#"{"relayer_response":"plain string"}"#), None);
        assert_eq!(extracted(r#"{"relayer_response":42}"#), None);
        assert_eq!(extracted(r#"{"relayer_response":{}}"#), None);
    }

    #[test]
    fn top_level_field_wins() {
        let body = r#"{"authorizationId":"top","relayer_response":{"authorizationId":"nested"}}"#;
        assert_eq!(extracted(body).as_deref(), Some("top"));
    }

    #[test]
    fn empty_top_level_falls_through_to_envelope() {
        let body = r#"{"authorizationId":"","relayer_response":{"authorizationId":"nested"}}"#;
        assert_eq!(extracted(body).as_deref(), Some("nested"));
    }

    #[test]
    fn parseable_raw_without_id_skips_the_scan() {
        // The raw body IS valid JSON, so even though it textually contains
        // the field name inside a string, only the parsed lookup applies.
        let body =
            r#"{"relayer_response":{"raw":"{\"note\":\"\\\"authorizationId\\\":\\\"x\\\"\"}"}}"#;
        assert_eq!(extracted(body), None);
    }

    #[test]
    fn unparseable_raw_uses_the_scan() {
        let body = r#"{"relayer_response":{"raw":"<<< \"authorizationId\" : \"spaced-7\" >>>"}}"#;
        assert_eq!(extracted(body).as_deref(), Some("spaced-7"));
    }

    #[test]
    fn empty_raw_is_none() {
        assert_eq!(extracted(r#"{"relayer_response":{"raw":""}}"#), None);
    }
}
