use base64::Engine;

/// Extract the subject claim from an access token JWT.
/// Returns the `sub` claim, which the backend sets to the user's id.
pub fn subject(token: &str) -> Option<String> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload = parts[1];

    // URL-safe base64 without padding - the decoder wants padding back
    let padding_needed = (4 - (payload.len() % 4)) % 4;
    let padded = if padding_needed > 0 {
        format!("{}{}", payload, "=".repeat(padding_needed))
    } else {
        payload.to_string()
    };

    let decoded = base64::engine::general_purpose::URL_SAFE
        .decode(&padded)
        .ok()?;

    let json: serde_json::Value = serde_json::from_slice(&decoded).ok()?;

    json.get("sub")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn token_with_payload(payload: &str) -> String {
        let encode = |s: &str| {
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s.as_bytes())
        };
        format!(
            "{}.{}.{}",
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            encode(payload),
            encode("signature")
        )
    }

    #[test]
    fn reads_sub_claim() {
        let token = token_with_payload(r#"{"sub":"user-123","exp":1}"#);
        assert_eq!(subject(&token), Some("user-123".to_string()));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(subject("not-a-jwt"), None);
        assert_eq!(subject("a.b"), None);
        assert_eq!(subject(&token_with_payload(r#"{"exp":1}"#)), None);
    }
}
