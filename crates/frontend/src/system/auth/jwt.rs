use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Claims read from the access token; the signature is not checked here
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn user_id(&self) -> Option<String> {
        match &self.id {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => self.sub.clone(),
        }
    }

    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.map_or(false, |exp| exp <= now_secs)
    }
}

/// Decodes the payload segment of a `header.payload.signature` token
pub fn decode_claims(token: &str) -> Result<TokenClaims, String> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| "token sin payload".to_string())?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("payload base64 inválido: {}", e))?;
    serde_json::from_slice(&bytes).map_err(|e| format!("payload JSON inválido: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(payload: &str) -> String {
        format!("e30.{}.firma", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn reads_email_and_numeric_id() {
        let claims = decode_claims(&token(r#"{"email":"ana@corp.ec","id":42,"exp":100}"#)).unwrap();
        assert_eq!(claims.email.as_deref(), Some("ana@corp.ec"));
        assert_eq!(claims.user_id().as_deref(), Some("42"));
        assert!(claims.is_expired(100));
        assert!(!claims.is_expired(99));
    }

    #[test]
    fn sub_is_the_fallback_id() {
        let claims = decode_claims(&token(r#"{"sub":"u-7"}"#)).unwrap();
        assert_eq!(claims.user_id().as_deref(), Some("u-7"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode_claims("no-dots").is_err());
        assert!(decode_claims("a.%%%.c").is_err());
        assert!(decode_claims(&token("not json")).is_err());
    }
}
