//! Session Token
//!
//! Cookie value format: `<session uuid>.<base64url HMAC-SHA256(uuid)>`.

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Sign a session id
pub fn sign(session_id: Uuid, secret: &[u8]) -> AuthResult<String> {
    let session_id = session_id.to_string();
    let signature = hmac_sha256(secret, session_id.as_bytes())
        .map_err(|e| AuthError::Internal(format!("Session signing failed: {e}")))?;

    Ok(format!("{}.{}", session_id, to_base64url(&signature)))
}

/// Verify a token and extract the session id
///
/// Returns `None` for malformed or tampered tokens.
pub fn verify(token: &str, secret: &[u8]) -> Option<Uuid> {
    let (session_id, signature_b64) = token.split_once('.')?;
    let signature = from_base64url(signature_b64).ok()?;

    if !verify_hmac_sha256(secret, session_id.as_bytes(), &signature) {
        return None;
    }

    session_id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_then_verify() {
        let id = Uuid::new_v4();
        let token = sign(id, &SECRET).unwrap();
        assert!(token.starts_with(&id.to_string()));
        assert_eq!(verify(&token, &SECRET), Some(id));
    }

    #[test]
    fn test_rejects_other_secret() {
        let token = sign(Uuid::new_v4(), &SECRET).unwrap();
        assert_eq!(verify(&token, &[8u8; 32]), None);
    }

    #[test]
    fn test_rejects_swapped_id() {
        let token = sign(Uuid::new_v4(), &SECRET).unwrap();
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), signature);
        assert_eq!(verify(&forged, &SECRET), None);
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(verify("", &SECRET), None);
        assert_eq!(verify("no-dot", &SECRET), None);
        assert_eq!(verify("abc.!!!", &SECRET), None);
    }
}
