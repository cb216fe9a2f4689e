//! JWT decoding, verification and signing
//!
//! Decoding never touches the signature: header and payload are plain
//! base64url JSON and get shown as-is. Verification covers the HMAC
//! algorithms a shared secret can check (HS256/HS512); anything else is
//! reported as unsupported rather than failed. Signing goes through the
//! jsonwebtoken stack.

use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Sha256, Sha512};

use crate::error::{InspectError, Result};

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// HMAC algorithms available for signing and verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsAlgorithm {
    HS256,
    HS512,
}

/// Decoded (but not verified) token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    /// Raw base64url signature segment
    pub signature: String,
}

impl DecodedToken {
    /// The `alg` header value, if present
    pub fn algorithm(&self) -> Option<&str> {
        self.header.get("alg").and_then(Value::as_str)
    }
}

/// Signature check outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verification {
    Verified,
    Failed,
    /// Algorithm exists but a shared secret cannot check it
    Unsupported { algorithm: String },
}

/// Split a compact token and decode its JSON segments
pub fn decode(token: &str) -> Result<DecodedToken> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    let [header_b64, payload_b64, signature_b64] = parts.as_slice() else {
        return Err(InspectError::token(format!(
            "expected 3 dot-separated segments, found {}",
            parts.len()
        )));
    };

    Ok(DecodedToken {
        header: decode_json_segment(header_b64, "header")?,
        payload: decode_json_segment(payload_b64, "payload")?,
        signature: (*signature_b64).to_string(),
    })
}

/// Verify the signature of a compact token with a shared secret
pub fn verify(token: &str, secret: &str) -> Result<Verification> {
    let decoded = decode(token)?;
    let algorithm = decoded.algorithm().unwrap_or("none").to_string();

    let parts: Vec<&str> = token.trim().split('.').collect();
    let signing_input = format!("{}.{}", parts[0], parts[1]);
    let signature = decode_segment(parts[2], "signature")?;

    let verified = match algorithm.as_str() {
        "HS256" => {
            let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
                .map_err(|e| InspectError::Signing(e.to_string()))?;
            mac.update(signing_input.as_bytes());
            mac.verify_slice(&signature).is_ok()
        }
        "HS512" => {
            let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
                .map_err(|e| InspectError::Signing(e.to_string()))?;
            mac.update(signing_input.as_bytes());
            mac.verify_slice(&signature).is_ok()
        }
        other => {
            return Ok(Verification::Unsupported {
                algorithm: other.to_string(),
            })
        }
    };

    Ok(if verified {
        Verification::Verified
    } else {
        Verification::Failed
    })
}

/// Sign a JSON claims object into a compact token
pub fn sign(claims: &Value, secret: &str, algorithm: HsAlgorithm) -> Result<String> {
    if !claims.is_object() {
        return Err(InspectError::token("claims must be a JSON object"));
    }
    let header = match algorithm {
        HsAlgorithm::HS256 => Header::new(Algorithm::HS256),
        HsAlgorithm::HS512 => Header::new(Algorithm::HS512),
    };
    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| InspectError::Signing(e.to_string()))
}

fn decode_segment(segment: &str, what: &str) -> Result<Vec<u8>> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| InspectError::token(format!("{} is not valid base64url: {}", what, e)))
}

fn decode_json_segment(segment: &str, what: &str) -> Result<Value> {
    let bytes = decode_segment(segment, what)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| InspectError::token(format!("{} is not valid JSON: {}", what, e)))
}
