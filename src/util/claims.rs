//! Unverified id-token claims decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store only needs to read a couple of claims to drive UI
//! decisions. Signatures are never checked here; the backend does that on
//! every request. A token that cannot be read is treated as carrying no
//! claims at all.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::MalformedToken;

pub const GROUPS_CLAIM: &str = "cognito:groups";
pub const EMAIL_CLAIM: &str = "email";

/// base64url with optional padding, as issuers disagree on trailing `=`.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claim name to value mapping from a token payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Group memberships. A bare string counts as a single group; anything
    /// else non-list is treated as no groups.
    pub fn groups(&self) -> Vec<String> {
        match self.0.get(GROUPS_CLAIM) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            Some(Value::String(single)) => vec![single.clone()],
            _ => Vec::new(),
        }
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups().iter().any(|g| g == group)
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get(EMAIL_CLAIM).and_then(Value::as_str)
    }
}

/// Decode the payload segment of a compact token without verifying it.
///
/// Only the second `.`-separated segment is read, so header and signature
/// content never matter.
///
/// # Errors
///
/// Returns [`MalformedToken`] when the payload segment is missing, is not
/// base64url, is not JSON, or is JSON but not an object.
pub fn decode_claims(token: &str) -> Result<Claims, MalformedToken> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(MalformedToken::MissingPayload)?;

    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    let value: Value = serde_json::from_slice(&bytes)?;
    if !value.is_object() {
        return Err(MalformedToken::NotAnObject);
    }
    Ok(serde_json::from_value::<Claims>(value)?)
}
