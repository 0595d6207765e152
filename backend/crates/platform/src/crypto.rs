//! Encoding Utilities
//!
//! Supabase stores sessions as `base64-` prefixed base64url text. Browsers and
//! older clients have written both alphabets, with and without padding, so
//! decoding accepts all of them.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{self, GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;

/// Marker written in front of base64 encoded cookie values.
pub const BASE64_PREFIX: &str = "base64-";

const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as unpadded base64url
pub fn to_base64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode standard or URL-safe base64, padded or not
pub fn from_base64_lenient(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let normalized: String = s
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    LENIENT_URL_SAFE.decode(normalized)
}

/// Strip the `base64-` marker when present
pub fn strip_base64_prefix(value: &str) -> &str {
    value.strip_prefix(BASE64_PREFIX).unwrap_or(value)
}
