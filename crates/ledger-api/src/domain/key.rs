//! # Composite Keys
//!
//! A composite key is the ordered join of its parts with [`KEY_SEPARATOR`].
//! No escaping is done: a part must never contain the separator. `StateList`
//! checks this with [`validate_key_parts`] before touching the ledger.

use super::errors::LedgerError;

/// Separator between composite key parts.
pub const KEY_SEPARATOR: char = ':';

/// Join key parts with the separator.
pub fn make_key<S: AsRef<str>>(parts: &[S]) -> String {
    let mut key = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(part.as_ref());
    }
    key
}

/// Split a composite key back into its parts.
pub fn split_key(key: &str) -> Vec<String> {
    key.split(KEY_SEPARATOR).map(str::to_owned).collect()
}

/// Reject any part containing the separator.
pub fn validate_key_parts<S: AsRef<str>>(parts: &[S]) -> Result<(), LedgerError> {
    match parts.iter().find(|p| p.as_ref().contains(KEY_SEPARATOR)) {
        Some(part) => Err(LedgerError::InvalidKeyPart {
            part: part.as_ref().to_string(),
            separator: KEY_SEPARATOR,
        }),
        None => Ok(()),
    }
}
