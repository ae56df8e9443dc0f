//! Object-key construction helpers.

/// Builds the collision-resistant object key for an uploaded file.
///
/// The original file name is prefixed with a millisecond unix timestamp, so repeated uploads of
/// the same file produce distinct keys while the original name stays recoverable from the tail.
pub fn object_key(timestamp_ms: u64, original_name: &str) -> String {
    format!("{timestamp_ms}_{original_name}")
}
