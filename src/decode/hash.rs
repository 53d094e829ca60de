//! Hash map decoder.

use super::{StatusCode, UNKNOWN};
use std::collections::HashMap;
use std::sync::OnceLock;

fn status_map() -> &'static HashMap<i32, &'static str> {
    static STATUS_MAP: OnceLock<HashMap<i32, &'static str>> = OnceLock::new();
    STATUS_MAP.get_or_init(|| {
        StatusCode::ALL
            .iter()
            .map(|status| (status.code(), status.label()))
            .collect()
    })
}

/// Decode by looking the raw code up in a hash map.
///
pub fn decode_hash_map(code: i32) -> &'static str {
    status_map().get(&code).copied().unwrap_or(UNKNOWN)
}
