//! Offset-indexed table decoders.
//!
//! Both decoders subtract [`STATUS_OFFSET`] from the code and index a label
//! table when the result is in bounds. They differ only in how the table is
//! stored.

use super::{STATUS_OFFSET, UNKNOWN};

const STATUS_NAMES_SIZE: i32 = 10;

static STATUS_NAMES: [&str; STATUS_NAMES_SIZE as usize] = [
    "Success",
    "InvalidInput",
    "NotFound",
    "Unauthorized",
    "ServerError",
    "Timeout",
    "RateLimited",
    "BadRequest",
    "Forbidden",
    "Conflict",
];

static STATUS_NAMES_C: &[&str] = &[
    "Success",
    "InvalidInput",
    "NotFound",
    "Unauthorized",
    "ServerError",
    "Timeout",
    "RateLimited",
    "BadRequest",
    "Forbidden",
    "Conflict",
];

const STATUS_NAMES_C_SIZE: i32 = 10;

/// Decode through the typed fixed-size array.
///
pub fn decode_array(code: i32) -> &'static str {
    // Codes below i32::MIN + 57 wrap to large positive indices.
    let index = code.wrapping_sub(STATUS_OFFSET);
    if index >= 0 && index < STATUS_NAMES_SIZE {
        return STATUS_NAMES[index as usize];
    }
    UNKNOWN
}

/// Decode through the static slice and its separate size constant.
///
pub fn decode_c_array(code: i32) -> &'static str {
    let index = code.wrapping_sub(STATUS_OFFSET);
    if (0..STATUS_NAMES_C_SIZE).contains(&index) {
        if let Some(name) = STATUS_NAMES_C.get(index as usize) {
            return name;
        }
    }
    UNKNOWN
}
