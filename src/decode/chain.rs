//! If-else chain decoder.

use super::UNKNOWN;

/// Decode by testing each known code in ascending order.
///
#[allow(clippy::if_same_then_else, clippy::comparison_chain)]
pub fn decode_if_else(code: i32) -> &'static str {
    if code == 57 {
        "Success"
    } else if code == 58 {
        "InvalidInput"
    } else if code == 59 {
        "NotFound"
    } else if code == 60 {
        "Unauthorized"
    } else if code == 61 {
        "ServerError"
    } else if code == 62 {
        "Timeout"
    } else if code == 63 {
        "RateLimited"
    } else if code == 64 {
        "BadRequest"
    } else if code == 65 {
        "Forbidden"
    } else if code == 66 {
        "Conflict"
    } else {
        UNKNOWN
    }
}
