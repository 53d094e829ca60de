//! `match`-based decoders.

use super::{StatusCode, UNKNOWN};

/// Decode by matching on the raw integer.
///
pub fn decode_switch(code: i32) -> &'static str {
    match code {
        57 => "Success",
        58 => "InvalidInput",
        59 => "NotFound",
        60 => "Unauthorized",
        61 => "ServerError",
        62 => "Timeout",
        63 => "RateLimited",
        64 => "BadRequest",
        65 => "Forbidden",
        66 => "Conflict",
        _ => UNKNOWN,
    }
}

/// Decode by converting to `StatusCode` first and matching on the enum.
///
pub fn decode_cast_switch(code: i32) -> &'static str {
    match StatusCode::try_from(code) {
        Ok(StatusCode::Success) => "Success",
        Ok(StatusCode::InvalidInput) => "InvalidInput",
        Ok(StatusCode::NotFound) => "NotFound",
        Ok(StatusCode::Unauthorized) => "Unauthorized",
        Ok(StatusCode::ServerError) => "ServerError",
        Ok(StatusCode::Timeout) => "Timeout",
        Ok(StatusCode::RateLimited) => "RateLimited",
        Ok(StatusCode::BadRequest) => "BadRequest",
        Ok(StatusCode::Forbidden) => "Forbidden",
        Ok(StatusCode::Conflict) => "Conflict",
        Err(_) => UNKNOWN,
    }
}
