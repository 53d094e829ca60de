//! Status code decoding module.
//!
//! This module maps integer status codes to their display labels. Several
//! interchangeable strategies are provided so their dispatch cost can be
//! compared under identical semantics:
//! - `match` on the raw integer or on the converted `StatusCode`
//! - offset index into a typed array or a static slice
//! - hash map lookup
//! - linear if-else chain
//!
//! Every strategy returns [`UNKNOWN`] for codes outside
//! [`MIN_STATUS`]..=[`MAX_STATUS`].

mod chain;
mod error;
mod hash;
mod switch;
mod table;

pub use chain::decode_if_else;
pub use error::DecodeError;
pub use hash::decode_hash_map;
pub use switch::{decode_cast_switch, decode_switch};
pub use table::{decode_array, decode_c_array};

use log::*;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Lowest valid status code.
pub const MIN_STATUS: i32 = 57;

/// Highest valid status code.
pub const MAX_STATUS: i32 = 66;

/// Offset subtracted from a code to obtain its table index.
pub const STATUS_OFFSET: i32 = StatusCode::Success as i32;

/// Sentinel label returned for unrecognised codes.
pub const UNKNOWN: &str = "Unknown";

/// Defines the recognised status codes.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Success = 57,
    InvalidInput = 58,
    NotFound = 59,
    Unauthorized = 60,
    ServerError = 61,
    Timeout = 62,
    RateLimited = 63,
    BadRequest = 64,
    Forbidden = 65,
    Conflict = 66,
}

impl StatusCode {
    /// Every status code in ascending order.
    pub const ALL: [StatusCode; 10] = [
        StatusCode::Success,
        StatusCode::InvalidInput,
        StatusCode::NotFound,
        StatusCode::Unauthorized,
        StatusCode::ServerError,
        StatusCode::Timeout,
        StatusCode::RateLimited,
        StatusCode::BadRequest,
        StatusCode::Forbidden,
        StatusCode::Conflict,
    ];

    /// Return the integer value of the code.
    ///
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Return the display label of the code.
    ///
    pub const fn label(self) -> &'static str {
        match self {
            StatusCode::Success => "Success",
            StatusCode::InvalidInput => "InvalidInput",
            StatusCode::NotFound => "NotFound",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::ServerError => "ServerError",
            StatusCode::Timeout => "Timeout",
            StatusCode::RateLimited => "RateLimited",
            StatusCode::BadRequest => "BadRequest",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::Conflict => "Conflict",
        }
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            57 => Ok(StatusCode::Success),
            58 => Ok(StatusCode::InvalidInput),
            59 => Ok(StatusCode::NotFound),
            60 => Ok(StatusCode::Unauthorized),
            61 => Ok(StatusCode::ServerError),
            62 => Ok(StatusCode::Timeout),
            63 => Ok(StatusCode::RateLimited),
            64 => Ok(StatusCode::BadRequest),
            65 => Ok(StatusCode::Forbidden),
            66 => Ok(StatusCode::Conflict),
            other => Err(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signature shared by every decoding strategy.
pub type DecodeFn = fn(i32) -> &'static str;

/// Names the available decoding strategies.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoder {
    Switch,
    CastSwitch,
    Array,
    CArray,
    HashMap,
    IfElse,
}

impl Decoder {
    /// Every strategy, in benchmark order.
    pub const ALL: [Decoder; 6] = [
        Decoder::Switch,
        Decoder::CastSwitch,
        Decoder::Array,
        Decoder::CArray,
        Decoder::HashMap,
        Decoder::IfElse,
    ];

    /// Return the kebab-case name used by the CLI and benchmark ids.
    ///
    pub const fn name(self) -> &'static str {
        match self {
            Decoder::Switch => "switch",
            Decoder::CastSwitch => "cast-switch",
            Decoder::Array => "array",
            Decoder::CArray => "c-array",
            Decoder::HashMap => "hash-map",
            Decoder::IfElse => "if-else",
        }
    }

    /// Return the function implementing this strategy.
    ///
    pub fn as_fn(self) -> DecodeFn {
        match self {
            Decoder::Switch => decode_switch,
            Decoder::CastSwitch => decode_cast_switch,
            Decoder::Array => decode_array,
            Decoder::CArray => decode_c_array,
            Decoder::HashMap => decode_hash_map,
            Decoder::IfElse => decode_if_else,
        }
    }

    /// Decode a code with this strategy.
    ///
    pub fn decode(self, code: i32) -> &'static str {
        (self.as_fn())(code)
    }
}

impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Decoder {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Decoder::ALL
            .iter()
            .copied()
            .find(|decoder| decoder.name() == normalized)
            .ok_or_else(|| DecodeError::UnknownStrategy(s.to_string()))
    }
}

/// One code on which the strategies did not all return the same label.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disagreement {
    pub code: i32,
    pub labels: Vec<(Decoder, &'static str)>,
}

/// Decode every code in the range with every strategy and return the codes
/// on which the strategies disagree.
///
pub fn agreement(range: RangeInclusive<i32>) -> Result<Vec<Disagreement>, DecodeError> {
    if range.is_empty() {
        return Err(DecodeError::InvalidRange {
            start: *range.start(),
            end: *range.end(),
        });
    }

    let mut disagreements = Vec::new();
    for code in range {
        let labels: Vec<_> = Decoder::ALL
            .iter()
            .map(|decoder| (*decoder, decoder.decode(code)))
            .collect();
        let first = labels[0].1;
        if labels.iter().any(|(_, label)| *label != first) {
            warn!("Decoder strategies disagree on code {}: {:?}", code, labels);
            disagreements.push(Disagreement { code, labels });
        }
    }
    Ok(disagreements)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [(i32, &str); 10] = [
        (57, "Success"),
        (58, "InvalidInput"),
        (59, "NotFound"),
        (60, "Unauthorized"),
        (61, "ServerError"),
        (62, "Timeout"),
        (63, "RateLimited"),
        (64, "BadRequest"),
        (65, "Forbidden"),
        (66, "Conflict"),
    ];

    #[test]
    fn test_every_strategy_returns_canonical_labels() {
        for decoder in Decoder::ALL {
            for (code, label) in CANONICAL {
                assert_eq!(decoder.decode(code), label, "{} on {}", decoder, code);
            }
        }
    }

    #[test]
    fn test_every_strategy_rejects_out_of_range_codes() {
        let outside = [
            i32::MIN,
            -66,
            -57,
            -1,
            0,
            1,
            52,
            56,
            67,
            71,
            100,
            1_000_000,
            i32::MAX,
        ];
        for decoder in Decoder::ALL {
            for code in outside {
                assert_eq!(decoder.decode(code), UNKNOWN, "{} on {}", decoder, code);
            }
        }
    }

    #[test]
    fn test_boundaries() {
        for decoder in Decoder::ALL {
            assert_eq!(decoder.decode(MIN_STATUS - 1), UNKNOWN);
            assert_eq!(decoder.decode(MIN_STATUS), "Success");
            assert_eq!(decoder.decode(MAX_STATUS), "Conflict");
            assert_eq!(decoder.decode(MAX_STATUS + 1), UNKNOWN);
        }
    }

    #[test]
    fn test_server_error_from_every_strategy() {
        for decoder in Decoder::ALL {
            assert_eq!(decoder.decode(61), "ServerError");
        }
    }

    #[test]
    fn test_agreement_over_wide_range() {
        let disagreements = agreement(-1_000..=1_000).unwrap();
        assert!(disagreements.is_empty());
    }

    #[test]
    fn test_agreement_rejects_empty_range() {
        let result = agreement(10..=0);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidRange { start: 10, end: 0 })
        ));
    }

    #[test]
    fn test_status_code_round_trip() {
        for status in StatusCode::ALL {
            assert_eq!(StatusCode::try_from(status.code()), Ok(status));
            assert_eq!(status.to_string(), status.label());
        }
        assert_eq!(StatusCode::try_from(67), Err(67));
        assert_eq!(STATUS_OFFSET, MIN_STATUS);
    }

    #[test]
    fn test_decoder_from_str() {
        assert_eq!("switch".parse::<Decoder>().unwrap(), Decoder::Switch);
        assert_eq!("Hash_Map".parse::<Decoder>().unwrap(), Decoder::HashMap);
        assert_eq!(" if-else ".parse::<Decoder>().unwrap(), Decoder::IfElse);
        for decoder in Decoder::ALL {
            assert_eq!(decoder.name().parse::<Decoder>().unwrap(), decoder);
        }
        assert!(matches!(
            "binary-search".parse::<Decoder>(),
            Err(DecodeError::UnknownStrategy(_))
        ));
    }
}
