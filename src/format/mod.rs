//! Record formatting module.
//!
//! This module renders small fixed-shape records into display strings. Two
//! record shapes are covered:
//! - `Product`: one line built by several string building strategies
//! - `SampleRecord`: labelled fields appended to a bounded `ScratchBuffer`

mod buffer;
mod error;
pub mod product;
pub mod record;

pub use buffer::{
    print_into, with_scratch, ScratchBuffer, DEFAULT_PADDING, DEFAULT_SCRATCH_CAPACITY,
};
pub use error::FormatError;
pub use product::{Product, ProductFormatter};
pub use record::{render, RecordFormatter, SampleRecord, NAME_CAPACITY};

/// Either kind of formatter, as selected by name.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Product(ProductFormatter),
    Record(RecordFormatter),
}

impl std::str::FromStr for Variant {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ProductFormatter>()
            .map(Variant::Product)
            .or_else(|_| s.parse::<RecordFormatter>().map(Variant::Record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!(
            "sprintf".parse::<Variant>().unwrap(),
            Variant::Product(ProductFormatter::Sprintf)
        );
        assert_eq!(
            "record-format-to".parse::<Variant>().unwrap(),
            Variant::Record(RecordFormatter::FormatTo)
        );
        assert!(matches!(
            "nope".parse::<Variant>(),
            Err(FormatError::UnknownVariant(name)) if name == "nope"
        ));
    }
}
