//! Product line formatters.
//!
//! Every strategy renders `Product: <name>, ID: <id>, Price: $<price>` with
//! the price rounded to two fractional digits.

use super::buffer::print_into;
use super::FormatError;
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Size of the stack buffer used by [`format_sprintf`].
pub const PRODUCT_BUFFER_LEN: usize = 256;

/// Defines product data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub id: i32,
    pub price: f64,
}

impl Product {
    /// Return the fixed benchmark product.
    ///
    pub fn sample() -> Self {
        Product {
            name: "Widget".to_string(),
            id: 12345,
            price: 99.99,
        }
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::sample()
    }
}

/// Accumulate the pieces one after another into a growing string.
///
pub fn format_stream(product: &Product) -> Result<String, FormatError> {
    let mut out = String::new();
    out.write_str("Product: ")?;
    out.write_str(&product.name)?;
    out.write_str(", ID: ")?;
    write!(out, "{}", product.id)?;
    out.write_str(", Price: $")?;
    write!(out, "{:.2}", product.price)?;
    Ok(out)
}

/// Concatenate owned pieces with `+`.
///
pub fn format_concat(product: &Product) -> Result<String, FormatError> {
    Ok(String::from("Product: ")
        + &product.name
        + ", ID: "
        + &product.id.to_string()
        + ", Price: $"
        + &format!("{:.2}", product.price))
}

/// Print into a fixed stack buffer, then copy the result out.
///
pub fn format_sprintf(product: &Product) -> Result<String, FormatError> {
    let mut buffer = [0u8; PRODUCT_BUFFER_LEN];
    let text = print_into(
        &mut buffer,
        format_args!(
            "Product: {}, ID: {}, Price: ${:.2}",
            product.name, product.id, product.price
        ),
    )?;
    Ok(text.to_string())
}

/// Interpolate everything with a single `format!`.
///
pub fn format_interpolate(product: &Product) -> Result<String, FormatError> {
    Ok(format!(
        "Product: {}, ID: {}, Price: ${:.2}",
        product.name, product.id, product.price
    ))
}

/// Reserve up front, then append piece by piece.
///
pub fn format_reserve_append(product: &Product) -> Result<String, FormatError> {
    let mut result = String::with_capacity(64);
    result.push_str("Product: ");
    result.push_str(&product.name);
    result.push_str(", ID: ");
    result.push_str(&product.id.to_string());
    result.push_str(", Price: $");
    result.push_str(&format!("{:.2}", product.price));
    Ok(result)
}

/// Short `Value: <n>` line through `format!`.
///
pub fn format_short_interpolate(n: i32) -> String {
    format!("Value: {}", n)
}

/// Short `Value: <n>` line through concatenation.
///
pub fn format_short_concat(n: i32) -> String {
    "Value: ".to_owned() + &n.to_string()
}

/// Signature shared by every product strategy.
pub type ProductFormatFn = fn(&Product) -> Result<String, FormatError>;

/// Names the available product strategies.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductFormatter {
    Stream,
    Concat,
    Sprintf,
    Interpolate,
    ReserveAppend,
}

impl ProductFormatter {
    pub const ALL: [ProductFormatter; 5] = [
        ProductFormatter::Stream,
        ProductFormatter::Concat,
        ProductFormatter::Sprintf,
        ProductFormatter::Interpolate,
        ProductFormatter::ReserveAppend,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ProductFormatter::Stream => "stream",
            ProductFormatter::Concat => "concat",
            ProductFormatter::Sprintf => "sprintf",
            ProductFormatter::Interpolate => "interpolate",
            ProductFormatter::ReserveAppend => "reserve-append",
        }
    }

    pub fn as_fn(self) -> ProductFormatFn {
        match self {
            ProductFormatter::Stream => format_stream,
            ProductFormatter::Concat => format_concat,
            ProductFormatter::Sprintf => format_sprintf,
            ProductFormatter::Interpolate => format_interpolate,
            ProductFormatter::ReserveAppend => format_reserve_append,
        }
    }

    pub fn format(self, product: &Product) -> Result<String, FormatError> {
        (self.as_fn())(product)
    }
}

impl fmt::Display for ProductFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductFormatter {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ProductFormatter::ALL
            .iter()
            .copied()
            .find(|formatter| formatter.name() == normalized)
            .ok_or_else(|| FormatError::UnknownVariant(s.to_string()))
    }
}
