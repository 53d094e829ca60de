//! Sample record formatters.
//!
//! Each strategy appends the same four labelled fields to a
//! [`ScratchBuffer`], in the fixed order flag, launcher id, intercept range,
//! platform name:
//!
//! ```text
//! ;$Flag Value:$ Yes;$Launcher ID:$ 12345;$Predicted Intercept Range:$ 99.990 dm;$Platform Name:$ Sample Name
//! ```
//!
//! A record that does not fit is rejected whole: the buffer keeps whatever it
//! held before the call.

use super::buffer::{print_into, ScratchBuffer};
use super::FormatError;
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a record name in bytes.
pub const NAME_CAPACITY: usize = 255;

/// Capacity used by [`render`].
pub const RENDER_CAPACITY: usize = 1024;

/// Stack temporary used for numeric fields by [`append_concat`]. Large
/// enough for any `f64` printed with three fractional digits plus its label.
const TEMP_LEN: usize = 512;

pub const FLAG_LABEL: &str = ";$Flag Value:$ ";
pub const ID_LABEL: &str = ";$Launcher ID:$ ";
pub const RANGE_LABEL: &str = ";$Predicted Intercept Range:$ ";
pub const RANGE_UNIT: &str = " dm";
pub const NAME_LABEL: &str = ";$Platform Name:$ ";

/// Defines sample record data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub flag: u8,
    pub id: i32,
    pub value: f64,
    name: String,
}

impl SampleRecord {
    /// Return a new record, rejecting names longer than [`NAME_CAPACITY`].
    ///
    pub fn new(flag: u8, id: i32, value: f64, name: impl Into<String>) -> Result<Self, FormatError> {
        let record = SampleRecord {
            flag,
            id,
            value,
            name: name.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Return the fixed benchmark record.
    ///
    pub fn sample() -> Self {
        SampleRecord {
            flag: 1,
            id: 12345,
            value: 99.99,
            name: "Sample Name".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), FormatError> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Check the name length. Records deserialized from configuration bypass
    /// [`SampleRecord::new`], so callers loading them must validate.
    ///
    pub fn validate(&self) -> Result<(), FormatError> {
        check_name(&self.name)
    }

    /// Return the display text of the flag.
    ///
    pub fn flag_text(&self) -> &'static str {
        yes_or_no(self.flag)
    }
}

impl Default for SampleRecord {
    fn default() -> Self {
        Self::sample()
    }
}

fn check_name(name: &str) -> Result<(), FormatError> {
    if name.len() > NAME_CAPACITY {
        return Err(FormatError::NameTooLong {
            len: name.len(),
            max: NAME_CAPACITY,
        });
    }
    Ok(())
}

/// Render a flag as `"No"` when zero and `"Yes"` otherwise.
///
pub fn yes_or_no(flag: u8) -> &'static str {
    if flag == 0 {
        "No"
    } else {
        "Yes"
    }
}

/// Concatenation baseline.
///
/// Labels and text fields are appended as pieces; numeric fields go through
/// a stack temporary first.
pub fn append_concat(buf: &mut ScratchBuffer, record: &SampleRecord) -> Result<(), FormatError> {
    let mut temp = [0u8; TEMP_LEN];

    buf.append_all(|buf| {
        buf.push_str(FLAG_LABEL)?;
        buf.push_str(record.flag_text())?;

        let id = print_into(&mut temp, format_args!("{}{}", ID_LABEL, record.id))?;
        buf.push_str(id)?;

        let range = print_into(
            &mut temp,
            format_args!("{}{:.3}{}", RANGE_LABEL, record.value, RANGE_UNIT),
        )?;
        buf.push_str(range)?;

        buf.push_str(NAME_LABEL)?;
        buf.push_str(&record.name)
    })
}

/// Print each field at the end of the buffer, keeping a running length.
///
pub fn append_sprintf_length(
    buf: &mut ScratchBuffer,
    record: &SampleRecord,
) -> Result<(), FormatError> {
    buf.append_all(|buf| {
        let mut length = buf.len();
        length += buf.print(format_args!("{}{}", FLAG_LABEL, record.flag_text()))?;
        length += buf.print(format_args!("{}{}", ID_LABEL, record.id))?;
        length += buf.print(format_args!(
            "{}{:.3}{}",
            RANGE_LABEL, record.value, RANGE_UNIT
        ))?;
        length += buf.print(format_args!("{}{}", NAME_LABEL, record.name))?;
        debug_assert_eq!(length, buf.len());
        Ok(())
    })
}

/// Format each field into its own `String`, then append it.
///
pub fn append_format(buf: &mut ScratchBuffer, record: &SampleRecord) -> Result<(), FormatError> {
    buf.append_all(|buf| {
        let flag = format!("{}{}", FLAG_LABEL, record.flag_text());
        buf.push_str(&flag)?;
        let id = format!("{}{}", ID_LABEL, record.id);
        buf.push_str(&id)?;
        let range = format!("{}{:.3}{}", RANGE_LABEL, record.value, RANGE_UNIT);
        buf.push_str(&range)?;
        let name = format!("{}{}", NAME_LABEL, record.name);
        buf.push_str(&name)
    })
}

/// Format each field directly at the end of the buffer.
///
pub fn append_format_to(buf: &mut ScratchBuffer, record: &SampleRecord) -> Result<(), FormatError> {
    buf.append_all(|buf| {
        write!(buf, "{}{}", FLAG_LABEL, record.flag_text())?;
        write!(buf, "{}{}", ID_LABEL, record.id)?;
        write!(buf, "{}{:.3}{}", RANGE_LABEL, record.value, RANGE_UNIT)?;
        write!(buf, "{}{}", NAME_LABEL, record.name)
    })
}

/// Render a record into an owned string through a locally owned buffer.
///
pub fn render(record: &SampleRecord) -> Result<String, FormatError> {
    let mut buf = ScratchBuffer::with_capacity(RENDER_CAPACITY);
    append_format_to(&mut buf, record)?;
    Ok(buf.as_str().to_string())
}

/// Signature shared by every record strategy.
pub type RecordFormatFn = fn(&mut ScratchBuffer, &SampleRecord) -> Result<(), FormatError>;

/// Names the available record strategies.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormatter {
    Concat,
    SprintfLength,
    Format,
    FormatTo,
}

impl RecordFormatter {
    pub const ALL: [RecordFormatter; 4] = [
        RecordFormatter::Concat,
        RecordFormatter::SprintfLength,
        RecordFormatter::Format,
        RecordFormatter::FormatTo,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            RecordFormatter::Concat => "record-concat",
            RecordFormatter::SprintfLength => "record-sprintf-length",
            RecordFormatter::Format => "record-format",
            RecordFormatter::FormatTo => "record-format-to",
        }
    }

    pub fn as_fn(self) -> RecordFormatFn {
        match self {
            RecordFormatter::Concat => append_concat,
            RecordFormatter::SprintfLength => append_sprintf_length,
            RecordFormatter::Format => append_format,
            RecordFormatter::FormatTo => append_format_to,
        }
    }

    pub fn append(self, buf: &mut ScratchBuffer, record: &SampleRecord) -> Result<(), FormatError> {
        (self.as_fn())(buf, record)
    }
}

impl fmt::Display for RecordFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordFormatter {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        RecordFormatter::ALL
            .iter()
            .copied()
            .find(|formatter| formatter.name() == normalized)
            .ok_or_else(|| FormatError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    const EXPECTED: &str = ";$Flag Value:$ Yes;$Launcher ID:$ 12345;$Predicted Intercept Range:$ 99.990 dm;$Platform Name:$ Sample Name";

    #[test]
    fn test_every_strategy_formats_sample() {
        let record = SampleRecord::sample();
        let mut buf = ScratchBuffer::new();
        for formatter in RecordFormatter::ALL {
            buf.reset();
            formatter.append(&mut buf, &record).unwrap();
            assert_eq!(buf.as_str(), EXPECTED, "{}", formatter);
        }
    }

    #[test]
    fn test_formatting_is_idempotent_after_reset() {
        let record = SampleRecord::sample();
        let mut buf = ScratchBuffer::new();
        for formatter in RecordFormatter::ALL {
            buf.reset();
            formatter.append(&mut buf, &record).unwrap();
            let first = buf.as_str().to_string();
            buf.reset();
            formatter.append(&mut buf, &record).unwrap();
            assert_eq!(buf.as_str(), first);
        }
    }

    #[test]
    fn test_appends_after_padding() {
        let record = SampleRecord::sample();
        let mut buf = ScratchBuffer::new();
        for formatter in RecordFormatter::ALL {
            buf.reset_with_padding(100).unwrap();
            formatter.append(&mut buf, &record).unwrap();
            assert_eq!(buf.len(), 100 + EXPECTED.len());
            assert!(buf.as_str()[..100].chars().all(|c| c == ' '));
            assert_eq!(&buf.as_str()[100..], EXPECTED);
        }
    }

    #[test]
    fn test_field_order() {
        let text = render(&SampleRecord::sample()).unwrap();
        let positions: Vec<usize> = [FLAG_LABEL, ID_LABEL, RANGE_LABEL, NAME_LABEL]
            .iter()
            .map(|label| text.find(label).unwrap())
            .collect();
        assert_eq!(positions[0], 0);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_flag_zero_renders_no() {
        let record = SampleRecord::new(0, -1, 0.0, "").unwrap();
        assert_eq!(
            render(&record).unwrap(),
            ";$Flag Value:$ No;$Launcher ID:$ -1;$Predicted Intercept Range:$ 0.000 dm;$Platform Name:$ "
        );
        assert_eq!(yes_or_no(255), "Yes");
    }

    #[test]
    fn test_strategies_agree_on_generated_records() {
        let mut buf = ScratchBuffer::new();
        for _ in 0..32 {
            let record: SampleRecord = Faker.fake();
            let expected = render(&record).unwrap();
            for formatter in RecordFormatter::ALL {
                buf.reset();
                formatter.append(&mut buf, &record).unwrap();
                assert_eq!(buf.as_str(), expected, "{}", formatter);
            }
        }
    }

    #[test]
    fn test_name_capacity() {
        assert!(SampleRecord::new(1, 1, 1.0, "n".repeat(NAME_CAPACITY)).is_ok());
        let result = SampleRecord::new(1, 1, 1.0, "n".repeat(NAME_CAPACITY + 1));
        assert!(matches!(
            result,
            Err(FormatError::NameTooLong { len: 256, max: 255 })
        ));

        let mut record = SampleRecord::sample();
        assert!(record.set_name("x".repeat(300)).is_err());
        assert_eq!(record.name(), "Sample Name");
    }

    #[test]
    fn test_overflow_is_rejected() {
        let record = SampleRecord::sample();
        for formatter in RecordFormatter::ALL {
            let mut buf = ScratchBuffer::with_capacity(EXPECTED.len() - 1);
            let result = formatter.append(&mut buf, &record);
            assert!(
                matches!(result, Err(FormatError::CapacityExceeded { .. })),
                "{}",
                formatter
            );
            assert_eq!(buf.as_str(), "", "{}", formatter);

            // Fails on the third field, after two have been appended.
            let mut buf = ScratchBuffer::with_capacity(60);
            assert!(formatter.append(&mut buf, &record).is_err(), "{}", formatter);
            assert_eq!(buf.as_str(), "", "{}", formatter);
        }
    }

    #[test]
    fn test_overflow_keeps_padding() {
        let record = SampleRecord::sample();
        for formatter in RecordFormatter::ALL {
            let mut buf = ScratchBuffer::with_capacity(100 + EXPECTED.len() - 1);
            buf.reset_with_padding(100).unwrap();
            let result = formatter.append(&mut buf, &record);
            assert!(
                matches!(result, Err(FormatError::CapacityExceeded { .. })),
                "{}",
                formatter
            );
            assert_eq!(buf.len(), 100, "{}", formatter);
            assert!(buf.as_str().chars().all(|c| c == ' '));

            let mut buf = ScratchBuffer::with_capacity(100 + EXPECTED.len());
            buf.reset_with_padding(100).unwrap();
            formatter.append(&mut buf, &record).unwrap();
            assert_eq!(&buf.as_str()[100..], EXPECTED);
        }
    }

    #[test]
    fn test_extreme_values_fit_render_capacity() {
        let record = SampleRecord::new(1, i32::MIN, f64::MAX, "z".repeat(NAME_CAPACITY)).unwrap();
        let mut buf = ScratchBuffer::new();
        append_concat(&mut buf, &record).unwrap();
        assert_eq!(render(&record).unwrap(), buf.as_str());
    }

    #[test]
    fn test_record_formatter_from_str() {
        for formatter in RecordFormatter::ALL {
            assert_eq!(formatter.name().parse::<RecordFormatter>().unwrap(), formatter);
        }
        assert!(matches!(
            "record-strcat".parse::<RecordFormatter>(),
            Err(FormatError::UnknownVariant(_))
        ));
    }
}
