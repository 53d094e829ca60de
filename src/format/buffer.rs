//! Bounded output buffers.
//!
//! Both [`ScratchBuffer`] and [`print_into`] enforce a hard capacity. A write
//! that does not fit is rejected with [`FormatError::CapacityExceeded`] and
//! leaves previously written content untouched.

use super::FormatError;
use std::cell::RefCell;
use std::fmt;

/// Default scratch buffer capacity in bytes.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 300_000;

/// Default number of padding spaces written before each record run.
pub const DEFAULT_PADDING: usize = 100_000;

/// Reusable text buffer with a fixed capacity.
///
/// The backing storage is allocated once up front so appends never
/// reallocate.
#[derive(Clone, Debug)]
pub struct ScratchBuffer {
    text: String,
    capacity: usize,
}

impl ScratchBuffer {
    /// Return a new empty buffer with the default capacity.
    ///
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SCRATCH_CAPACITY)
    }

    /// Return a new empty buffer holding at most `capacity` bytes.
    ///
    pub fn with_capacity(capacity: usize) -> Self {
        ScratchBuffer {
            text: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bytes that can still be appended.
    ///
    pub fn remaining(&self) -> usize {
        self.capacity - self.text.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Clear the buffer to its empty state.
    ///
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Clear the buffer and fill it with `len` spaces, so that subsequent
    /// appends land at an offset like they would in a long-lived log line.
    ///
    pub fn reset_with_padding(&mut self, len: usize) -> Result<(), FormatError> {
        self.text.clear();
        self.reserve_for(len)?;
        self.text.extend(std::iter::repeat(' ').take(len));
        Ok(())
    }

    /// Append a string, rejecting it if it would exceed the capacity.
    ///
    pub fn push_str(&mut self, s: &str) -> Result<(), FormatError> {
        self.reserve_for(s.len())?;
        self.text.push_str(s);
        Ok(())
    }

    /// Format at the end of the buffer and return the number of bytes written.
    ///
    /// The write is all-or-nothing: on overflow the buffer is restored to its
    /// previous length.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<usize, FormatError> {
        let start = self.text.len();
        let mut writer = BoundedWriter {
            text: &mut self.text,
            capacity: self.capacity,
            required: start,
        };
        let outcome = fmt::write(&mut writer, args);
        let required = writer.required;

        if required > self.capacity {
            self.text.truncate(start);
            return Err(FormatError::CapacityExceeded {
                capacity: self.capacity,
                required,
            });
        }
        if let Err(e) = outcome {
            self.text.truncate(start);
            return Err(e.into());
        }
        Ok(self.text.len() - start)
    }

    /// Support for the `write!` macro, with the same policy as [`print`].
    ///
    /// [`print`]: ScratchBuffer::print
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), FormatError> {
        self.print(args).map(|_| ())
    }

    /// Run several appends as one. If any of them fails the buffer is cut
    /// back to its length before the call.
    ///
    pub fn append_all<R, F>(&mut self, f: F) -> Result<R, FormatError>
    where
        F: FnOnce(&mut ScratchBuffer) -> Result<R, FormatError>,
    {
        let start = self.text.len();
        let result = f(self);
        if result.is_err() {
            self.truncate(start);
        }
        result
    }

    fn truncate(&mut self, len: usize) {
        self.text.truncate(len);
    }

    fn reserve_for(&self, additional: usize) -> Result<(), FormatError> {
        let required = self.text.len() + additional;
        if required > self.capacity {
            return Err(FormatError::CapacityExceeded {
                capacity: self.capacity,
                required,
            });
        }
        Ok(())
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends to a string until the capacity is reached, then keeps counting
/// the bytes that would have been written.
struct BoundedWriter<'a> {
    text: &'a mut String,
    capacity: usize,
    required: usize,
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.required <= self.capacity {
            self.text.push_str(s);
        }
        Ok(())
    }
}

/// Slice counterpart of [`BoundedWriter`].
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    required: usize,
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.required <= self.buf.len() {
            self.buf[self.written..self.required].copy_from_slice(s.as_bytes());
            self.written = self.required;
        }
        Ok(())
    }
}

/// Print formatted text into the start of a byte slice and return it as a
/// string slice.
///
/// Like `snprintf`, the full output length is computed even when it does not
/// fit; unlike `snprintf`, output that does not fit is an error rather than
/// silently truncated.
pub fn print_into<'a>(buf: &'a mut [u8], args: fmt::Arguments<'_>) -> Result<&'a str, FormatError> {
    let mut writer = SliceWriter {
        buf,
        written: 0,
        required: 0,
    };
    fmt::write(&mut writer, args)?;
    let SliceWriter {
        buf,
        written,
        required,
    } = writer;

    if required > buf.len() {
        return Err(FormatError::CapacityExceeded {
            capacity: buf.len(),
            required,
        });
    }
    std::str::from_utf8(&buf[..written]).map_err(|_| FormatError::Write(fmt::Error))
}

thread_local! {
    static SCRATCH: RefCell<ScratchBuffer> = RefCell::new(ScratchBuffer::new());
}

/// Lend the calling thread's scratch buffer, reset to empty, to `f`.
///
/// A nested call on the same thread gets a fresh temporary buffer instead.
pub fn with_scratch<R>(f: impl FnOnce(&mut ScratchBuffer) -> R) -> R {
    SCRATCH.with(|cell| match cell.try_borrow_mut() {
        Ok(mut buf) => {
            buf.reset();
            f(&mut buf)
        }
        Err(_) => f(&mut ScratchBuffer::new()),
    })
}
