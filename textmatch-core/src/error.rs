//! Contract violations.
//!
//! Structural mismatches are never errors: recognizers return `None` and
//! validators clear `is_valid`. Only caller mistakes end up here.

use std::fmt;

use crate::span::Span;

/// Error codes for contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// `start` lies beyond the effective `end`
    StartPastEnd = 0,
    /// Explicit `end` lies beyond the source length
    EndPastInput,
    /// Offset arithmetic overflowed `usize`
    OffsetOverflow,
}

impl ErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::StartPastEnd => "start past end",
            Self::EndPastInput => "end past input",
            Self::OffsetOverflow => "offset overflow",
        }
    }
}

/// An invalid-argument failure with the offending range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    pub code: ErrorCode,
    /// Raw `start`/`end` as supplied by the caller.
    pub start: usize,
    pub end: usize,
}

impl Error {
    #[inline]
    pub(crate) fn new(code: ErrorCode, start: usize, end: usize) -> Self {
        Self { code, start, end }
    }

    /// The offending range, ordered so that it always forms a valid span.
    pub fn span(&self) -> Span {
        Span::new(self.start.min(self.end), self.start.max(self.end))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.code.message(), self.start, self.end)
    }
}

impl std::error::Error for Error {}

/// Validate `start`/`end` against a source of `len` units and resolve
/// [`NPOS`](crate::span::NPOS) to `len`.
pub fn check_range(len: usize, start: usize, end: usize) -> Result<usize, Error> {
    let effective = if end == crate::span::NPOS {
        len
    } else if end > len {
        return Err(Error::new(ErrorCode::EndPastInput, start, end));
    } else {
        end
    };
    if start > effective {
        return Err(Error::new(ErrorCode::StartPastEnd, start, end));
    }
    Ok(effective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::NPOS;

    #[test]
    fn test_npos_resolves_to_len() {
        assert_eq!(check_range(10, 3, NPOS), Ok(10));
        assert_eq!(check_range(10, 10, NPOS), Ok(10));
    }

    #[test]
    fn test_violations() {
        let err = check_range(4, 0, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::EndPastInput);
        let err = check_range(4, 3, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::StartPastEnd);
        assert_eq!(err.span(), Span::new(2, 3));
        assert_eq!(err.to_string(), "start past end at 3..2");
    }
}
