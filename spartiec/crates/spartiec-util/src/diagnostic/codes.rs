//! Diagnostic codes for categorizing compiler errors.
//!
//! Codes follow the format `{prefix}{number}` with a four digit, zero padded
//! number. Lexer errors live in the `E1xxx` range.
//!
//! # Examples
//!
//! ```
//! use spartiec_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("E", 1001);
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Check if this is an error code
    #[inline]
    pub fn is_error(&self) -> bool {
        self.prefix == "E"
    }

}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

// ===========================================================================
// LEXER ERRORS (E1001-E1999)
// ===========================================================================

/// E1001: No token can start with this character
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::new("E", 1001);
/// E1002: String literal not closed on its line
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::new("E", 1002);
/// E1003: Number literal with more than one decimal point
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::new("E", 1003);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(E_LEXER_UNEXPECTED_CHAR.as_str(), "E1001");
        assert_eq!(DiagnosticCode::new("W", 7).to_string(), "W0007");
        assert_eq!(
            format!("{:?}", E_LEXER_INVALID_NUMBER),
            "DiagnosticCode(E1003)"
        );
    }

    #[test]
    fn test_lexer_codes_are_errors() {
        for code in [
            E_LEXER_UNEXPECTED_CHAR,
            E_LEXER_UNTERMINATED_STRING,
            E_LEXER_INVALID_NUMBER,
        ] {
            assert!(code.is_error());
            assert_eq!(code.number() / 1000, 1);
        }
    }
}
