//! Character classification for the Spartie lexer.
//!
//! Spartie's source alphabet is deliberately narrow: identifiers are ASCII
//! letters only, numbers are ASCII decimal digits with an optional point, and
//! the only separators are space, carriage return and newline. Tabs and
//! Unicode whitespace are not separators.

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use spartiec_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// assert!(!is_digit('٣')); // Arabic-Indic three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is an ASCII letter.
///
/// This is both the identifier start set and the identifier body set.
///
/// # Example
///
/// ```
/// use spartiec_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(!is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character starts a numeric literal (a digit or `.`).
#[inline]
pub fn is_number_start(c: char) -> bool {
    is_digit(c) || c == '.'
}

/// Checks if a character is a separator that does not end a line.
#[inline]
pub fn is_same_line_separator(c: char) -> bool {
    c == ' ' || c == '\r'
}

/// Checks if a character is any separator, newline included.
///
/// # Example
///
/// ```
/// use spartiec_lex::classify::is_separator;
///
/// assert!(is_separator(' '));
/// assert!(is_separator('\r'));
/// assert!(is_separator('\n'));
/// assert!(!is_separator('\t'));
/// ```
#[inline]
pub fn is_separator(c: char) -> bool {
    is_same_line_separator(c) || c == '\n'
}
