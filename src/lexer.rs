//! Splitting of a raw command line into arguments.
//!
//! The rules are deliberately naive: any run of delimiter characters separates
//! two tokens, and there is no quoting, escaping or substitution of any kind.

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Returns true if `ch` separates tokens.
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Splits `line` into owned tokens.
///
/// Consecutive, leading and trailing delimiters never produce empty tokens, so a
/// line made only of delimiters yields an empty vector.
///
/// The tokens are copies, so the caller may drop `line` as soon as this returns.
pub fn split_into_tokens(line: &str) -> Vec<String> {
    line.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
