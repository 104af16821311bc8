//! logos-based tokenizer for style value strings.
//!
//! Style JSON mostly carries plain numbers, but a few values arrive as strings:
//! inset shorthands (`"8 16"`), numeric strings (`"12.5"`) and hex colors
//! (`"#ff00aa"`). Commas are treated like whitespace so `"8, 16"` also works.
//!
//! Token priority in logos is longest-match first, so `#fff` is a
//! [`Token::HexColor`] and never a stray `#` followed by an identifier.

use logos::Logos;

/// A token in a style value string.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\f,]+")]
pub enum Token {
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (validated further by `Color`).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Integer or decimal number, optionally negative, with an optional `px` suffix.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px)?")]
    #[regex(r"-?\.[0-9]+")]
    Number,

    /// Bare identifier such as `center` or `fill`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// Tokenize a style value string into `(Token, slice)` pairs.
///
/// Returns `None` if any part of the input fails to lex: a malformed value is
/// rejected as a whole rather than partially interpreted.
pub fn tokenize(input: &str) -> Option<Vec<(Token, &str)>> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| result.ok().map(|token| (token, &input[span])))
        .collect()
}

/// Parse the numeric value of a [`Token::Number`] slice.
pub fn number_value(slice: &str) -> Option<f64> {
    slice.trim_end_matches("px").parse::<f64>().ok()
}

/// Tokenize `input` and return the numbers it contains, or `None` if the
/// string contains anything besides numbers.
pub fn numbers(input: &str) -> Option<Vec<f64>> {
    tokenize(input)?
        .into_iter()
        .map(|(token, slice)| match token {
            Token::Number => number_value(slice),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn hex_colors() {
        assert_eq!(kinds("#fff"), vec![Token::HexColor]);
        assert_eq!(kinds("#FF00AA80"), vec![Token::HexColor]);
    }

    #[test]
    fn numbers_and_idents() {
        assert_eq!(kinds("10 -2.5 center"), vec![Token::Number, Token::Number, Token::Ident]);
    }

    #[test]
    fn commas_are_separators() {
        assert_eq!(numbers("8, 16").unwrap(), vec![8.0, 16.0]);
    }

    #[test]
    fn px_suffix_is_accepted() {
        assert_eq!(numbers("12px 4").unwrap(), vec![12.0, 4.0]);
    }

    #[test]
    fn leading_dot_number() {
        assert_eq!(numbers(".5").unwrap(), vec![0.5]);
    }

    #[test]
    fn garbage_rejects_whole_input() {
        assert!(tokenize("10 @ 20").is_none());
        assert!(numbers("10 wide").is_none());
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(numbers("").unwrap(), Vec::<f64>::new());
    }
}
