//! Per-construct matchers and the `tokenize` driver loop.
//!
//! Every matcher is a pure function of `(content, start)` returning a
//! [`MatchResult`]; the driver dispatches on the next unconsumed character,
//! advances its cursor by the reported span, and collects tokens and errors.
//! Errors never abort the scan: the driver records them and resumes past the
//! offending region.

use crate::error::{ScanError, ScanErrorKind};
use crate::token::{self, Literal, Token, TokenKind};

/// Uniform return value of every matcher.
///
/// `span` is the number of bytes consumed and is meaningful even on failure
/// when characters were provisionally consumed, so the driver can skip past
/// the unrecoverable region. The string matcher may accumulate several
/// errors for one failed match; everything else reports at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub success: bool,
    pub token: Option<Token>,
    pub span: usize,
    pub errors: Vec<ScanError>,
}

impl MatchResult {
    /// Successful match producing a token.
    #[must_use]
    pub fn matched(token: Token, span: usize) -> Self {
        Self {
            success: true,
            token: Some(token),
            span,
            errors: Vec::new(),
        }
    }

    /// Successful match producing no token (comments).
    #[must_use]
    pub const fn skipped(span: usize) -> Self {
        Self {
            success: true,
            token: None,
            span,
            errors: Vec::new(),
        }
    }

    /// Non-match without an error, letting the driver try another matcher.
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            success: false,
            token: None,
            span: 0,
            errors: Vec::new(),
        }
    }

    /// Failed match with a single error.
    #[must_use]
    pub fn failed(span: usize, error: ScanError) -> Self {
        Self {
            success: false,
            token: None,
            span,
            errors: vec![error],
        }
    }
}

/// Result of a full scan: tokens in source order plus errors in order of
/// detection. A buffer with errors may still yield a partial token sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tokenize a source buffer.
///
/// Comments and whitespace are elided. The cursor strictly advances on every
/// iteration, so the scan always terminates in O(input length) even on
/// lexical garbage.
#[must_use]
pub fn tokenize(input: &str) -> ScanOutput {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let Some(ch) = input[pos..].chars().next() else {
            break;
        };

        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        let result = if ch.is_ascii_alphabetic() || ch == '_' {
            match_identifier(input, pos)
        } else if ch.is_ascii_digit() {
            match_number(input, pos)
        } else if ch == '.' {
            // Leading-dot decimals like `.015` win over the bare `.` symbol.
            let m = match_number(input, pos);
            if m.success { m } else { match_symbol(input, pos) }
        } else if ch == '/' {
            let m = match_comment(input, pos);
            if m.success { m } else { match_symbol(input, pos) }
        } else if ch == '"' {
            match_string(input, pos)
        } else {
            match_symbol(input, pos)
        };

        if result.success {
            if let Some(tok) = result.token {
                tokens.push(tok);
            }
            pos += result.span;
        } else {
            errors.extend(result.errors);
            // Guarantee forward progress: skip at least one full character.
            pos += result.span.max(ch.len_utf8());
        }
    }

    ScanOutput { tokens, errors }
}

/// Match an operator or punctuation lexeme at `start`.
///
/// Two-character symbols take precedence over one-character symbols sharing
/// the same first byte (maximal munch).
#[must_use]
pub fn match_symbol(content: &str, start: usize) -> MatchResult {
    let bytes = content.as_bytes();
    if start >= bytes.len() {
        return MatchResult::failed(0, ScanError::new(content, start, ScanErrorKind::EofReached));
    }
    if bytes.len() - start > 1 && token::PREFIXES.contains(&bytes[start]) {
        if let Some(lexeme) = content.get(start..start + 2) {
            if let Some(kind) = token::symbol_kind(lexeme) {
                let tok = Token::new(kind, lexeme.to_string(), start, start + 2);
                return MatchResult::matched(tok, 2);
            }
        }
    }
    if let Some(lexeme) = content.get(start..start + 1) {
        if let Some(kind) = token::symbol_kind(lexeme) {
            let tok = Token::new(kind, lexeme.to_string(), start, start + 1);
            return MatchResult::matched(tok, 1);
        }
    }
    MatchResult::failed(0, ScanError::new(content, start, ScanErrorKind::UnknownSymbol))
}

/// Match a line comment (`//` up to and including the newline) at `start`.
///
/// A missing `//` prefix is a non-match, not an error, so the driver can
/// fall back to the symbol matcher for a lone `/`.
#[must_use]
pub fn match_comment(content: &str, start: usize) -> MatchResult {
    let bytes = content.as_bytes();
    if bytes.get(start) == Some(&b'/') && bytes.get(start + 1) == Some(&b'/') {
        let mut i = start + 2;
        while i < bytes.len() && bytes[i] != b'\n' {
            i += 1;
        }
        if i < bytes.len() {
            // Consume the terminating newline too.
            i += 1;
        }
        return MatchResult::skipped(i - start);
    }
    MatchResult::no_match()
}

/// Match an identifier at `start`, reclassifying keywords.
#[must_use]
pub fn match_identifier(content: &str, start: usize) -> MatchResult {
    let bytes = content.as_bytes();
    if start >= bytes.len() {
        return MatchResult::failed(0, ScanError::new(content, start, ScanErrorKind::EofReached));
    }
    if !bytes[start].is_ascii_alphabetic() && bytes[start] != b'_' {
        return MatchResult::failed(
            0,
            ScanError::new(content, start, ScanErrorKind::BadIdentifierStart),
        );
    }
    let mut i = start;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
    }
    let lexeme = &content[start..i];
    let kind = token::keyword_kind(lexeme).unwrap_or(TokenKind::Identifier);
    let tok = Token::new(kind, lexeme.to_string(), start, i);
    MatchResult::matched(tok, i - start)
}

/// Match a number literal at `start`.
///
/// Grammar: `digits ('.' digits?)? exponent?` or `'.' digits exponent?`.
/// A second `.` ends the match (maximal munch leaves it for the next scan
/// iteration); a failed exponent sub-match consumes nothing and is not an
/// error at this level.
#[must_use]
pub fn match_number(content: &str, start: usize) -> MatchResult {
    let bytes = content.as_bytes();
    if start >= bytes.len() {
        return MatchResult::failed(0, ScanError::new(content, start, ScanErrorKind::EofReached));
    }
    if !bytes[start].is_ascii_digit() && bytes[start] != b'.' {
        return MatchResult::failed(
            0,
            ScanError::new(content, start, ScanErrorKind::BadNumberStart),
        );
    }

    let mut i = start;
    let mut has_dot = false;
    let mut has_digit = false;
    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_digit() {
            has_digit = true;
        } else if c == b'.' && !has_dot {
            has_dot = true;
        } else {
            break;
        }
        i += 1;
    }
    if !has_digit {
        // An isolated `.` is not a number; the driver falls back to the
        // symbol table.
        return MatchResult::failed(0, ScanError::new(content, i, ScanErrorKind::NoDigit));
    }

    let mut lexeme = content[start..i].to_string();
    let mut has_exp = false;
    if i < bytes.len() {
        let exp = match_exponent(content, i);
        if exp.success {
            if let Some(exp_tok) = exp.token {
                lexeme.push_str(&exp_tok.lexeme);
            }
            i += exp.span;
            has_exp = true;
        }
    }

    let literal = number_literal(&lexeme, has_dot || has_exp);
    let tok = Token::with_literal(TokenKind::Number, lexeme, start, i, literal);
    MatchResult::matched(tok, i - start)
}

/// Decode an accumulated number lexeme.
///
/// Integer lexemes too large for `i64` degrade to floats rather than
/// failing the match.
fn number_literal(lexeme: &str, is_float: bool) -> Literal {
    if !is_float {
        if let Ok(v) = lexeme.parse::<i64>() {
            return Literal::Int(v);
        }
    }
    Literal::Float(lexeme.parse().unwrap_or(f64::NAN))
}

/// Match an `[eE][+-]?digits` exponent suffix at `start`.
///
/// Used as a sub-match by [`match_number`] and standalone for testing; the
/// token's literal is the signed integer value of the digit run.
#[must_use]
pub fn match_exponent(content: &str, start: usize) -> MatchResult {
    let bytes = content.as_bytes();
    if start >= bytes.len() {
        return MatchResult::failed(0, ScanError::new(content, start, ScanErrorKind::EofReached));
    }
    if bytes[start] != b'e' && bytes[start] != b'E' {
        return MatchResult::failed(
            0,
            ScanError::new(content, start, ScanErrorKind::BadExponentStart),
        );
    }
    let mut i = start + 1;
    let mut sign: i64 = 1;
    if i < bytes.len() {
        if bytes[i] == b'-' {
            sign = -1;
            i += 1;
        } else if bytes[i] == b'+' {
            i += 1;
        }
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return MatchResult::failed(
            0,
            ScanError::new(content, i, ScanErrorKind::NoExponentValue),
        );
    }
    let magnitude = content[digits_start..i].parse::<i64>().unwrap_or(i64::MAX);
    let tok = Token::with_literal(
        TokenKind::Exponent,
        content[start..i].to_string(),
        start,
        i,
        Literal::Int(sign * magnitude),
    );
    MatchResult::matched(tok, i - start)
}

/// Match a quoted string literal at `start`, decoding escape sequences.
///
/// All errors found inside one string are accumulated, not just the first.
/// The returned token's lexeme is the raw consumed text (quotes included);
/// its literal is the decoded contents and is reliable only when no errors
/// occurred.
#[must_use]
pub fn match_string(content: &str, start: usize) -> MatchResult {
    let bytes = content.as_bytes();
    if start >= bytes.len() || bytes[start] != b'"' {
        return MatchResult::failed(
            0,
            ScanError::new(content, start, ScanErrorKind::MissingOpeningQuote),
        );
    }

    let mut decoded = String::new();
    let mut errors = Vec::new();
    let mut closed = false;
    let mut i = start + 1;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                if i + 1 >= bytes.len() {
                    errors.push(ScanError::new(content, i, ScanErrorKind::EofInEscape));
                    break;
                }
                match token::escape_char(bytes[i + 1]) {
                    Some(ch) => decoded.push(ch),
                    None => {
                        errors.push(ScanError::new(content, i, ScanErrorKind::UnknownEscape));
                    }
                }
                // Skip the backslash and the whole escaped character.
                let escaped_width = content[i + 1..].chars().next().map_or(1, char::len_utf8);
                i += 1 + escaped_width;
            }
            b'"' => {
                i += 1;
                closed = true;
                break;
            }
            _ => {
                let Some(ch) = content[i..].chars().next() else {
                    break;
                };
                decoded.push(ch);
                i += ch.len_utf8();
            }
        }
    }
    if !closed {
        errors.push(ScanError::new(content, i, ScanErrorKind::MissingClosingQuote));
    }

    let success = errors.is_empty();
    let literal = if success { decoded } else { String::new() };
    let tok = Token::with_literal(
        TokenKind::Str,
        content[start..i].to_string(),
        start,
        i,
        Literal::Str(literal),
    );
    MatchResult {
        success,
        token: Some(tok),
        span: i - start,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{KEYWORDS, SYMBOLS};

    fn sym(kind: TokenKind, lexeme: &str, start: usize) -> Token {
        Token::new(kind, lexeme.to_string(), start, start + lexeme.len())
    }

    fn num(lexeme: &str, literal: Literal) -> Token {
        Token::with_literal(TokenKind::Number, lexeme.to_string(), 0, lexeme.len(), literal)
    }

    // -----------------------------------------------------------
    // Symbol matcher.
    // -----------------------------------------------------------

    #[test]
    fn symbol_single_char() {
        let m = match_symbol("+ 5", 0);
        assert_eq!(m, MatchResult::matched(sym(TokenKind::Plus, "+", 0), 1));
        let m = match_symbol("+5", 0);
        assert_eq!(m, MatchResult::matched(sym(TokenKind::Plus, "+", 0), 1));
    }

    #[test]
    fn symbol_two_char_precedence() {
        let m = match_symbol("++5", 0);
        assert_eq!(m, MatchResult::matched(sym(TokenKind::Inc, "++", 0), 2));
        let m = match_symbol(" ++5", 1);
        assert_eq!(m.span, 2);
        assert_eq!(m.token.unwrap().kind, TokenKind::Inc);
    }

    #[test]
    fn symbol_two_char_fallback_to_one() {
        let m = match_symbol("+*5", 0);
        assert_eq!(m, MatchResult::matched(sym(TokenKind::Plus, "+", 0), 1));
    }

    #[test]
    fn symbol_unknown() {
        let m = match_symbol("@4g", 0);
        assert!(!m.success);
        assert_eq!(m.span, 0);
        assert_eq!(m.errors, vec![ScanError::new("@4g", 0, ScanErrorKind::UnknownSymbol)]);
    }

    #[test]
    fn symbol_table_sweep() {
        for &(lexeme, kind) in SYMBOLS {
            let content = format!("{lexeme} jibberish");
            let m = match_symbol(&content, 0);
            assert!(m.success, "failed on {lexeme}");
            assert_eq!(m.span, lexeme.len());
            let tok = m.token.unwrap();
            assert_eq!(tok.kind, kind);
            assert_eq!(tok.lexeme, lexeme);
        }
    }

    // -----------------------------------------------------------
    // Identifier matcher.
    // -----------------------------------------------------------

    #[test]
    fn identifier_stops_at_symbol() {
        let m = match_identifier("x=56", 0);
        assert_eq!(
            m,
            MatchResult::matched(sym(TokenKind::Identifier, "x", 0), 1)
        );
    }

    #[test]
    fn identifier_underscore_and_digits() {
        let m = match_identifier("_foo+0.5", 0);
        assert_eq!(m.span, 4);
        assert_eq!(m.token.unwrap().lexeme, "_foo");

        let m = match_identifier("_56ij_ = ", 0);
        assert_eq!(m.span, 6);
        assert_eq!(m.token.unwrap().lexeme, "_56ij_");
    }

    #[test]
    fn identifier_mid_buffer() {
        let m = match_identifier("for i in ", 6);
        let tok = m.token.unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.lexeme, "in");
        assert_eq!((tok.start, tok.end), (6, 8));
    }

    #[test]
    fn keyword_reclassification_sweep() {
        for &(kw, kind) in KEYWORDS {
            let content = format!("{kw} _ =");
            let m = match_identifier(&content, 0);
            assert!(m.success);
            assert_eq!(m.span, kw.len());
            let tok = m.token.unwrap();
            assert_eq!(tok.kind, kind, "keyword {kw} not reclassified");
            assert_eq!(tok.literal, None);
        }
    }

    #[test]
    fn identifier_bad_start_is_defensive_error() {
        let m = match_identifier("5x", 0);
        assert!(!m.success);
        assert_eq!(m.errors[0].kind, ScanErrorKind::BadIdentifierStart);
    }

    // -----------------------------------------------------------
    // Number and exponent matchers.
    // -----------------------------------------------------------

    #[test]
    fn number_plain_integer() {
        assert_eq!(
            match_number("12", 0),
            MatchResult::matched(num("12", Literal::Int(12)), 2)
        );
        assert_eq!(
            match_number("12  x = 5", 0),
            MatchResult::matched(num("12", Literal::Int(12)), 2)
        );
    }

    #[test]
    fn number_leading_zeros_decode_as_decimal_integer() {
        assert_eq!(
            match_number("001", 0),
            MatchResult::matched(num("001", Literal::Int(1)), 3)
        );
    }

    #[test]
    fn number_decimals() {
        assert_eq!(
            match_number("12.0014+", 0),
            MatchResult::matched(num("12.0014", Literal::Float(12.0014)), 7)
        );
        assert_eq!(
            match_number(".015()", 0),
            MatchResult::matched(num(".015", Literal::Float(0.015)), 4)
        );
        assert_eq!(
            match_number("000.01-", 0),
            MatchResult::matched(num("000.01", Literal::Float(0.01)), 6)
        );
    }

    #[test]
    fn number_with_exponent() {
        assert_eq!(
            match_number("1.2E6+", 0),
            MatchResult::matched(num("1.2E6", Literal::Float(1.2e6)), 5)
        );
        assert_eq!(
            match_number("11.e-2", 0),
            MatchResult::matched(num("11.e-2", Literal::Float(11e-2)), 6)
        );
    }

    #[test]
    fn number_stops_after_first_exponent() {
        // The trailing `e+` has no digits; the maximal valid prefix wins.
        assert_eq!(
            match_number("11.24e-5e+", 0),
            MatchResult::matched(num("11.24e-5", Literal::Float(11.24e-5)), 8)
        );
    }

    #[test]
    fn number_second_dot_ends_match() {
        assert_eq!(
            match_number(".12.45", 0),
            MatchResult::matched(num(".12", Literal::Float(0.12)), 3)
        );
    }

    #[test]
    fn number_mid_buffer() {
        let m = match_number("x = 5", 4);
        assert_eq!(m.span, 1);
        let tok = m.token.unwrap();
        assert_eq!(tok.lexeme, "5");
        assert_eq!(tok.literal, Some(Literal::Int(5)));
        assert_eq!((tok.start, tok.end), (4, 5));
    }

    #[test]
    fn number_lone_dot_fails_with_no_digit() {
        let m = match_number(". x", 0);
        assert!(!m.success);
        assert_eq!(m.span, 0);
        assert_eq!(m.errors[0].kind, ScanErrorKind::NoDigit);
    }

    #[test]
    fn exponent_forms() {
        let exp = |lexeme: &str, start: usize, value: i64| {
            Token::with_literal(
                TokenKind::Exponent,
                lexeme.to_string(),
                start,
                start + lexeme.len(),
                Literal::Int(value),
            )
        };
        assert_eq!(
            match_exponent("E4+", 0),
            MatchResult::matched(exp("E4", 0, 4), 2)
        );
        assert_eq!(
            match_exponent("1.2E4+", 3),
            MatchResult::matched(exp("E4", 3, 4), 2)
        );
        assert_eq!(
            match_exponent("E+4", 0),
            MatchResult::matched(exp("E+4", 0, 4), 3)
        );
        assert_eq!(
            match_exponent("e-4", 0),
            MatchResult::matched(exp("e-4", 0, -4), 3)
        );
        assert_eq!(
            match_exponent("e-145", 0),
            MatchResult::matched(exp("e-145", 0, -145), 5)
        );
        assert_eq!(
            match_exponent("E-14.5", 0),
            MatchResult::matched(exp("E-14", 0, -14), 4)
        );
    }

    #[test]
    fn exponent_failures() {
        assert_eq!(
            match_exponent("eeac", 0),
            MatchResult::failed(0, ScanError::new("eeac", 1, ScanErrorKind::NoExponentValue))
        );
        assert_eq!(
            match_exponent("x=5", 0),
            MatchResult::failed(0, ScanError::new("x=5", 0, ScanErrorKind::BadExponentStart))
        );
        assert_eq!(
            match_exponent("21  x = 5", 0),
            MatchResult::failed(
                0,
                ScanError::new("21  x = 5", 0, ScanErrorKind::BadExponentStart)
            )
        );
    }

    #[test]
    fn exponent_sign_without_digits() {
        let m = match_exponent("e+", 0);
        assert!(!m.success);
        assert_eq!(m.errors[0].kind, ScanErrorKind::NoExponentValue);
        assert_eq!(m.errors[0].pos, 2);
    }

    // -----------------------------------------------------------
    // String matcher.
    // -----------------------------------------------------------

    #[test]
    fn string_simple() {
        let m = match_string("\"hello world\" +", 0);
        assert!(m.success);
        assert_eq!(m.span, 13);
        let tok = m.token.unwrap();
        assert_eq!(tok.lexeme, "\"hello world\"");
        assert_eq!(tok.literal, Some(Literal::Str("hello world".to_string())));
    }

    #[test]
    fn string_empty() {
        let m = match_string("\"\"", 0);
        assert!(m.success);
        assert_eq!(m.span, 2);
        assert_eq!(
            m.token.unwrap().literal,
            Some(Literal::Str(String::new()))
        );
    }

    #[test]
    fn string_escapes_decode() {
        let m = match_string("\"a\\tb\\nc\\\"d\\\\e\"", 0);
        assert!(m.success);
        assert_eq!(
            m.token.unwrap().literal,
            Some(Literal::Str("a\tb\nc\"d\\e".to_string()))
        );
    }

    #[test]
    fn string_with_raw_control_chars() {
        let m = match_string("\"\t\nfoo \\\"bar\t\"", 0);
        assert!(m.success);
        assert_eq!(
            m.token.unwrap().literal,
            Some(Literal::Str("\t\nfoo \"bar\t".to_string()))
        );
    }

    #[test]
    fn string_unknown_escape_is_tolerated_but_reported() {
        let m = match_string("\"a\\qb\"", 0);
        assert!(!m.success);
        assert_eq!(m.span, 6);
        assert_eq!(m.errors.len(), 1);
        assert_eq!(m.errors[0].kind, ScanErrorKind::UnknownEscape);
        assert_eq!(m.errors[0].pos, 2);
        // Lexeme still covers the raw consumed text.
        let tok = m.token.unwrap();
        assert_eq!(tok.lexeme, "\"a\\qb\"");
        assert_eq!(tok.literal, Some(Literal::Str(String::new())));
    }

    #[test]
    fn string_unterminated() {
        let m = match_string("\"abc", 0);
        assert!(!m.success);
        assert_eq!(m.span, 4);
        assert_eq!(
            m.errors,
            vec![ScanError::new("\"abc", 4, ScanErrorKind::MissingClosingQuote)]
        );
    }

    #[test]
    fn string_accumulates_all_errors() {
        // One bad escape and no closing quote: both must be reported.
        let m = match_string("\"a\\q", 0);
        assert!(!m.success);
        let kinds: Vec<_> = m.errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ScanErrorKind::UnknownEscape, ScanErrorKind::MissingClosingQuote]
        );
    }

    #[test]
    fn string_backslash_at_eof() {
        let m = match_string("\"a\\", 0);
        assert!(!m.success);
        let kinds: Vec<_> = m.errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ScanErrorKind::EofInEscape, ScanErrorKind::MissingClosingQuote]
        );
    }

    #[test]
    fn string_missing_opening_quote_is_defensive_error() {
        let m = match_string("abc", 0);
        assert!(!m.success);
        assert_eq!(m.span, 0);
        assert_eq!(m.errors[0].kind, ScanErrorKind::MissingOpeningQuote);
    }

    #[test]
    fn string_non_ascii_content_passes_through() {
        let m = match_string("\"caf\u{e9} \u{2603}\"", 0);
        assert!(m.success);
        assert_eq!(
            m.token.unwrap().literal,
            Some(Literal::Str("caf\u{e9} \u{2603}".to_string()))
        );
    }

    // -----------------------------------------------------------
    // Comment matcher.
    // -----------------------------------------------------------

    #[test]
    fn comment_consumes_trailing_newline() {
        assert_eq!(
            match_comment("//some long comment\n", 0),
            MatchResult::skipped(20)
        );
    }

    #[test]
    fn comment_without_newline_runs_to_eof() {
        assert_eq!(match_comment("// ", 0), MatchResult::skipped(3));
        assert_eq!(match_comment("//", 0), MatchResult::skipped(2));
    }

    #[test]
    fn comment_single_slash_is_a_non_match() {
        assert_eq!(match_comment("/ 2", 0), MatchResult::no_match());
        assert!(match_comment("/ 2", 0).errors.is_empty());
    }

    // -----------------------------------------------------------
    // Driver.
    // -----------------------------------------------------------

    #[test]
    fn tokenize_empty_input() {
        let out = tokenize("");
        assert!(out.tokens.is_empty());
        assert!(out.errors.is_empty());
    }

    #[test]
    fn tokenize_statement() {
        let out = tokenize("var x = 5 + .5;");
        assert!(out.is_clean());
        let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn tokenize_elides_comments() {
        let out = tokenize("x // trailing\ny");
        assert!(out.is_clean());
        let lexemes: Vec<_> = out.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["x", "y"]);
    }

    #[test]
    fn tokenize_lone_slash_is_division() {
        let out = tokenize("a / b");
        assert!(out.is_clean());
        assert_eq!(out.tokens[1].kind, TokenKind::Slash);
    }

    #[test]
    fn tokenize_bare_dot_falls_back_to_symbol() {
        let out = tokenize("a . b");
        assert!(out.is_clean());
        assert_eq!(out.tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn tokenize_recovers_after_unknown_symbol() {
        let out = tokenize("a @ b");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].kind, ScanErrorKind::UnknownSymbol);
        assert_eq!(out.errors[0].pos, 2);
        let lexemes: Vec<_> = out.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "b"]);
    }

    #[test]
    fn tokenize_recovers_after_bad_string() {
        let out = tokenize("\"abc\nx");
        // The unterminated string consumes through the newline to EOF.
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].kind, ScanErrorKind::MissingClosingQuote);
        assert!(out.tokens.is_empty());
    }

    #[test]
    fn tokenize_skips_non_ascii_garbage_without_looping() {
        let out = tokenize("a \u{00a7} b");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].kind, ScanErrorKind::UnknownSymbol);
        let lexemes: Vec<_> = out.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "b"]);
    }

    #[test]
    fn tokenize_maximal_munch_chain() {
        let out = tokenize("i+++1");
        assert!(out.is_clean());
        let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Inc,
                TokenKind::Plus,
                TokenKind::Number,
            ]
        );
    }
}
