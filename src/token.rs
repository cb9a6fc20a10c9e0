use std::fmt;

/// Token kinds produced by the scanner.
///
/// One variant per symbol, keyword, and literal kind; the set is closed at
/// compile time so dispatch and equality stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Symbols.
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `+`
    Plus,
    /// `++`
    Inc,
    /// `+=`
    PlusEq,
    /// `-`
    Minus,
    /// `--`
    Dec,
    /// `-=`
    MinusEq,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `!=`
    NotEq,
    /// `!`
    Bang,
    // Keywords.
    And,
    Or,
    Not,
    Xor,
    If,
    Else,
    While,
    For,
    Def,
    Var,
    Nil,
    True,
    False,
    // Literals and names.
    Number,
    Str,
    Identifier,
    /// Standalone `[eE][+-]?digits` suffix, produced by the exponent matcher.
    Exponent,
}

impl TokenKind {
    /// Catalog name of the kind, used for token echo.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LCurly => "LCURLY",
            Self::RCurly => "RCURLY",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Colon => "COLON",
            Self::Dot => "DOT",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Plus => "PLUS",
            Self::Inc => "INC",
            Self::PlusEq => "PLUSEQ",
            Self::Minus => "MINUS",
            Self::Dec => "DEC",
            Self::MinusEq => "MINEQ",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::Eq => "EQ",
            Self::EqEq => "DEQ",
            Self::Lt => "LT",
            Self::LtEq => "LTEQ",
            Self::Gt => "GT",
            Self::GtEq => "GTEQ",
            Self::NotEq => "NEQ",
            Self::Bang => "BANG",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Xor => "XOR",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Def => "DEF",
            Self::Var => "VAR",
            Self::Nil => "NIL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Number => "NUMBER",
            Self::Str => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::Exponent => "EXPONENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operator and punctuation lexemes, two-character forms included.
///
/// Immutable lexeme-to-kind mapping built once at compile time; the symbol
/// matcher consults it for both the two- and one-character lookup.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LCurly),
    ("}", TokenKind::RCurly),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    (":", TokenKind::Colon),
    (".", TokenKind::Dot),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    ("+", TokenKind::Plus),
    ("++", TokenKind::Inc),
    ("+=", TokenKind::PlusEq),
    ("-", TokenKind::Minus),
    ("--", TokenKind::Dec),
    ("-=", TokenKind::MinusEq),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("=", TokenKind::Eq),
    ("==", TokenKind::EqEq),
    ("<", TokenKind::Lt),
    ("<=", TokenKind::LtEq),
    (">", TokenKind::Gt),
    (">=", TokenKind::GtEq),
    ("!=", TokenKind::NotEq),
    ("!", TokenKind::Bang),
];

/// Reserved words and the kinds identifiers reclassify to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("xor", TokenKind::Xor),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("def", TokenKind::Def),
    ("var", TokenKind::Var),
    ("nil", TokenKind::Nil),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

/// First bytes shared by a one-character and a two-character symbol.
///
/// The symbol matcher attempts the two-character lookup only when the lead
/// byte is in this set.
pub const PREFIXES: &[u8] = b"+-=<>!";

/// Recognized string escape characters and what they decode to.
pub const ESCAPES: &[(u8, char)] = &[
    (b'a', '\x07'),
    (b'b', '\x08'),
    (b'f', '\x0C'),
    (b'n', '\n'),
    (b'r', '\r'),
    (b't', '\t'),
    (b'v', '\x0B'),
    (b'\\', '\\'),
    (b'\'', '\''),
    (b'"', '"'),
];

/// Look up a symbol lexeme in [`SYMBOLS`].
#[must_use]
pub fn symbol_kind(lexeme: &str) -> Option<TokenKind> {
    SYMBOLS
        .iter()
        .find(|(s, _)| *s == lexeme)
        .map(|&(_, kind)| kind)
}

/// Look up an identifier in [`KEYWORDS`].
#[must_use]
pub fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(k, _)| *k == lexeme)
        .map(|&(_, kind)| kind)
}

/// Decode a single escape character, if it is a recognized one.
#[must_use]
pub fn escape_char(byte: u8) -> Option<char> {
    ESCAPES
        .iter()
        .find(|&&(b, _)| b == byte)
        .map(|&(_, ch)| ch)
}

/// Decoded semantic value of a literal token, distinct from its lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer number (no dot, no exponent in the lexeme).
    Int(i64),
    /// Decimal number (dot or exponent present).
    Float(f64),
    /// Unescaped string contents.
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// A single token: kind, raw lexeme, byte offsets, and optional decoded
/// literal.
///
/// `lexeme` is the exact source substring before escape decoding or numeric
/// parsing; `literal` is the decoded value, present only for number, string,
/// and exponent tokens.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Byte offset of the first consumed character.
    pub start: usize,
    /// Byte offset one past the last consumed character.
    pub end: usize,
    pub literal: Option<Literal>,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: String, start: usize, end: usize) -> Self {
        Self {
            kind,
            lexeme,
            start,
            end,
            literal: None,
        }
    }

    #[must_use]
    pub const fn with_literal(
        kind: TokenKind,
        lexeme: String,
        start: usize,
        end: usize,
        literal: Literal,
    ) -> Self {
        Self {
            kind,
            lexeme,
            start,
            end,
            literal: Some(literal),
        }
    }
}

/// Offsets are positional metadata, not identity: two tokens are equal iff
/// `kind`, `lexeme`, and `literal` all compare equal.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme && self.literal == other.literal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{}({literal})", self.kind),
            None => write!(f, "{}({})", self.kind, self.lexeme),
        }
    }
}
