#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub pos: Pos<'a>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, pos: Pos<'a>) -> Self {
        Token { kind, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Double character tokens
    ExclEqual, // '!=' or '<>'

    // Single character tokens
    Equal,     // '='
    Plus,      // '+'
    Minus,     // '-'
    Star,      // '*'
    Slash,     // '/'
    Colon,     // ':'
    Semicolon, // ';'
    Comma,     // ','
    LParen,    // '('
    RParen,    // ')'
    LCurly,    // '{'
    RCurly,    // '}'
    LAngle,    // '<'
    RAngle,    // '>'

    // Keywords
    KwWhile,   // "while"
    KwIf,      // "if"
    KwSwitch,  // "switch"
    KwFor,     // "for"
    KwCase,    // "case"
    KwDefault, // "default"
    KwInput,   // "input"
    KwOutput,  // "output"

    // Identifier
    Ident(String),

    // Literals
    Number(String, i32),

    // Special
    Comment(String),
    Error(String),
}

/// `row` is the 0-based line, `col` the 0-based character offset within it
#[derive(Debug, Clone, PartialEq)]
pub struct Pos<'a> {
    pub file: &'a str,
    pub row: usize,
    pub col: usize,
}
