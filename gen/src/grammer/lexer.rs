use super::token::{Pos, Token, TokenKind};
use std::iter::Peekable;
use std::str::CharIndices;

pub struct Lexer<'a> {
    file: &'a str,
    code: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(file: &'a str, code: &'a str) -> Self {
        Self { file, code }
    }

    pub fn parse(self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        for (row, line) in self.code.lines().enumerate() {
            let lexer = LineLexer::new(line, self.file, row);
            tokens.extend(lexer.parse());
        }
        tokens
    }
}

struct LineLexer<'a> {
    iter: Peekable<CharIndices<'a>>,
    file: &'a str,
    row: usize,
}

impl<'a> LineLexer<'a> {
    fn new(line: &'a str, file: &'a str, row: usize) -> Self {
        Self {
            iter: line.char_indices().peekable(),
            file,
            row,
        }
    }
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    fn peek_nth(&self, n: usize) -> Option<(usize, char)> {
        self.iter.clone().nth(n)
    }
    fn consume(&mut self) -> Option<(usize, char)> {
        self.iter.next()
    }
}

// ----------------------------------------------------------------------------
// Parser
// ----------------------------------------------------------------------------

impl<'a> LineLexer<'a> {
    fn parse(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some((idx, ch0)) = self.peek_nth(0) {
            // 0. Skip whitespaces
            if ch0.is_whitespace() {
                self.consume();
                continue;
            }

            let pos = Pos {
                file: self.file,
                row: self.row,
                col: idx,
            };

            // 1. Double character token
            if let Some((_, ch1)) = self.peek_nth(1) {
                // Comment
                if ch0 == '/' && ch1 == '/' {
                    self.consume();
                    self.consume();
                    while self.iter.next_if(|(_, c)| c.is_whitespace()).is_some() {}
                    let comment = self.iter.map(|(_, ch)| ch).collect::<String>();
                    tokens.push(Token::new(TokenKind::Comment(comment), pos));
                    break;
                }

                if let Some(kind) = double_char_token(ch0, ch1) {
                    self.consume();
                    self.consume();
                    tokens.push(Token::new(kind, pos));
                    continue;
                }
            }

            // 2. Single character token
            if let Some(kind) = single_char_token(ch0) {
                self.consume();
                tokens.push(Token::new(kind, pos));
                continue;
            }

            // 3. Number literal
            if ch0.is_ascii_digit() {
                tokens.push(Token::new(self.parse_number(), pos));
                continue;
            }

            // 4. Identifier or keyword
            if ch0.is_ascii_alphabetic() || ch0 == '_' {
                tokens.push(Token::new(self.parse_string(), pos));
                continue;
            }

            // Error
            self.consume();
            tokens.push(Token::new(TokenKind::Error(format!("{ch0}")), pos));
        }
        tokens
    }

    fn parse_string(&mut self) -> TokenKind {
        let mut lexeme = String::new();
        while let Some((_, ch)) = self
            .iter
            .next_if(|(_, ch)| matches!(ch, '_' | '0'..='9' | 'a'..='z' | 'A'..='Z'))
        {
            lexeme.push(ch);
        }
        match keyword(&lexeme) {
            Some(kind) => kind,
            None => TokenKind::Ident(lexeme),
        }
    }

    fn parse_number(&mut self) -> TokenKind {
        let mut lexeme = String::new();
        while let Some((_, ch)) = self.iter.next_if(|(_, ch)| ch.is_ascii_digit()) {
            lexeme.push(ch);
        }
        match lexeme.parse::<i32>() {
            Ok(num) => TokenKind::Number(lexeme, num),
            Err(_) => TokenKind::Error(lexeme),
        }
    }
}

fn double_char_token(ch0: char, ch1: char) -> Option<TokenKind> {
    match (ch0, ch1) {
        ('!', '=') => Some(TokenKind::ExclEqual),
        ('<', '>') => Some(TokenKind::ExclEqual),
        _ => None,
    }
}

fn single_char_token(ch: char) -> Option<TokenKind> {
    match ch {
        '=' => Some(TokenKind::Equal),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        ':' => Some(TokenKind::Colon),
        ';' => Some(TokenKind::Semicolon),
        ',' => Some(TokenKind::Comma),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '{' => Some(TokenKind::LCurly),
        '}' => Some(TokenKind::RCurly),
        '<' => Some(TokenKind::LAngle),
        '>' => Some(TokenKind::RAngle),
        _ => None,
    }
}

fn keyword(s: &str) -> Option<TokenKind> {
    match s {
        "while" => Some(TokenKind::KwWhile),
        "if" => Some(TokenKind::KwIf),
        "switch" => Some(TokenKind::KwSwitch),
        "for" => Some(TokenKind::KwFor),
        "case" => Some(TokenKind::KwCase),
        "default" => Some(TokenKind::KwDefault),
        "input" => Some(TokenKind::KwInput),
        "output" => Some(TokenKind::KwOutput),
        _ => None,
    }
}
