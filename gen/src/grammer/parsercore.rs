use super::token::{Token, TokenKind};
use crate::alloc::Allocator;
use crate::error::Error;
use ir::Arena;
use std::collections::VecDeque;

/// One parse session: the token source plus the arena and allocator
/// the statements are built into.
pub struct Parser<'a, I: Iterator<Item = Token<'a>>> {
    tokens: I,
    window: VecDeque<Token<'a>>,
    pub(crate) arena: Arena,
    pub(crate) alloc: Allocator,
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens,
            window: VecDeque::new(),
            arena: Arena::new(),
            alloc: Allocator::new(),
        }
    }
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    /// Pull tokens until `k` are buffered, skipping comments
    fn fill(&mut self, k: usize) {
        while self.window.len() < k {
            match self.tokens.next() {
                Some(Token {
                    kind: TokenKind::Comment(_),
                    ..
                }) => continue,
                Some(token) => self.window.push_back(token),
                None => break,
            }
        }
    }

    /// Peek : Watch the k-th next token (1-indexed) without consuming it
    pub fn peek(&mut self, k: usize) -> Option<&Token<'a>> {
        self.fill(k);
        self.window.get(k.checked_sub(1)?)
    }

    pub fn peek_kind(&mut self, k: usize) -> Option<&TokenKind> {
        self.peek(k).map(|token| &token.kind)
    }

    /// Kinds of the next two tokens
    pub fn peek2(&mut self) -> (Option<&TokenKind>, Option<&TokenKind>) {
        self.fill(2);
        (
            self.window.front().map(|token| &token.kind),
            self.window.get(1).map(|token| &token.kind),
        )
    }

    /// Next : Consume next token and return it
    pub fn next(&mut self) -> Option<Token<'a>> {
        self.fill(1);
        self.window.pop_front()
    }

    /// Peek and check next token is match with condition
    pub fn check_if<F: Fn(&Token) -> bool>(&mut self, cond: F) -> bool {
        self.peek(1).is_some_and(|token| cond(token))
    }

    /// Next token must be match with condition
    pub fn expect_tobe<F: Fn(&Token) -> bool>(&mut self, cond: F) -> Result<Token<'a>, Error> {
        match self.next() {
            Some(token) if cond(&token) => Ok(token),
            Some(token) => Err(Error::UnexpectedToken(token.into())),
            None => Err(Error::UnexpectedEOF),
        }
    }

    /// Syntax error pointing at the k-th next token
    pub fn unexpected(&mut self, k: usize) -> Error {
        match self.peek(k) {
            Some(token) => Error::UnexpectedToken(token.into()),
            None => Error::UnexpectedEOF,
        }
    }
}

#[macro_export]
macro_rules! check {
    ($parser:expr, $kind:pat) => {
        $parser.check_if(|token| matches!(&token.kind, $kind))
    };
}

#[macro_export]
macro_rules! expect {
    ($parser:expr, $kind:pat) => {
        $parser.expect_tobe(|token| matches!(&token.kind, $kind))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammer::lexer::Lexer;

    #[test]
    fn peek_does_not_consume() {
        let tokens = Lexer::new("t", "a = 1 ;").parse();
        let mut parser = Parser::new(tokens.into_iter());
        assert_eq!(parser.peek_kind(3), Some(&TokenKind::Number("1".into(), 1)));
        assert_eq!(parser.peek_kind(1), Some(&TokenKind::Ident("a".into())));
        assert_eq!(parser.peek_kind(0), None);
        assert_eq!(parser.peek_kind(5), None);
        assert_eq!(parser.next().map(|t| t.kind), Some(TokenKind::Ident("a".into())));
        assert_eq!(parser.peek2(), (Some(&TokenKind::Equal), Some(&TokenKind::Number("1".into(), 1))));
    }

    #[test]
    fn comments_are_skipped() {
        let tokens = Lexer::new("t", "// head\nx // tail\n;").parse();
        let mut parser = Parser::new(tokens.into_iter());
        assert!(check!(parser, TokenKind::Ident(_)));
        assert!(expect!(parser, TokenKind::Ident(_)).is_ok());
        assert!(expect!(parser, TokenKind::Semicolon).is_ok());
        assert!(parser.next().is_none());
    }

    #[test]
    fn expect_reports_token() {
        let tokens = Lexer::new("t", "}").parse();
        let mut parser = Parser::new(tokens.into_iter());
        match expect!(parser, TokenKind::LCurly) {
            Err(Error::UnexpectedToken(info)) => assert_eq!(info.kind, TokenKind::RCurly),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(expect!(parser, TokenKind::LCurly), Err(Error::UnexpectedEOF)));
    }
}
