mod alloc;
mod error;
mod grammer;
mod util;

pub use alloc::Allocator;
pub use error::{Error, TokenInfo};
pub use grammer::flow::Frag;
pub use grammer::lexer::Lexer;
pub use grammer::lookahead;
pub use grammer::parsercore::Parser;
pub use grammer::token::{Pos, Token, TokenKind};
pub use util::maps::SymbolMap;

/// Lex and parse `code` into a program
pub fn parse(file: &str, code: &str) -> Result<ir::Program, Error> {
    let tokens = Lexer::new(file, code).parse();
    Parser::new(tokens.into_iter()).parse()
}
