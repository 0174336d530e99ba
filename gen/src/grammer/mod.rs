pub mod flow;
pub mod lexer;
pub mod lookahead;
pub mod parser;
pub mod parsercore;
pub mod token;
