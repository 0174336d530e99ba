use crate::grammer::token::{Token, TokenKind};
use color_print::cprintln;
use std::fmt;
use thiserror::Error;

// Token information without lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    pub kind: TokenKind,
    pub file: String,
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} at {}:{}:{}",
            self.kind,
            self.file,
            self.row + 1,
            self.col + 1
        )
    }
}

impl<'a> From<Token<'a>> for TokenInfo {
    fn from(token: Token<'a>) -> Self {
        TokenInfo {
            kind: token.kind,
            file: token.pos.file.to_string(),
            row: token.pos.row,
            col: token.pos.col,
        }
    }
}

impl<'a> From<&Token<'a>> for TokenInfo {
    fn from(token: &Token<'a>) -> Self {
        TokenInfo {
            kind: token.kind.clone(),
            file: token.pos.file.to_string(),
            row: token.pos.row,
            col: token.pos.col,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Syntax errors
    #[error("Syntax Error: unexpected end of file")]
    UnexpectedEOF,

    #[error("Syntax Error: unexpected token {0}")]
    UnexpectedToken(TokenInfo),
}

impl Error {
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::UnexpectedEOF | Error::UnexpectedToken(_))
    }

    /// Print error with the offending source line
    pub fn print_diag(&self, file: &str, code: &str) {
        cprintln!("<red,bold>error</>: {}", self);

        let (row, col) = match self {
            Error::UnexpectedToken(info) => (info.row, info.col),
            Error::UnexpectedEOF => {
                let row = code.lines().count().saturating_sub(1);
                let col = code.lines().last().map(|l| l.len()).unwrap_or(0);
                (row, col)
            }
            _ => return,
        };

        let line_num = row + 1;
        let line_content = code.lines().nth(row).unwrap_or("");
        cprintln!("     <blue>--></> <underline>{}:{}:{}</>", file, line_num, col + 1);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</> {}<red,bold>^</>", " ".repeat(col));
    }
}
