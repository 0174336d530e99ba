//! Lookahead tables.
//!
//! Every decision point of the grammar is a pure function from the kinds of
//! the next one or two tokens to the alternative to take. `Err(k)` names the
//! 1-indexed token that matches no alternative.

use super::token::TokenKind::{self, *};

pub type Pick<T> = Result<T, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StmtAlt {
    Assign,
    While,
    If,
    Switch,
    For,
    Output,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhsAlt {
    /// ID '=' primary ';'
    Primary,
    /// ID '=' primary op primary ';'
    Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum More {
    Continue,
    Stop,
}

fn is_primary(kind: Option<&TokenKind>) -> bool {
    matches!(kind, Some(Ident(_) | Number(..)))
}

fn is_op(kind: Option<&TokenKind>) -> bool {
    matches!(kind, Some(Plus | Minus | Star | Slash))
}

/// stmt := assign | while | if | switch | for | output | input
pub fn stmt(t1: Option<&TokenKind>, t2: Option<&TokenKind>) -> Pick<StmtAlt> {
    match (t1, t2) {
        (Some(Ident(_)), Some(Equal)) => Ok(StmtAlt::Assign),
        (Some(Ident(_)), _) => Err(2),
        (Some(KwWhile), _) => Ok(StmtAlt::While),
        (Some(KwIf), _) => Ok(StmtAlt::If),
        (Some(KwSwitch), _) => Ok(StmtAlt::Switch),
        (Some(KwFor), _) => Ok(StmtAlt::For),
        (Some(KwOutput), _) => Ok(StmtAlt::Output),
        (Some(KwInput), _) => Ok(StmtAlt::Input),
        _ => Err(1),
    }
}

/// Right hand side of an assignment, looked up right after '='
pub fn rhs(t1: Option<&TokenKind>, t2: Option<&TokenKind>) -> Pick<RhsAlt> {
    if !is_primary(t1) {
        return Err(1);
    }
    match t2 {
        Some(Semicolon) => Ok(RhsAlt::Primary),
        _ if is_op(t2) => Ok(RhsAlt::Expr),
        _ => Err(2),
    }
}

/// After an identifier of the variable section
pub fn id_list(t1: Option<&TokenKind>) -> Pick<More> {
    match t1 {
        Some(Comma) => Ok(More::Continue),
        Some(Semicolon) => Ok(More::Stop),
        _ => Err(1),
    }
}

/// After a statement inside a body
pub fn stmt_list(t1: Option<&TokenKind>, t2: Option<&TokenKind>) -> Pick<More> {
    match t1 {
        Some(RCurly) => Ok(More::Stop),
        _ => stmt(t1, t2).map(|_| More::Continue),
    }
}

/// After a case of a switch
pub fn case_list(t1: Option<&TokenKind>) -> Pick<More> {
    match t1 {
        Some(KwCase) => Ok(More::Continue),
        Some(KwDefault | RCurly) => Ok(More::Stop),
        _ => Err(1),
    }
}

/// Trailing input literals run until end of input
pub fn num_list(t1: Option<&TokenKind>) -> Pick<More> {
    match t1 {
        Some(Number(..)) => Ok(More::Continue),
        None => Ok(More::Stop),
        _ => Err(1),
    }
}
