//! Control-flow statements.
//!
//! A CJMP continues along `next` when its condition holds and jumps to
//! `target` when it does not. Every builder returns the entry and the exit
//! of the fragment it wired, the exit always being a node whose `next` is
//! still open.

use super::lookahead::{self, More};
use super::parsercore::Parser;
use super::token::{Token, TokenKind::*};
use crate::error::Error;
use crate::{check, expect};
use ir::{Inst, Loc, NodeId, RelOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frag {
    pub entry: NodeId,
    pub exit: NodeId,
}

impl Frag {
    pub fn single(id: NodeId) -> Self {
        Frag { entry: id, exit: id }
    }
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    /// while := 'while' condition body
    pub(crate) fn parse_while(&mut self) -> Result<Frag, Error> {
        expect!(self, KwWhile)?;
        let cond = self.parse_condition()?;
        let body = self.parse_body()?;
        Ok(self.close_loop(cond, body))
    }

    /// for := 'for' '(' assign condition ';' assign ')' body
    ///
    /// Same shape as `init; while condition { body; step; }`.
    pub(crate) fn parse_for(&mut self) -> Result<Frag, Error> {
        expect!(self, KwFor)?;
        expect!(self, LParen)?;
        let init = self.parse_assign()?;
        let cond = self.parse_condition()?;
        expect!(self, Semicolon)?;
        let step = self.parse_assign()?;
        expect!(self, RParen)?;
        let body = self.parse_body()?;

        self.arena.set_next(body.exit, step);
        let body = Frag {
            entry: body.entry,
            exit: step,
        };
        let lp = self.close_loop(cond, body);
        self.arena.set_next(init, cond);
        Ok(Frag {
            entry: init,
            exit: lp.exit,
        })
    }

    /// cond -> body -> jmp(cond), cond -else-> end
    fn close_loop(&mut self, cond: NodeId, body: Frag) -> Frag {
        let jmp = self.arena.push(Inst::JMP { target: Some(cond) });
        let end = self.arena.push(Inst::NOOP);
        self.arena.set_next(cond, body.entry);
        self.arena.set_next(body.exit, jmp);
        self.arena.set_next(jmp, end);
        self.arena.set_target(cond, end);
        Frag {
            entry: cond,
            exit: end,
        }
    }

    /// if := 'if' condition body
    pub(crate) fn parse_if(&mut self) -> Result<Frag, Error> {
        expect!(self, KwIf)?;
        let cond = self.parse_condition()?;
        let body = self.parse_body()?;
        let end = self.arena.push(Inst::NOOP);
        self.arena.set_next(cond, body.entry);
        self.arena.set_next(body.exit, end);
        self.arena.set_target(cond, end);
        Ok(Frag {
            entry: cond,
            exit: end,
        })
    }

    /// switch := 'switch' ID '{' case { case } [ default ] '}'
    ///
    /// Each case tests `var != literal`: a mismatch falls through to the next
    /// test, a match jumps into the case body. All bodies meet at one NOOP.
    pub(crate) fn parse_switch(&mut self) -> Result<Frag, Error> {
        expect!(self, KwSwitch)?;
        let name = self.parse_ident()?;
        let var = self.alloc.resolve_ident(&name);
        expect!(self, LCurly)?;

        let mut cases = vec![self.parse_case(var)?];
        loop {
            match lookahead::case_list(self.peek_kind(1)) {
                Ok(More::Continue) => cases.push(self.parse_case(var)?),
                Ok(More::Stop) => break,
                Err(k) => return Err(self.unexpected(k)),
            }
        }
        let default = if check!(self, KwDefault) {
            Some(self.parse_default()?)
        } else {
            None
        };
        expect!(self, RCurly)?;

        let end = self.arena.push(Inst::NOOP);
        for (test, body) in &cases {
            self.arena.set_target(*test, body.entry);
            self.arena.set_next(body.exit, end);
        }
        for pair in cases.windows(2) {
            self.arena.set_next(pair[0].0, pair[1].0);
        }
        let (last, _) = cases[cases.len() - 1];
        match default {
            Some((jmp, body)) => {
                self.arena.set_next(last, jmp);
                self.arena.set_next(jmp, end);
                self.arena.set_next(body.exit, end);
            }
            None => self.arena.set_next(last, end),
        }

        Ok(Frag {
            entry: cases[0].0,
            exit: end,
        })
    }

    /// case := 'case' NUM ':' body
    fn parse_case(&mut self, var: Loc) -> Result<(NodeId, Frag), Error> {
        expect!(self, KwCase)?;
        let value = self.parse_number()?;
        let rhs = self.alloc.resolve_literal(value);
        expect!(self, Colon)?;
        let test = self.arena.push(Inst::CJMP {
            lhs: var,
            relop: RelOp::NOTEQUAL,
            rhs,
            target: None,
        });
        let body = self.parse_body()?;
        Ok((test, body))
    }

    /// default := 'default' ':' body
    fn parse_default(&mut self) -> Result<(NodeId, Frag), Error> {
        expect!(self, KwDefault)?;
        expect!(self, Colon)?;
        let jmp = self.arena.push(Inst::JMP { target: None });
        let body = self.parse_body()?;
        self.arena.set_target(jmp, body.entry);
        Ok((jmp, body))
    }
}
