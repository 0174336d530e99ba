use super::flow::Frag;
use super::lookahead::{self, More, RhsAlt, StmtAlt};
use super::parsercore::Parser;
use super::token::{Token, TokenKind::*};
use crate::error::Error;
use crate::expect;
use ir::{ArithOp, Inst, Loc, NodeId, Program, RelOp};

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    /// program := var_section body input_list END
    pub fn parse(mut self) -> Result<Program, Error> {
        self.parse_var_section()?;
        let body = self.parse_body()?;
        let inputs = self.parse_inputs()?;

        let end = self.arena.push(Inst::NOOP);
        self.arena.set_next(body.exit, end);

        let (symbols, memory) = self.alloc.finish();
        Ok(Program {
            arena: self.arena,
            root: body.entry,
            symbols,
            memory,
            inputs,
        })
    }
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    /// var_section := ID { ',' ID } ';'
    fn parse_var_section(&mut self) -> Result<(), Error> {
        loop {
            let name = self.parse_ident()?;
            self.alloc.resolve_ident(&name);
            match lookahead::id_list(self.peek_kind(1)) {
                Ok(More::Continue) => {
                    expect!(self, Comma)?;
                }
                Ok(More::Stop) => break,
                Err(k) => return Err(self.unexpected(k)),
            }
        }
        expect!(self, Semicolon)?;
        Ok(())
    }

    /// body := '{' stmt { stmt } '}'
    pub(crate) fn parse_body(&mut self) -> Result<Frag, Error> {
        expect!(self, LCurly)?;
        let list = self.parse_stmt_list()?;
        expect!(self, RCurly)?;
        Ok(list)
    }

    /// Statements are linked as they come: each exit to the next entry.
    fn parse_stmt_list(&mut self) -> Result<Frag, Error> {
        let first = self.parse_stmt()?;
        let mut exit = first.exit;
        loop {
            let (t1, t2) = self.peek2();
            match lookahead::stmt_list(t1, t2) {
                Ok(More::Continue) => {
                    let frag = self.parse_stmt()?;
                    self.arena.set_next(exit, frag.entry);
                    exit = frag.exit;
                }
                Ok(More::Stop) => break,
                Err(k) => return Err(self.unexpected(k)),
            }
        }
        Ok(Frag {
            entry: first.entry,
            exit,
        })
    }

    fn parse_stmt(&mut self) -> Result<Frag, Error> {
        let (t1, t2) = self.peek2();
        match lookahead::stmt(t1, t2) {
            Ok(StmtAlt::Assign) => self.parse_assign().map(Frag::single),
            Ok(StmtAlt::While) => self.parse_while(),
            Ok(StmtAlt::If) => self.parse_if(),
            Ok(StmtAlt::Switch) => self.parse_switch(),
            Ok(StmtAlt::For) => self.parse_for(),
            Ok(StmtAlt::Output) => self.parse_output().map(Frag::single),
            Ok(StmtAlt::Input) => self.parse_input().map(Frag::single),
            Err(k) => Err(self.unexpected(k)),
        }
    }

    /// assign := ID '=' ( primary | primary op primary ) ';'
    pub(crate) fn parse_assign(&mut self) -> Result<NodeId, Error> {
        let name = self.parse_ident()?;
        let dst = self.alloc.resolve_ident(&name);
        expect!(self, Equal)?;

        let (t1, t2) = self.peek2();
        let inst = match lookahead::rhs(t1, t2) {
            Ok(RhsAlt::Primary) => {
                let lhs = self.parse_primary()?;
                Inst::ASSIGN {
                    dst,
                    lhs,
                    op: ArithOp::NONE,
                    rhs: None,
                }
            }
            Ok(RhsAlt::Expr) => {
                let (lhs, op, rhs) = self.parse_expr()?;
                Inst::ASSIGN {
                    dst,
                    lhs,
                    op,
                    rhs: Some(rhs),
                }
            }
            Err(k) => return Err(self.unexpected(k)),
        };
        expect!(self, Semicolon)?;
        Ok(self.arena.push(inst))
    }

    /// output := 'output' primary ';'
    fn parse_output(&mut self) -> Result<NodeId, Error> {
        expect!(self, KwOutput)?;
        let src = self.parse_primary()?;
        expect!(self, Semicolon)?;
        Ok(self.arena.push(Inst::OUT { src }))
    }

    /// input := 'input' ID ';'
    fn parse_input(&mut self) -> Result<NodeId, Error> {
        expect!(self, KwInput)?;
        let name = self.parse_ident()?;
        let dst = self.alloc.resolve_ident(&name);
        expect!(self, Semicolon)?;
        Ok(self.arena.push(Inst::IN { dst }))
    }

    /// condition := primary relop primary
    ///
    /// Both edges of the returned CJMP are left open for the caller.
    pub(crate) fn parse_condition(&mut self) -> Result<NodeId, Error> {
        let lhs = self.parse_primary()?;
        let relop = self.parse_relop()?;
        let rhs = self.parse_primary()?;
        Ok(self.arena.push(Inst::CJMP {
            lhs,
            relop,
            rhs,
            target: None,
        }))
    }

    /// expr := primary op primary
    fn parse_expr(&mut self) -> Result<(Loc, ArithOp, Loc), Error> {
        let lhs = self.parse_primary()?;
        let op = self.parse_op()?;
        let rhs = self.parse_primary()?;
        Ok((lhs, op, rhs))
    }

    /// primary := ID | NUM
    fn parse_primary(&mut self) -> Result<Loc, Error> {
        match self.next() {
            Some(Token {
                kind: Ident(name), ..
            }) => Ok(self.alloc.resolve_ident(&name)),
            Some(Token {
                kind: Number(_, value),
                ..
            }) => Ok(self.alloc.resolve_literal(value)),
            Some(token) => Err(Error::UnexpectedToken(token.into())),
            None => Err(Error::UnexpectedEOF),
        }
    }

    /// op := '+' | '-' | '*' | '/'
    fn parse_op(&mut self) -> Result<ArithOp, Error> {
        let token = self.next().ok_or(Error::UnexpectedEOF)?;
        match token.kind {
            Plus => Ok(ArithOp::PLUS),
            Minus => Ok(ArithOp::MINUS),
            Star => Ok(ArithOp::MULT),
            Slash => Ok(ArithOp::DIV),
            _ => Err(Error::UnexpectedToken(token.into())),
        }
    }

    /// relop := '>' | '<' | '!='
    fn parse_relop(&mut self) -> Result<RelOp, Error> {
        let token = self.next().ok_or(Error::UnexpectedEOF)?;
        match token.kind {
            RAngle => Ok(RelOp::GREATER),
            LAngle => Ok(RelOp::LESS),
            ExclEqual => Ok(RelOp::NOTEQUAL),
            _ => Err(Error::UnexpectedToken(token.into())),
        }
    }

    /// input_list := { NUM }
    fn parse_inputs(&mut self) -> Result<Vec<i32>, Error> {
        let mut inputs = Vec::new();
        loop {
            match lookahead::num_list(self.peek_kind(1)) {
                Ok(More::Continue) => inputs.push(self.parse_number()?),
                Ok(More::Stop) => return Ok(inputs),
                Err(k) => return Err(self.unexpected(k)),
            }
        }
    }

    pub(crate) fn parse_ident(&mut self) -> Result<String, Error> {
        match self.next() {
            Some(Token {
                kind: Ident(name), ..
            }) => Ok(name),
            Some(token) => Err(Error::UnexpectedToken(token.into())),
            None => Err(Error::UnexpectedEOF),
        }
    }

    pub(crate) fn parse_number(&mut self) -> Result<i32, Error> {
        match self.next() {
            Some(Token {
                kind: Number(_, value),
                ..
            }) => Ok(value),
            Some(token) => Err(Error::UnexpectedToken(token.into())),
            None => Err(Error::UnexpectedEOF),
        }
    }
}
