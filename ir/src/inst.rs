use crate::memory::Symbols;
use crate::op::{ArithOp, RelOp};
use color_print::cformat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index into the flat memory image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Loc(pub usize);

/// Stable handle of a node in the [`crate::Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>4}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inst {
    /// dst = lhs [op rhs]
    ASSIGN {
        dst: Loc,
        lhs: Loc,
        op: ArithOp,
        rhs: Option<Loc>,
    },
    /// Falls through to `next` when `lhs relop rhs` holds, jumps to `target` otherwise.
    CJMP {
        lhs: Loc,
        relop: RelOp,
        rhs: Loc,
        target: Option<NodeId>,
    },
    JMP {
        target: Option<NodeId>,
    },
    NOOP,
    IN {
        dst: Loc,
    },
    OUT {
        src: Loc,
    },
}

impl Inst {
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Inst::CJMP { target, .. } | Inst::JMP { target } => *target,
            _ => None,
        }
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Inst::CJMP { .. } | Inst::JMP { .. })
    }

    pub fn cformat(&self, syms: &Symbols) -> String {
        let name = |loc: &Loc| syms.describe(*loc);
        let dest = |target: &Option<NodeId>| match target {
            Some(id) => id.to_string(),
            None => "????".to_string(),
        };
        match self {
            Inst::ASSIGN { dst, lhs, op, rhs } => match (op, rhs) {
                (ArithOp::NONE, _) | (_, None) => {
                    cformat!("<r>{:<6}</><b>{} = {}</>", "assign", name(dst), name(lhs))
                }
                (op, Some(rhs)) => cformat!(
                    "<r>{:<6}</><b>{} = {} {} {}</>",
                    "assign",
                    name(dst),
                    name(lhs),
                    op,
                    name(rhs)
                ),
            },
            Inst::CJMP {
                lhs,
                relop,
                rhs,
                target,
            } => cformat!(
                "<r>{:<6}</><b>{} {} {}</> else <y>{}</>",
                "cjmp",
                name(lhs),
                relop,
                name(rhs),
                dest(target)
            ),
            Inst::JMP { target } => cformat!("<r>{:<6}</><y>{}</>", "jmp", dest(target)),
            Inst::NOOP => cformat!("<r>{:<6}</>", "noop"),
            Inst::IN { dst } => cformat!("<r>{:<6}</><b>{}</>", "in", name(dst)),
            Inst::OUT { src } => cformat!("<r>{:<6}</><b>{}</>", "out", name(src)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub inst: Inst,
    pub next: Option<NodeId>,
}

impl Node {
    pub fn new(inst: Inst) -> Self {
        Node { inst, next: None }
    }

    /// Every edge leaving this node, `next` first.
    pub fn successors(&self) -> impl Iterator<Item = NodeId> {
        self.next.into_iter().chain(self.inst.target())
    }
}
