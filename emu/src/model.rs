use std::collections::VecDeque;

use ir::{Arena, Inst, Loc, Memory, NodeId, Program};

use crate::error::Error;

/// Machine state of a running program. `pc` is `None` once the program halts.
#[derive(Debug, Clone)]
pub struct State {
    pc: Option<NodeId>,
    memory: Memory,
    inputs: VecDeque<i32>,
    outputs: Vec<i32>,
}

// Memory access
impl State {
    pub fn get(&self, loc: Loc) -> i32 {
        self.memory.get(loc)
    }

    pub fn set(&mut self, loc: Loc, val: i32) {
        self.memory.set(loc, val);
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}

impl State {
    pub fn new(program: &Program) -> Self {
        State {
            pc: Some(program.root),
            memory: program.memory.clone(),
            inputs: program.inputs.iter().copied().collect(),
            outputs: Vec::new(),
        }
    }

    pub fn pc(&self) -> Option<NodeId> {
        self.pc
    }

    pub fn outputs(&self) -> &[i32] {
        &self.outputs
    }

    pub fn into_outputs(self) -> Vec<i32> {
        self.outputs
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_terminated(&self) -> bool {
        self.pc.is_none()
    }

    /// Execute the node at `pc` and move along the taken edge.
    /// Returns the handle of the executed node.
    pub fn exec(&mut self, arena: &Arena) -> Result<NodeId, Error> {
        let id = self.pc.ok_or(Error::Halted)?;
        let node = arena.get(id).ok_or(Error::Dangling(id))?;

        self.pc = match &node.inst {
            Inst::ASSIGN { dst, lhs, op, rhs } => {
                let a = self.get(*lhs);
                let val = match rhs {
                    Some(rhs) => op
                        .apply(a, self.get(*rhs))
                        .ok_or(Error::DivisionByZero(id))?,
                    None => a,
                };
                self.set(*dst, val);
                node.next
            }
            Inst::CJMP {
                lhs,
                relop,
                rhs,
                target,
            } => {
                if relop.test(self.get(*lhs), self.get(*rhs)) {
                    node.next
                } else {
                    Some(target.ok_or(Error::MissingTarget(id))?)
                }
            }
            Inst::JMP { target } => Some(target.ok_or(Error::MissingTarget(id))?),
            Inst::NOOP => node.next,
            Inst::IN { dst } => {
                let val = self.inputs.pop_front().ok_or(Error::InputExhausted(id))?;
                self.set(*dst, val);
                node.next
            }
            Inst::OUT { src } => {
                self.outputs.push(self.get(*src));
                node.next
            }
        };
        Ok(id)
    }
}
