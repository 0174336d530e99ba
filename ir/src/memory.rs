use crate::inst::Loc;
use bimap::BiMap;
use serde::{Deserialize, Serialize};

/// Flat memory image. Variables and constants live side by side,
/// the next free location is always `len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory(Vec<i32>);

impl Memory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a cell holding `init` and return its location
    pub fn alloc(&mut self, init: i32) -> Loc {
        self.0.push(init);
        Loc(self.0.len() - 1)
    }

    pub fn get(&self, loc: Loc) -> i32 {
        self.0[loc.0]
    }

    pub fn set(&mut self, loc: Loc, val: i32) {
        self.0[loc.0] = val;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[i32] {
        &self.0
    }
}

/// Name and literal tables of one program
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    pub vars: BiMap<String, Loc>,
    pub consts: BiMap<i32, Loc>,
}

impl Symbols {
    pub fn var(&self, name: &str) -> Option<Loc> {
        self.vars.get_by_left(name).copied()
    }

    pub fn konst(&self, value: i32) -> Option<Loc> {
        self.consts.get_by_left(&value).copied()
    }

    /// Source-level spelling of a location: its variable name, its literal, or `@n`
    pub fn describe(&self, loc: Loc) -> String {
        if let Some(name) = self.vars.get_by_right(&loc) {
            name.clone()
        } else if let Some(value) = self.consts.get_by_right(&loc) {
            value.to_string()
        } else {
            loc.to_string()
        }
    }
}
