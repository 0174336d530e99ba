use ir::{Loc, NodeId, Program};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use crate::error::Error;
use crate::model::State;

use super::Hook;

/// Prints variables when selected nodes execute. The config file maps
/// node handles to variable names:
///
/// ```yaml
/// 3: [i, sum]
/// 7: [i]
/// ```
#[derive(Debug)]
pub struct Dump {
    file: Option<String>,
    all: bool,
    list: List,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct List(pub HashMap<NodeId, Vec<String>>);

impl Dump {
    pub fn arg(file: Option<String>, all: bool) -> Result<Self, Error> {
        let list = match &file {
            Some(fname) => {
                let reader = BufReader::new(File::open(fname)?);
                serde_yaml::from_reader(reader)?
            }
            None => List::default(),
        };
        Ok(Self { file, all, list })
    }

    pub fn from_list(list: List, all: bool) -> Self {
        Self {
            file: None,
            all,
            list,
        }
    }

    fn get(&self, id: NodeId) -> Option<&Vec<String>> {
        self.list.0.get(&id)
    }
}

impl Hook for Dump {
    fn init(&mut self, program: &Program, state: State) -> State {
        if self.all {
            println!(" * Dump all");
        }
        if let Some(fname) = &self.file {
            println!(" * Dump[{}] {:?}", self.list.0.len(), fname);
        }
        for (id, names) in &self.list.0 {
            for name in names {
                if program.symbols.var(name).is_none() {
                    println!(" ! Dump[{}] unknown variable {}", id, name);
                }
            }
        }
        state
    }

    fn exec(&mut self, _time: u64, id: NodeId, program: &Program, state: State) -> State {
        if let Some(names) = self.get(id) {
            self.print_vars(program, &state, names);
        } else if self.all {
            self.print_memory(program, &state);
        }
        state
    }
}

impl Dump {
    fn print_vars(&self, program: &Program, state: &State, names: &[String]) {
        println!(" +---------------------------------------------+");
        for name in names {
            match program.symbols.var(name) {
                Some(loc) => println!(" | {:>8} : {:<12} = {:<18} |", loc.to_string(), name, state.get(loc)),
                None => println!(" | {:>8} : {:<12} = {:<18} |", "?", name, "?"),
            }
        }
        println!(" +---------------------------------------------+");
    }

    fn print_memory(&self, program: &Program, state: &State) {
        println!(" +---------------------------------------------+");
        for (idx, val) in state.memory().cells().iter().enumerate() {
            let loc = Loc(idx);
            let name = program.symbols.describe(loc);
            println!(" | {:>8} : {:<12} = {:<18} |", loc.to_string(), name, val);
        }
        println!(" +---------------------------------------------+");
    }
}
