use color_print::cprintln;
use ir::{Inst, NodeId, Program};

use super::Hook;
use crate::model::State;

/// Echoes every value the program outputs
pub struct Console {
    style: bool,
}

impl Console {
    pub fn new(style: bool) -> Self {
        Console { style }
    }
}

impl Hook for Console {
    fn init(&mut self, program: &Program, state: State) -> State {
        println!(" * Console: {} inputs", program.inputs.len());
        state
    }

    fn exec(&mut self, _time: u64, id: NodeId, program: &Program, state: State) -> State {
        if let Inst::OUT { .. } = program.arena[id].inst {
            if let Some(val) = state.outputs().last() {
                match self.style {
                    true => cprintln!(" > <r,s>{}</>", val),
                    false => println!("{}", val),
                }
            }
        }
        state
    }
}
