use color_print::cprintln;
use ir::{NodeId, Program};

use super::Hook;
use crate::model::State;

pub struct Trace {
    enabled: bool,
}

impl Trace {
    pub fn arg(enabled: bool) -> Self {
        Trace { enabled }
    }
}

impl Hook for Trace {
    fn init(&mut self, _program: &Program, state: State) -> State {
        if self.enabled {
            println!(" * Trace");
        }
        state
    }

    fn exec(&mut self, time: u64, id: NodeId, program: &Program, state: State) -> State {
        if self.enabled {
            let next = match state.pc() {
                Some(pc) => pc.to_string(),
                None => "halt".to_string(),
            };
            cprintln!(
                "[{:0>4}] {} {:<40} <g>-> {}</>",
                time,
                id,
                program.arena[id].inst.cformat(&program.symbols),
                next
            );
        }
        state
    }
}
