pub mod console;
pub mod dump;
pub mod trace;

use ir::{NodeId, Program};

use crate::model::State;

/// Side effects run around the main loop. `exec` sees the node just executed.
pub trait Hook {
    fn init(&mut self, program: &Program, state: State) -> State;
    fn exec(&mut self, time: u64, id: NodeId, program: &Program, state: State) -> State;
}
