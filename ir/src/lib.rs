pub mod arena;
pub mod inst;
pub mod memory;
pub mod op;
pub mod program;

pub use arena::Arena;
pub use inst::{Inst, Loc, Node, NodeId};
pub use memory::{Memory, Symbols};
pub use op::{ArithOp, RelOp};
pub use program::Program;
