use crate::arena::Arena;
use crate::inst::NodeId;
use crate::memory::{Memory, Symbols};
use color_print::cformat;

/// Everything the front end hands over to the runner
#[derive(Debug, Clone)]
pub struct Program {
    pub arena: Arena,
    pub root: NodeId,
    pub symbols: Symbols,
    pub memory: Memory,
    pub inputs: Vec<i32>,
}

impl Program {
    /// One line per node in allocation order
    pub fn listing(&self) -> Vec<String> {
        self.arena
            .iter()
            .map(|(id, node)| {
                let next = match node.next {
                    Some(next) => cformat!("<g>-> {}</>", next),
                    None => cformat!("<m>-> end</>"),
                };
                let mark = if id == self.root { "*" } else { " " };
                format!("{}[{}] {:<40} {}", mark, id, node.inst.cformat(&self.symbols), next)
            })
            .collect()
    }

    pub fn print(&self) {
        println!("+-[IR]----+------------------------------------------------------------------");
        for line in self.listing() {
            println!("| {}", line);
        }
        println!("+-[Data]--+------------------------------------------------------------------");
        for (idx, value) in self.memory.cells().iter().enumerate() {
            let loc = crate::inst::Loc(idx);
            println!("| {:>8} : {:<12} = {}", loc.to_string(), self.symbols.describe(loc), value);
        }
        println!("+-[Input]-+------------------------------------------------------------------");
        println!("| {:?}", self.inputs);
    }
}
