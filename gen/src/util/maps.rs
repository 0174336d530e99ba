use indexmap::IndexMap;
use ir::{Arena, NodeId, Program};
use serde::{Deserialize, Serialize};

/// Serializable report of a built program: the data layout and the IR itself
#[derive(Debug, Serialize, Deserialize)]
pub struct SymbolMap {
    pub root: NodeId,
    pub vars: IndexMap<String, DataEntry>,
    pub consts: IndexMap<i32, DataEntry>,
    pub inputs: Vec<i32>,
    pub ir: Arena,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub addr: usize,
    pub init: i32,
}

impl SymbolMap {
    pub fn generate(program: &Program) -> Self {
        let entry = |addr: usize| DataEntry {
            addr,
            init: program.memory.cells()[addr],
        };

        // Listed in location order
        let mut vars: Vec<_> = program.symbols.vars.iter().collect();
        vars.sort_by_key(|(_, loc)| **loc);
        let mut consts: Vec<_> = program.symbols.consts.iter().collect();
        consts.sort_by_key(|(_, loc)| **loc);

        SymbolMap {
            root: program.root,
            vars: vars
                .into_iter()
                .map(|(name, loc)| (name.clone(), entry(loc.0)))
                .collect(),
            consts: consts
                .into_iter()
                .map(|(value, loc)| (*value, entry(loc.0)))
                .collect(),
            inputs: program.inputs.clone(),
            ir: program.arena.clone(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
