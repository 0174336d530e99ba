use ir::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Runtime faults
    #[error("Runtime Error: input exhausted at {0}")]
    InputExhausted(NodeId),

    #[error("Runtime Error: division by zero at {0}")]
    DivisionByZero(NodeId),

    #[error("Runtime Error: jump without target at {0}")]
    MissingTarget(NodeId),

    #[error("Runtime Error: no node {0}")]
    Dangling(NodeId),

    #[error("Runtime Error: program already halted")]
    Halted,

    #[error("Runtime Error: step limit {0} reached")]
    StepLimit(u64),
}

impl Error {
    pub fn is_runtime(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Yaml(_))
    }
}
