use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Display)]
pub enum ArithOp {
    #[default]
    #[strum(serialize = "none")]
    NONE,
    #[strum(serialize = "+")]
    PLUS,
    #[strum(serialize = "-")]
    MINUS,
    #[strum(serialize = "*")]
    MULT,
    #[strum(serialize = "/")]
    DIV,
}

impl ArithOp {
    /// Evaluate `a op b`. `NONE` copies `a`.
    /// Returns `None` on division by zero.
    pub fn apply(self, a: i32, b: i32) -> Option<i32> {
        match self {
            ArithOp::NONE => Some(a),
            ArithOp::PLUS => Some(a.wrapping_add(b)),
            ArithOp::MINUS => Some(a.wrapping_sub(b)),
            ArithOp::MULT => Some(a.wrapping_mul(b)),
            ArithOp::DIV => match b {
                0 => None,
                b => Some(a.wrapping_div(b)),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RelOp {
    #[strum(serialize = ">")]
    GREATER,
    #[strum(serialize = "<")]
    LESS,
    #[strum(serialize = "!=")]
    NOTEQUAL,
}

impl RelOp {
    pub fn test(self, a: i32, b: i32) -> bool {
        match self {
            RelOp::GREATER => a > b,
            RelOp::LESS => a < b,
            RelOp::NOTEQUAL => a != b,
        }
    }
}
