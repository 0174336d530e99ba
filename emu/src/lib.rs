mod error;
pub mod hooks;
mod model;

pub use error::Error;
pub use hooks::Hook;
pub use model::State;

use ir::Program;

/// Run `program` to completion and return everything it output.
/// `tmax` bounds the number of executed nodes.
pub fn run(program: &Program, tmax: Option<u64>) -> Result<Vec<i32>, Error> {
    Ok(run_with(program, tmax, &mut [])?.into_outputs())
}

/// Main loop: execute one node, then let every hook see the result
pub fn run_with(
    program: &Program,
    tmax: Option<u64>,
    hooks: &mut [Box<dyn Hook>],
) -> Result<State, Error> {
    let mut state = hooks
        .iter_mut()
        .fold(State::new(program), |state, hook| hook.init(program, state));

    let tmax = tmax.unwrap_or(u64::MAX);
    for time in 0..tmax {
        let id = state.exec(&program.arena)?;
        state = hooks
            .iter_mut()
            .fold(state, |state, hook| hook.exec(time, id, program, state));
        if state.is_terminated() {
            return Ok(state);
        }
    }
    Err(Error::StepLimit(tmax))
}
