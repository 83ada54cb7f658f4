use crate::state::State;

////////////////////////////////////////////////////////////////////////////////

pub trait InvariantFn: Fn(&State) -> Result<(), String> {}

impl<F> InvariantFn for F where F: Fn(&State) -> Result<(), String> {}

////////////////////////////////////////////////////////////////////////////////

/// Properties every single step must preserve.
pub(crate) fn check_transition(prev: &State, next: &State) -> Result<(), String> {
    if prev.total() != next.total() {
        return Err(format!(
            "bike count changed from {} to {}",
            prev.total(),
            next.total()
        ));
    }
    for (name, before, after) in [
        ("olin_empty", prev.olin_empty, next.olin_empty),
        ("wellesley_empty", prev.wellesley_empty, next.wellesley_empty),
    ] {
        if after < before {
            return Err(format!("{name} decreased from {before} to {after}"));
        }
        if after > before + 1 {
            return Err(format!("{name} jumped from {before} to {after}"));
        }
    }
    Ok(())
}
