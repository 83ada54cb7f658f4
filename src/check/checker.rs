use std::collections::{HashSet, VecDeque};

use crate::state::State;

use super::{
    config::Config,
    control::{check_transition, InvariantFn},
    error::{CheckError, InvariantViolation},
    log::CheckLog,
    trace::{Branch, Trace},
};

////////////////////////////////////////////////////////////////////////////////

/// Breadth-first exploration of every state reachable from `initial`.
pub struct StateChecker {
    initial: State,
}

impl StateChecker {
    pub fn new(initial: State) -> Self {
        Self { initial }
    }

    pub fn check(&self, cfg: &Config, invariant: impl InvariantFn) -> Result<CheckLog, CheckError> {
        let mut log = CheckLog::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(Trace::new(), self.initial)]);

        let violation = |trace: &Trace, state: State, report: String| {
            CheckError::InvariantViolation(InvariantViolation {
                trace: trace.clone(),
                state,
                report,
            })
        };

        while let Some((trace, state)) = queue.pop_front() {
            log.visited_total += 1;

            if !visited.insert(state.hash()) {
                continue;
            }
            log.visited_unique += 1;
            log.max_depth_reached = log.max_depth_reached.max(trace.depth());

            // check invariant
            invariant(&state).map_err(|report| violation(&trace, state, report))?;

            // check depth restriction
            if trace.depth() >= cfg.max_depth {
                continue;
            }

            for branch in Branch::ALL {
                let mut next = state;
                branch.apply(&mut next);
                let next_trace = trace.with_branch(branch);
                check_transition(&state, &next)
                    .map_err(|report| violation(&next_trace, next, report))?;
                queue.push_back((next_trace, next));
            }
        }

        Ok(log)
    }
}
