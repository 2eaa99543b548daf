//! Epsilon-closure (C5, §4.3): the least set containing `s` closed under
//! direct epsilon-transitions, computed with a worklist so a cyclic
//! epsilon-graph still terminates.

use crate::automaton::{Automaton, StateId, EPSILON};

/// `E(s)`. Returned in discovery order (`s` first), which is what the
/// macro-state naming rule (§4.2) joins into a name.
pub fn epsilon_closure(automaton: &Automaton, start: StateId) -> Vec<StateId> {
    let mut closure = vec![start];
    let mut frontier = vec![start];
    while let Some(state) = frontier.pop() {
        let Ok(next) = automaton.raw_delta(state, EPSILON) else {
            continue;
        };
        for candidate in next {
            if !closure.contains(&candidate) {
                closure.push(candidate);
                frontier.push(candidate);
            }
        }
    }
    closure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Kind;

    fn t2_enfa() -> Automaton {
        // spec.md §8 T2: q0 --eps--> q1 --a--> q2, start=q0, F={q2}.
        let mut a = Automaton::new(Kind::EpsilonNfa);
        a.add_state("q0").unwrap();
        a.add_state("q1").unwrap();
        a.add_state("q2").unwrap();
        a.add_symbol(EPSILON).unwrap();
        a.add_symbol(b'a').unwrap();
        a.set_start_state("q0").unwrap();
        a.add_accept_state("q2").unwrap();
        a.add_transition("q0", EPSILON, "q1").unwrap();
        a.add_transition("q1", b'a', "q2").unwrap();
        a
    }

    #[test]
    fn t2_epsilon_closures() {
        let a = t2_enfa();
        let q0 = a.state_id("q0").unwrap();
        let q1 = a.state_id("q1").unwrap();
        let q2 = a.state_id("q2").unwrap();
        assert_eq!(epsilon_closure(&a, q0), vec![q0, q1]);
        assert_eq!(epsilon_closure(&a, q1), vec![q1]);
        assert_eq!(epsilon_closure(&a, q2), vec![q2]);
    }

    #[test]
    fn t2_delta_closes_before_and_after() {
        let a = t2_enfa();
        let q0 = a.state_id("q0").unwrap();
        let q2 = a.state_id("q2").unwrap();
        assert_eq!(a.delta(q0, b'a').unwrap(), vec![q2]);
    }

    #[test]
    fn closure_is_idempotent_on_a_cycle() {
        // P6: E(E(s)) == E(s), s in E(s) always, even with an epsilon cycle.
        let mut a = Automaton::new(Kind::EpsilonNfa);
        a.add_state("q0").unwrap();
        a.add_state("q1").unwrap();
        a.add_symbol(EPSILON).unwrap();
        a.set_start_state("q0").unwrap();
        a.add_transition("q0", EPSILON, "q1").unwrap();
        a.add_transition("q1", EPSILON, "q0").unwrap();

        let q0 = a.state_id("q0").unwrap();
        let once = epsilon_closure(&a, q0);
        assert!(once.contains(&q0));

        let mut twice: Vec<StateId> = Vec::new();
        for &s in &once {
            for s2 in epsilon_closure(&a, s) {
                if !twice.contains(&s2) {
                    twice.push(s2);
                }
            }
        }
        let mut once_sorted = once.clone();
        once_sorted.sort_by_key(|s| s.0);
        let mut twice_sorted = twice.clone();
        twice_sorted.sort_by_key(|s| s.0);
        assert_eq!(once_sorted, twice_sorted);
    }
}
