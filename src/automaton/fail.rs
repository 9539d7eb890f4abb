//! Failure-link compilation over a finished trie.

use std::collections::VecDeque;

use crate::automaton::{ROOT_STATE_ID, State, StateId};

/// Assign a failure link to every state, breadth-first from the root.
///
/// Children of the root fail to the root. Every deeper state fails to the
/// state reached by following its parent's failure chain until a state with
/// a matching transition is found, or the root if none is. Parents are
/// always processed before their children, so each looked-up link is final
/// by the time it is read.
pub(super) fn compile(states: &mut [State]) {
    let mut queue = VecDeque::new();

    let root_children: Vec<StateId> = states[ROOT_STATE_ID as usize]
        .transitions
        .values()
        .copied()
        .collect();
    for child in root_children {
        states[child as usize].fail = ROOT_STATE_ID;
        queue.push_back(child);
    }

    while let Some(state_id) = queue.pop_front() {
        let edges: Vec<(char, StateId)> = states[state_id as usize]
            .transitions
            .iter()
            .map(|(&symbol, &child)| (symbol, child))
            .collect();

        for (symbol, child) in edges {
            let mut fail_id = states[state_id as usize].fail;
            let child_fail = loop {
                if let Some(next) = states[fail_id as usize].transition(symbol) {
                    break next;
                }
                if fail_id == ROOT_STATE_ID {
                    break ROOT_STATE_ID;
                }
                fail_id = states[fail_id as usize].fail;
            };
            states[child as usize].fail = child_fail;
            queue.push_back(child);
        }
    }
}
