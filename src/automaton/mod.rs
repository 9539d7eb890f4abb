//! Keyword automaton construction and introspection.
//!
//! This module provides the compiled [`Automaton`] type and its building
//! blocks: a trie of [`State`]s connected by forward transitions, augmented
//! with one failure link per state. An automaton is compiled once from a
//! keyword set and is immutable afterward, so it can be shared read-only
//! across any number of concurrent scans.

pub mod builder;
mod fail;
pub mod scan;

use std::collections::BTreeMap;

use crate::error::Result;

pub use builder::AutomatonBuilder;

/// Identifier of one automaton state. States are numbered densely in
/// creation order.
pub type StateId = u32;

/// Identifier of one added keyword, assigned in insertion order.
pub type PatternId = u32;

/// The id of the root state. The empty match prefix always starts here.
pub const ROOT_STATE_ID: StateId = 0;

/// One node of the keyword trie.
///
/// Forward transitions are kept in a sorted map so that introspection
/// iterates them in a deterministic symbol order. A state is terminal when
/// at least one keyword ends at it; the ids of those keywords are recorded
/// on the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Forward edges, one child per distinct symbol.
    transitions: BTreeMap<char, StateId>,
    /// Failure link; the root fails to itself.
    fail: StateId,
    /// Keywords that end at this state, in insertion order.
    patterns: Vec<PatternId>,
}

impl State {
    pub(crate) fn new() -> Self {
        State {
            transitions: BTreeMap::new(),
            fail: ROOT_STATE_ID,
            patterns: Vec::new(),
        }
    }

    /// Look up the forward transition for a symbol.
    pub fn transition(&self, symbol: char) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    /// Get an iterator over the forward transitions in symbol order.
    pub fn transitions(&self) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.transitions.iter().map(|(&symbol, &state)| (symbol, state))
    }

    /// Get the number of forward transitions out of this state.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Get the failure link of this state.
    pub fn fail(&self) -> StateId {
        self.fail
    }

    /// Check if at least one keyword ends at this state.
    pub fn is_terminal(&self) -> bool {
        !self.patterns.is_empty()
    }

    /// Get the ids of the keywords ending at this state, in insertion order.
    pub fn pattern_ids(&self) -> &[PatternId] {
        &self.patterns
    }
}

/// A compiled keyword automaton.
///
/// Owns the full state table and the keyword table as one immutable unit.
/// There is no mutating accessor: once built, an automaton only answers
/// lookups, and scanning threads its transient state through an explicit
/// [`scan::Cursor`] instead of touching the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    /// State table indexed by [`StateId`].
    states: Vec<State>,
    /// Keyword table indexed by [`PatternId`].
    keywords: Vec<String>,
}

impl Automaton {
    /// Compile a keyword set into an automaton.
    ///
    /// Keywords are assigned [`PatternId`]s in iteration order. Duplicates
    /// are tolerated and keep distinct ids; an empty keyword is rejected.
    /// An empty keyword set is valid and produces a root-only automaton
    /// that matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use xiphos::Automaton;
    ///
    /// let automaton = Automaton::compile(["a", "ab", "bc"]).unwrap();
    /// assert_eq!(automaton.keyword_count(), 3);
    /// ```
    pub fn compile<I, K>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut builder = AutomatonBuilder::new();
        for keyword in keywords {
            builder.add_keyword(keyword.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Get the number of states, including the root.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Look up a state by id.
    pub fn state(&self, state_id: StateId) -> Option<&State> {
        self.states.get(state_id as usize)
    }

    /// Get the full state table, indexed by state id.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Look up the keyword belonging to a pattern id.
    pub fn keyword(&self, pattern: PatternId) -> Option<&str> {
        self.keywords.get(pattern as usize).map(|k| k.as_str())
    }

    /// Get an iterator over all keywords in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.as_str())
    }

    /// Get the number of keywords, counting duplicates separately.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the automaton was compiled from an empty keyword set.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
