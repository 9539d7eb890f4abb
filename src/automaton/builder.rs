//! Incremental construction of keyword automatons.

use crate::automaton::{Automaton, PatternId, ROOT_STATE_ID, State, StateId, fail};
use crate::error::{Result, XiphosError};

/// Builder that accumulates keywords into a trie and compiles the result.
///
/// Keywords can be added one at a time, then [`build`](Self::build) runs the
/// failure-link pass and freezes the automaton. Adding the same keyword
/// twice is allowed; each addition keeps its own [`PatternId`] and is
/// reported separately by scans.
///
/// # Examples
///
/// ```
/// use xiphos::AutomatonBuilder;
///
/// let mut builder = AutomatonBuilder::new();
/// builder.add_keyword("he").unwrap();
/// builder.add_keyword("she").unwrap();
/// let automaton = builder.build();
///
/// assert_eq!(automaton.keyword_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    keywords: Vec<String>,
}

impl AutomatonBuilder {
    /// Create a new builder holding only the root state.
    pub fn new() -> Self {
        AutomatonBuilder {
            states: vec![State::new()],
            keywords: Vec::new(),
        }
    }

    /// Add a keyword and return its assigned [`PatternId`].
    ///
    /// Walks the trie from the root, reusing existing transitions and
    /// allocating states for the missing suffix. The final state is marked
    /// terminal for the new pattern id.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword is empty, or if the state or keyword
    /// table would outgrow its id space.
    pub fn add_keyword(&mut self, keyword: &str) -> Result<PatternId> {
        if keyword.is_empty() {
            return Err(XiphosError::keyword("keyword must not be empty"));
        }

        let pattern = u32::try_from(self.keywords.len())
            .map_err(|_| XiphosError::capacity("keyword table is full"))?;

        let mut current = ROOT_STATE_ID;
        for symbol in keyword.chars() {
            current = match self.states[current as usize].transitions.get(&symbol) {
                Some(&next) => next,
                None => {
                    let next = self.alloc_state()?;
                    self.states[current as usize].transitions.insert(symbol, next);
                    next
                }
            };
        }

        self.states[current as usize].patterns.push(pattern);
        self.keywords.push(keyword.to_string());
        Ok(pattern)
    }

    /// Compile the accumulated keywords into an immutable [`Automaton`].
    ///
    /// Runs the failure-link pass over the finished trie. The builder is
    /// consumed; the returned automaton cannot be modified further.
    pub fn build(self) -> Automaton {
        let mut states = self.states;
        fail::compile(&mut states);
        Automaton {
            states,
            keywords: self.keywords,
        }
    }

    /// Get the number of keywords added so far.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if no keyword has been added yet.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    fn alloc_state(&mut self) -> Result<StateId> {
        let state_id = u32::try_from(self.states.len())
            .map_err(|_| XiphosError::capacity("state table is full"))?;
        self.states.push(State::new());
        Ok(state_id)
    }
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
