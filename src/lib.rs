//! # Xiphos
//!
//! A fast multi-pattern keyword matching library for Rust, built on the
//! Aho-Corasick automaton.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Compile a keyword set once, scan any number of texts
//! - Single linear pass reporting every occurrence, including overlaps
//! - Read-only automaton introspection for external tooling
//! - Resumable scans over chunked input via an explicit cursor
//!
//! ## Example
//!
//! ```
//! use xiphos::Automaton;
//!
//! let automaton = Automaton::compile(["he", "she", "his", "hers"]).unwrap();
//!
//! let matches = automaton.scan("ushers");
//! let found: Vec<_> = matches.iter().map(|m| (m.end(), m.keyword())).collect();
//! assert_eq!(found, vec![(4, "she"), (6, "hers")]);
//! ```

pub mod automaton;
pub mod cli;
pub mod error;

pub use automaton::scan::{Cursor, Match, Scan};
pub use automaton::{Automaton, AutomatonBuilder, PatternId, ROOT_STATE_ID, State, StateId};
pub use error::{Result, XiphosError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
