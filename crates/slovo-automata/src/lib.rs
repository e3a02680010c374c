//! Finite-state machine core.
//!
//! # Architecture
//!
//! - [`transitions`] -- the `symbol -> state` table contract with dense and
//!   sparse implementations
//! - [`fsm`] -- the state-vector machine shared by all automata
//! - [`attr_fsm`] -- machine with per-state attribute lists
//! - [`trie`] -- chain insertion and lookup over an attributed machine
//! - [`aho_corasick`] -- fail links and the multi-pattern matcher
//! - [`ac_iterator`] -- pull iterators over matcher output
//! - [`serializer`] -- binary image read/write for the whole family
//!
//! States are addressed by index into an owning vector, never by pointer,
//! so fail links and other peer references cannot form ownership cycles.
//! Machines are built single-threaded, then served read-only.

pub mod ac_iterator;
pub mod aho_corasick;
pub mod attr_fsm;
pub mod fsm;
pub mod serializer;
pub mod transitions;
pub mod trie;

pub use aho_corasick::AhoCorasickTrie;
pub use attr_fsm::AttributedFsm;
pub use fsm::Fsm;
pub use serializer::SerializeError;
pub use transitions::{AnsiTransitions, FlatTransitions, FlexTransitions, Symbol, TransitionTable};
pub use trie::Trie;

/// Index of a state inside its owning machine.
pub type StateId = u32;

/// The sentinel "no such state". State 0 exists in every machine solely so
/// that this value is distinct from any reachable state; it has no
/// transitions and is never accepting.
pub const INVALID_STATE: StateId = 0;

/// The start state of every machine.
pub const START_STATE: StateId = 1;
