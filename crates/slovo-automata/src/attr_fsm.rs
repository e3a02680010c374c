// FSM with per-state attribute lists.

use crate::fsm::Fsm;
use crate::transitions::TransitionTable;
use crate::StateId;

/// Finite state machine carrying an ordered list of attribute values on
/// every state.
///
/// Attribute lists have multiset semantics: duplicate appends are
/// preserved in append order.
#[derive(Debug, Clone)]
pub struct AttributedFsm<T, A> {
    pub(crate) fsm: Fsm<T>,
    pub(crate) attrs: Vec<Vec<A>>,
}

impl<T: TransitionTable, A> AttributedFsm<T, A> {
    pub fn new() -> Self {
        Self::with_capacity(crate::fsm::RESERVED_STATES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fsm: Fsm::with_capacity(capacity),
            attrs: vec![Vec::new(), Vec::new()], // invalid + start
        }
    }

    pub fn num_states(&self) -> usize {
        self.fsm.num_states()
    }

    pub fn add_state(&mut self, accept: bool) -> StateId {
        let state = self.fsm.add_state(accept);
        self.attrs.push(Vec::new());
        state
    }

    pub fn add_transition(&mut self, from: StateId, to: StateId, sym: T::Sym) {
        self.fsm.add_transition(from, to, sym);
    }

    pub fn go(&self, state: StateId, sym: T::Sym) -> StateId {
        self.fsm.go(state, sym)
    }

    pub fn make_accept(&mut self, state: StateId) {
        self.fsm.make_accept(state);
    }

    pub fn is_accept(&self, state: StateId) -> bool {
        self.fsm.is_accept(state)
    }

    pub fn table(&self, state: StateId) -> &T {
        self.fsm.table(state)
    }

    /// Append an attribute to a state's list.
    pub fn add_attribute(&mut self, state: StateId, attr: A) {
        assert!(
            (state as usize) < self.attrs.len(),
            "state {state} out of range"
        );
        self.attrs[state as usize].push(attr);
    }

    /// The state's attribute list in append order.
    pub fn attributes(&self, state: StateId) -> &[A] {
        &self.attrs[state as usize]
    }
}
