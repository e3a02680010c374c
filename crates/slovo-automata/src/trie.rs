// Trie over an attributed FSM: chain insertion and lookup.

use crate::attr_fsm::AttributedFsm;
use crate::transitions::TransitionTable;
use crate::{StateId, INVALID_STATE, START_STATE};

/// Trie built on an [`AttributedFsm`].
///
/// A chain is an ordered sequence of symbols; inserting it creates the
/// missing path states, marks the final state accepting and attaches the
/// chain id to it. Inserting the same chain again with another id appends
/// that id, in order.
#[derive(Debug, Clone)]
pub struct Trie<T, A> {
    pub(crate) auto: AttributedFsm<T, A>,
}

impl<T: TransitionTable, A> Trie<T, A> {
    pub fn new() -> Self {
        Self {
            auto: AttributedFsm::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            auto: AttributedFsm::with_capacity(capacity),
        }
    }

    /// Insert a chain and attach `id` to its final state.
    ///
    /// Returns the final state. An empty chain attaches `id` to the start
    /// state and marks it accepting.
    pub fn add_chain(&mut self, chain: impl IntoIterator<Item = T::Sym>, id: A) -> StateId {
        let state = self.add_chain_path(chain);
        self.auto.add_attribute(state, id);
        state
    }

    /// Insert a chain's path without attaching an id; the final state is
    /// still marked accepting.
    pub fn add_chain_path(&mut self, chain: impl IntoIterator<Item = T::Sym>) -> StateId {
        let mut state = START_STATE;
        for sym in chain {
            let mut next = self.auto.go(state, sym);
            if next == INVALID_STATE {
                next = self.auto.add_state(false);
                self.auto.add_transition(state, next, sym);
            }
            state = next;
        }
        self.auto.make_accept(state);
        state
    }

    /// Attribute list of the state reached by walking `chain` from the
    /// start state.
    ///
    /// An undefined step lands in the invalid state, whose attribute list
    /// is empty, so unknown chains report no attributes.
    pub fn search(&self, chain: impl IntoIterator<Item = T::Sym>) -> &[A] {
        let mut state = START_STATE;
        for sym in chain {
            if state == INVALID_STATE {
                break;
            }
            state = self.auto.go(state, sym);
        }
        self.auto.attributes(state)
    }

    pub fn num_states(&self) -> usize {
        self.auto.num_states()
    }

    pub fn go(&self, state: StateId, sym: T::Sym) -> StateId {
        self.auto.go(state, sym)
    }

    pub fn is_accept(&self, state: StateId) -> bool {
        self.auto.is_accept(state)
    }

    pub fn table(&self, state: StateId) -> &T {
        self.auto.table(state)
    }

    pub fn attributes(&self, state: StateId) -> &[A] {
        self.auto.attributes(state)
    }

    pub fn add_attribute(&mut self, state: StateId, attr: A) {
        self.auto.add_attribute(state, attr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transitions::FlexTransitions;

    type ByteTrie = Trie<FlexTransitions<u8>, u64>;

    fn chain(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.bytes()
    }

    #[test]
    fn inserted_chains_are_found() {
        let mut trie = ByteTrie::new();
        trie.add_chain(chain("cat"), 1);
        trie.add_chain(chain("car"), 2);
        trie.add_chain(chain("dog"), 3);

        assert_eq!(trie.search(chain("cat")), &[1]);
        assert_eq!(trie.search(chain("car")), &[2]);
        assert_eq!(trie.search(chain("dog")), &[3]);
    }

    #[test]
    fn absent_chains_report_nothing() {
        let mut trie = ByteTrie::new();
        trie.add_chain(chain("cat"), 1);

        assert!(trie.search(chain("ca")).is_empty()); // proper prefix
        assert!(trie.search(chain("cats")).is_empty()); // past a leaf
        assert!(trie.search(chain("dog")).is_empty()); // foreign
        assert!(trie.search(chain("xyzzy")).is_empty());
    }

    #[test]
    fn prefix_chains_coexist() {
        let mut trie = ByteTrie::new();
        trie.add_chain(chain("in"), 1);
        trie.add_chain(chain("inn"), 2);
        assert_eq!(trie.search(chain("in")), &[1]);
        assert_eq!(trie.search(chain("inn")), &[2]);
    }

    #[test]
    fn duplicate_insertion_appends_ids_in_order() {
        let mut trie = ByteTrie::new();
        trie.add_chain(chain("cat"), 1);
        trie.add_chain(chain("cat"), 9);
        assert_eq!(trie.search(chain("cat")), &[1, 9]);
    }

    #[test]
    fn final_states_are_accepting() {
        let mut trie = ByteTrie::new();
        let end = trie.add_chain(chain("cat"), 1);
        assert!(trie.is_accept(end));
        assert!(!trie.is_accept(START_STATE));
    }

    #[test]
    fn empty_chain_lands_on_start() {
        let mut trie = ByteTrie::new();
        let end = trie.add_chain(std::iter::empty(), 5);
        assert_eq!(end, START_STATE);
        assert!(trie.is_accept(START_STATE));
        assert_eq!(trie.search(std::iter::empty()), &[5]);
    }

    #[test]
    fn shared_prefixes_share_states() {
        let mut trie = ByteTrie::new();
        trie.add_chain(chain("abc"), 1);
        trie.add_chain(chain("abd"), 2);
        // start + invalid + a, b, c, d
        assert_eq!(trie.num_states(), 6);
    }
}
