// Aho-Corasick trie: fail links, suffix-match propagation, matcher.

use std::collections::VecDeque;

use crate::trie::Trie;
use crate::transitions::TransitionTable;
use crate::{StateId, INVALID_STATE, START_STATE};

/// Trie extended with fail transitions for multi-pattern matching.
///
/// After construction the following hold:
/// - `fail[START_STATE] == START_STATE`;
/// - for every other state `s`, `fail[s]` is the deepest proper suffix of
///   `s`'s path label that is itself a state, or the start state;
/// - every chain id attached to an accepting fail ancestor of `s` also
///   appears in `s`'s attribute list (suffix-match inheritance).
#[derive(Debug, Clone)]
pub struct AhoCorasickTrie<T, A> {
    pub(crate) trie: Trie<T, A>,
    pub(crate) fail: Vec<StateId>,
}

impl<T: TransitionTable, A: Clone + PartialEq> AhoCorasickTrie<T, A> {
    /// Construct fail links over a populated trie and propagate chain ids
    /// down suffix chains. Breadth-first from the start state.
    pub fn build(trie: Trie<T, A>) -> Self {
        let mut fail = vec![INVALID_STATE; trie.num_states()];
        fail[START_STATE as usize] = START_STATE;

        let mut queue: VecDeque<StateId> = VecDeque::new();
        for (_, child) in trie.table(START_STATE).entries() {
            fail[child as usize] = START_STATE;
            queue.push_back(child);
        }

        while let Some(state) = queue.pop_front() {
            for (sym, target) in trie.table(state).entries() {
                queue.push_back(target);

                let mut fstate = fail[state as usize];
                while fstate != START_STATE && trie.go(fstate, sym) == INVALID_STATE {
                    fstate = fail[fstate as usize];
                }
                let candidate = trie.go(fstate, sym);
                fail[target as usize] = if candidate != INVALID_STATE && candidate != target {
                    candidate
                } else {
                    START_STATE
                };
            }
        }

        let mut ac = Self { trie, fail };
        ac.propagate_suffix_matches();
        ac
    }

    /// Union every accepting fail ancestor's chain ids into each state,
    /// appending the ids not already present, in fail-chain order.
    fn propagate_suffix_matches(&mut self) {
        for state in START_STATE..self.trie.num_states() as StateId {
            let mut fstate = self.fail[state as usize];
            while fstate != START_STATE {
                if self.trie.is_accept(fstate) {
                    let inherited: Vec<A> = self.trie.attributes(fstate).to_vec();
                    for id in inherited {
                        if !self.trie.attributes(state).contains(&id) {
                            self.trie.add_attribute(state, id);
                        }
                    }
                }
                fstate = self.fail[fstate as usize];
            }
        }
    }

    /// One matcher step: move from `from` by `sym`, falling back along
    /// fail links; bottoms out at the start state.
    pub fn step(&self, from: StateId, sym: T::Sym) -> StateId {
        let mut to = self.trie.go(from, sym);
        let mut state = from;
        while to == INVALID_STATE && state > START_STATE {
            state = self.fail[state as usize];
            to = self.trie.go(state, sym);
        }
        if to == INVALID_STATE {
            START_STATE
        } else {
            to
        }
    }

    /// The fail link of a state.
    pub fn fail_link(&self, state: StateId) -> StateId {
        self.fail[state as usize]
    }

    /// Fail links for all states, indexed by state id.
    pub fn fail_links(&self) -> &[StateId] {
        &self.fail
    }

    pub fn num_states(&self) -> usize {
        self.trie.num_states()
    }

    pub fn is_accept(&self, state: StateId) -> bool {
        self.trie.is_accept(state)
    }

    /// Attribute list of a state: its own chain ids plus the inherited
    /// suffix-match ids.
    pub fn attributes(&self, state: StateId) -> &[A] {
        self.trie.attributes(state)
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie<T, A> {
        &self.trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transitions::FlexTransitions;

    type AcTrie = AhoCorasickTrie<FlexTransitions<u8>, u64>;

    fn build(patterns: &[(&str, u64)]) -> AcTrie {
        let mut trie = Trie::new();
        for &(pattern, id) in patterns {
            trie.add_chain(pattern.bytes(), id);
        }
        AcTrie::build(trie)
    }

    #[test]
    fn start_fail_link_is_start() {
        let ac = build(&[("ab", 1)]);
        assert_eq!(ac.fail_link(START_STATE), START_STATE);
    }

    #[test]
    fn depth_one_states_fail_to_start() {
        let ac = build(&[("ab", 1), ("ba", 2)]);
        let a = ac.trie().go(START_STATE, b'a');
        let b = ac.trie().go(START_STATE, b'b');
        assert_eq!(ac.fail_link(a), START_STATE);
        assert_eq!(ac.fail_link(b), START_STATE);
    }

    #[test]
    fn fail_links_point_to_longest_proper_suffix() {
        let ac = build(&[("ab", 1), ("bab", 2)]);
        // State for "ba" fails to "a"; state for "bab" fails to "ab".
        let b = ac.trie().go(START_STATE, b'b');
        let ba = ac.trie().go(b, b'a');
        let bab = ac.trie().go(ba, b'b');
        let a = ac.trie().go(START_STATE, b'a');
        let ab = ac.trie().go(a, b'b');
        assert_eq!(ac.fail_link(ba), a);
        assert_eq!(ac.fail_link(bab), ab);
    }

    #[test]
    fn suffix_matches_are_inherited() {
        let ac = build(&[("she", 4), ("he", 1)]);
        let s = ac.trie().go(START_STATE, b's');
        let sh = ac.trie().go(s, b'h');
        let she = ac.trie().go(sh, b'e');
        // "she" ends with "he", so its state carries both ids.
        assert_eq!(ac.attributes(she), &[4, 1]);
    }

    #[test]
    fn classic_ushers_scan() {
        let ac = build(&[("he", 1), ("hers", 2), ("his", 3), ("she", 4)]);
        let mut state = START_STATE;
        let mut events: Vec<(usize, Vec<u64>)> = Vec::new();
        for (i, b) in "ushers".bytes().enumerate() {
            state = ac.step(state, b);
            let attrs = ac.attributes(state);
            if !attrs.is_empty() {
                events.push((i + 1, attrs.to_vec()));
            }
        }
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, 4);
        let mut ids = events[0].1.clone();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(events[1], (6, vec![2]));
    }

    #[test]
    fn overlapping_patterns_scan() {
        let ac = build(&[("abcde", 1), ("ab", 2), ("abc", 3), ("abcd", 4), ("cde", 5)]);
        let mut state = START_STATE;
        let mut events: Vec<(usize, Vec<u64>)> = Vec::new();
        for (i, b) in "cdeabcde".bytes().enumerate() {
            state = ac.step(state, b);
            let attrs = ac.attributes(state);
            if !attrs.is_empty() {
                let mut ids = attrs.to_vec();
                ids.sort_unstable();
                events.push((i + 1, ids));
            }
        }
        assert_eq!(
            events,
            vec![
                (3, vec![5]),
                (5, vec![2]),
                (6, vec![3]),
                (7, vec![4]),
                (8, vec![1, 5]),
            ]
        );
    }

    #[test]
    fn step_from_start_on_unknown_symbol_stays_at_start() {
        let ac = build(&[("ab", 1)]);
        assert_eq!(ac.step(START_STATE, b'z'), START_STATE);
    }

    #[test]
    fn mismatch_falls_back_through_fail_links() {
        let ac = build(&[("ab", 1), ("bc", 2)]);
        let mut state = START_STATE;
        for b in "abc".bytes() {
            state = ac.step(state, b);
        }
        // After "abc" the matcher sits on the "bc" end state.
        assert_eq!(ac.attributes(state), &[2]);
    }
}
