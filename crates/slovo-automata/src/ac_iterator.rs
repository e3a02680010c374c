// Stream iterators over Aho-Corasick matcher output.

use crate::aho_corasick::AhoCorasickTrie;
use crate::transitions::TransitionTable;
use crate::{StateId, START_STATE};

impl<T: TransitionTable, A: Clone + PartialEq> AhoCorasickTrie<T, A> {
    /// Iterator yielding the attribute list at the state reached after
    /// each input symbol, byte-for-symbol with the input.
    pub fn state_iter<I>(&self, input: I) -> AcStateIter<'_, T, A, I::IntoIter>
    where
        I: IntoIterator<Item = T::Sym>,
    {
        AcStateIter {
            ac: self,
            state: START_STATE,
            input: input.into_iter(),
        }
    }

    /// Iterator yielding one `(end_pos, chain_id)` event per match, where
    /// `end_pos` is the 1-based count of symbols consumed when the match
    /// ended. Several matches ending at the same position are emitted in
    /// attribute-list order before the input advances.
    pub fn match_iter<I>(&self, input: I) -> AcMatchIter<'_, T, A, I::IntoIter>
    where
        I: IntoIterator<Item = T::Sym>,
    {
        AcMatchIter {
            ac: self,
            state: START_STATE,
            pending: 0,
            pos: 0,
            input: input.into_iter(),
        }
    }
}

/// See [`AhoCorasickTrie::state_iter`].
pub struct AcStateIter<'a, T, A, I> {
    ac: &'a AhoCorasickTrie<T, A>,
    state: StateId,
    input: I,
}

impl<'a, T, A, I> AcStateIter<'a, T, A, I> {
    /// The state reached by the most recent step.
    pub fn state(&self) -> StateId {
        self.state
    }
}

impl<'a, T, A, I> Iterator for AcStateIter<'a, T, A, I>
where
    T: TransitionTable,
    A: Clone + PartialEq,
    I: Iterator<Item = T::Sym>,
{
    type Item = &'a [A];

    fn next(&mut self) -> Option<&'a [A]> {
        let sym = self.input.next()?;
        self.state = self.ac.step(self.state, sym);
        Some(self.ac.attributes(self.state))
    }
}

/// See [`AhoCorasickTrie::match_iter`].
pub struct AcMatchIter<'a, T, A, I> {
    ac: &'a AhoCorasickTrie<T, A>,
    state: StateId,
    pending: usize,
    pos: usize,
    input: I,
}

impl<'a, T, A, I> Iterator for AcMatchIter<'a, T, A, I>
where
    T: TransitionTable,
    A: Clone + PartialEq,
    I: Iterator<Item = T::Sym>,
{
    type Item = (usize, A);

    fn next(&mut self) -> Option<(usize, A)> {
        loop {
            let attrs = self.ac.attributes(self.state);
            if self.pending < attrs.len() {
                let id = attrs[self.pending].clone();
                self.pending += 1;
                return Some((self.pos, id));
            }
            let sym = self.input.next()?;
            self.state = self.ac.step(self.state, sym);
            self.pos += 1;
            self.pending = 0;
        }
    }
}
