// Transition tables: the `symbol -> state` contract and its two
// representations.

use std::collections::BTreeMap;
use std::io::{self, Read, Write};
use std::marker::PhantomData;

use crate::{StateId, INVALID_STATE};

/// A symbol usable as a transition key.
///
/// Fixes the symbol's serialised width and its ordinal for dense tables.
/// The wire encoding is little-endian, matching the automaton image format.
pub trait Symbol: Copy + Ord + std::fmt::Debug {
    /// Serialised width in bytes.
    const WIRE_BYTES: usize;

    /// Ordinal used as the index into a dense table.
    fn ordinal(self) -> usize;

    /// Inverse of [`ordinal`](Self::ordinal).
    fn from_ordinal(ordinal: usize) -> Self;

    fn write_wire<W: Write>(self, w: &mut W) -> io::Result<()>;

    fn read_wire<R: Read>(r: &mut R) -> io::Result<Self>;
}

impl Symbol for u8 {
    const WIRE_BYTES: usize = 1;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn from_ordinal(ordinal: usize) -> Self {
        ordinal as u8
    }

    fn write_wire<W: Write>(self, w: &mut W) -> io::Result<()> {
        w.write_all(&[self])
    }

    fn read_wire<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut buf = [0u8; 1];
        r.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl Symbol for u32 {
    const WIRE_BYTES: usize = 4;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn from_ordinal(ordinal: usize) -> Self {
        ordinal as u32
    }

    fn write_wire<W: Write>(self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_le_bytes())
    }

    fn read_wire<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut buf = [0u8; 4];
        r.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

/// The `symbol -> state` mapping owned by each state.
///
/// Both representations expose the same observable contract: `go` returns
/// [`INVALID_STATE`] for an absent key, `put` overwrites idempotently, and
/// `entries` enumerates populated pairs in ascending symbol order. The
/// serialiser depends on that order for deterministic images.
pub trait TransitionTable: Default {
    type Sym: Symbol;

    /// Target of the move by `sym`, or [`INVALID_STATE`].
    fn go(&self, sym: Self::Sym) -> StateId;

    /// Record a move; overwrites any previous target for `sym`.
    fn put(&mut self, sym: Self::Sym, to: StateId);

    /// Populated `(symbol, target)` pairs in ascending symbol order.
    fn entries(&self) -> impl Iterator<Item = (Self::Sym, StateId)> + '_;

    /// Number of populated entries.
    fn num_entries(&self) -> usize {
        self.entries().count()
    }
}

/// Sparse table backed by an ordered map. The default choice when the
/// symbol set is large or unknown up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexTransitions<S: Symbol> {
    table: BTreeMap<S, StateId>,
}

impl<S: Symbol> Default for FlexTransitions<S> {
    fn default() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }
}

impl<S: Symbol> TransitionTable for FlexTransitions<S> {
    type Sym = S;

    fn go(&self, sym: S) -> StateId {
        self.table.get(&sym).copied().unwrap_or(INVALID_STATE)
    }

    fn put(&mut self, sym: S, to: StateId) {
        self.table.insert(sym, to);
    }

    fn entries(&self) -> impl Iterator<Item = (S, StateId)> + '_ {
        self.table.iter().map(|(&sym, &to)| (sym, to))
    }

    fn num_entries(&self) -> usize {
        self.table.len()
    }
}

/// Dense table: a fixed array indexed by symbol ordinal. Usable when the
/// symbol range is small and known statically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTransitions<S: Symbol, const N: usize> {
    table: [StateId; N],
    _sym: PhantomData<S>,
}

impl<S: Symbol, const N: usize> Default for FlatTransitions<S, N> {
    fn default() -> Self {
        Self {
            table: [INVALID_STATE; N],
            _sym: PhantomData,
        }
    }
}

impl<S: Symbol, const N: usize> TransitionTable for FlatTransitions<S, N> {
    type Sym = S;

    fn go(&self, sym: S) -> StateId {
        let ordinal = sym.ordinal();
        assert!(ordinal < N, "symbol ordinal {ordinal} outside dense table of {N}");
        self.table[ordinal]
    }

    fn put(&mut self, sym: S, to: StateId) {
        let ordinal = sym.ordinal();
        assert!(ordinal < N, "symbol ordinal {ordinal} outside dense table of {N}");
        self.table[ordinal] = to;
    }

    fn entries(&self) -> impl Iterator<Item = (S, StateId)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter(|(_, &to)| to != INVALID_STATE)
            .map(|(ordinal, &to)| (S::from_ordinal(ordinal), to))
    }
}

/// Dense table over the 7-bit ANSI range.
pub type AnsiTransitions = FlatTransitions<u8, 128>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flex_absent_symbol_is_invalid() {
        let table: FlexTransitions<u8> = FlexTransitions::default();
        assert_eq!(table.go(b'a'), INVALID_STATE);
    }

    #[test]
    fn flex_put_and_go() {
        let mut table: FlexTransitions<u8> = FlexTransitions::default();
        table.put(b'a', 5);
        table.put(b'b', 7);
        assert_eq!(table.go(b'a'), 5);
        assert_eq!(table.go(b'b'), 7);
        assert_eq!(table.go(b'c'), INVALID_STATE);
    }

    #[test]
    fn flex_put_overwrites() {
        let mut table: FlexTransitions<u8> = FlexTransitions::default();
        table.put(b'a', 5);
        table.put(b'a', 9);
        assert_eq!(table.go(b'a'), 9);
        assert_eq!(table.num_entries(), 1);
    }

    #[test]
    fn flex_entries_in_symbol_order() {
        let mut table: FlexTransitions<u8> = FlexTransitions::default();
        table.put(b'z', 1);
        table.put(b'a', 2);
        table.put(b'm', 3);
        let entries: Vec<(u8, StateId)> = table.entries().collect();
        assert_eq!(entries, vec![(b'a', 2), (b'm', 3), (b'z', 1)]);
    }

    #[test]
    fn flat_defaults_to_invalid() {
        let table = AnsiTransitions::default();
        assert_eq!(table.go(0), INVALID_STATE);
        assert_eq!(table.go(127), INVALID_STATE);
        assert_eq!(table.num_entries(), 0);
    }

    #[test]
    fn flat_put_and_ordered_entries() {
        let mut table = AnsiTransitions::default();
        table.put(b'x', 3);
        table.put(b'a', 4);
        assert_eq!(table.go(b'x'), 3);
        let entries: Vec<(u8, StateId)> = table.entries().collect();
        assert_eq!(entries, vec![(b'a', 4), (b'x', 3)]);
    }

    #[test]
    #[should_panic(expected = "outside dense table")]
    fn flat_rejects_out_of_range_symbol() {
        let mut table = AnsiTransitions::default();
        table.put(200, 1);
    }

    #[test]
    fn u32_symbols_work_in_flex_tables() {
        let mut table: FlexTransitions<u32> = FlexTransitions::default();
        table.put(0x0430, 2);
        assert_eq!(table.go(0x0430), 2);
        assert_eq!(table.go(0x0431), INVALID_STATE);
    }

    #[test]
    fn symbol_wire_round_trip() {
        let mut buf = Vec::new();
        0xABu8.write_wire(&mut buf).unwrap();
        0x1234_5678u32.write_wire(&mut buf).unwrap();
        assert_eq!(buf, vec![0xAB, 0x78, 0x56, 0x34, 0x12]);

        let mut cursor = buf.as_slice();
        assert_eq!(u8::read_wire(&mut cursor).unwrap(), 0xAB);
        assert_eq!(u32::read_wire(&mut cursor).unwrap(), 0x1234_5678);
    }
}
