// Binary serialisation for the FSM family.
//
// Image layout (little-endian, fixed-width, no padding):
//   transition table:  u32 entry count, then { symbol, u32 target } pairs
//                      in table iteration order;
//   FSM:               u32 state count (state 0 excluded), then per state
//                      { u8 accept, transition table };
//   attributed FSM:    FSM image, then u32 state count and per state
//                      { u32 attr count, attrs };
//   AC trie:           attributed FSM image, then u32 fail count and the
//                      fail states.

use std::io::{Read, Write};

use crate::aho_corasick::AhoCorasickTrie;
use crate::attr_fsm::AttributedFsm;
use crate::fsm::{Fsm, State};
use crate::transitions::{Symbol, TransitionTable};
use crate::trie::Trie;
use crate::StateId;

/// Failure while reading or writing an automaton image.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("automaton image i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed automaton image: {0}")]
    Malformed(&'static str),
}

fn write_u8<W: Write>(w: &mut W, value: u8) -> Result<(), SerializeError> {
    w.write_all(&[value])?;
    Ok(())
}

fn read_u8<R: Read>(r: &mut R) -> Result<u8, SerializeError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Write one little-endian u32; shared by the storage serialisers built
/// on top of the automaton images.
pub fn write_u32<W: Write>(w: &mut W, value: u32) -> Result<(), SerializeError> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read one little-endian u32.
pub fn read_u32<R: Read>(r: &mut R) -> Result<u32, SerializeError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// An attribute value with a fixed wire width.
pub trait Attribute: Copy + PartialEq {
    fn write_wire<W: Write>(self, w: &mut W) -> std::io::Result<()>;
    fn read_wire<R: Read>(r: &mut R) -> std::io::Result<Self>;
}

impl Attribute for u32 {
    fn write_wire<W: Write>(self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&self.to_le_bytes())
    }

    fn read_wire<R: Read>(r: &mut R) -> std::io::Result<Self> {
        let mut buf = [0u8; 4];
        r.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

impl Attribute for u64 {
    fn write_wire<W: Write>(self, w: &mut W) -> std::io::Result<()> {
        w.write_all(&self.to_le_bytes())
    }

    fn read_wire<R: Read>(r: &mut R) -> std::io::Result<Self> {
        let mut buf = [0u8; 8];
        r.read_exact(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

/// Write one transition table: entry count, then ordered entries.
pub fn write_table<T: TransitionTable, W: Write>(
    table: &T,
    w: &mut W,
) -> Result<(), SerializeError> {
    write_u32(w, table.num_entries() as u32)?;
    for (sym, to) in table.entries() {
        sym.write_wire(w)?;
        write_u32(w, to)?;
    }
    Ok(())
}

/// Read one transition table.
pub fn read_table<T: TransitionTable, R: Read>(r: &mut R) -> Result<T, SerializeError> {
    let count = read_u32(r)?;
    let mut table = T::default();
    for _ in 0..count {
        let sym = T::Sym::read_wire(r)?;
        let to = read_u32(r)?;
        table.put(sym, to);
    }
    Ok(table)
}

/// Write an FSM image.
pub fn write_fsm<T: TransitionTable, W: Write>(
    fsm: &Fsm<T>,
    w: &mut W,
) -> Result<(), SerializeError> {
    let num_states = fsm.states.len() - 1; // state 0 is implicit
    write_u32(w, num_states as u32)?;
    for state in &fsm.states[1..] {
        write_u8(w, state.accept as u8)?;
        write_table(&state.trans, w)?;
    }
    Ok(())
}

/// Read an FSM image, reconstructing the implicit state 0.
pub fn read_fsm<T: TransitionTable, R: Read>(r: &mut R) -> Result<Fsm<T>, SerializeError> {
    let num_states = read_u32(r)? as usize;
    if num_states == 0 {
        return Err(SerializeError::Malformed("automaton without a start state"));
    }
    let mut states = Vec::with_capacity(num_states + 1);
    states.push(State::default());
    for _ in 0..num_states {
        let accept = read_u8(r)? != 0;
        let trans = read_table(r)?;
        states.push(State { trans, accept });
    }
    Ok(Fsm { states })
}

/// Write an attributed FSM image.
pub fn write_attr_fsm<T, A, W>(auto: &AttributedFsm<T, A>, w: &mut W) -> Result<(), SerializeError>
where
    T: TransitionTable,
    A: Attribute,
    W: Write,
{
    write_fsm(&auto.fsm, w)?;
    let num_states = auto.attrs.len() - 1;
    write_u32(w, num_states as u32)?;
    for attrs in &auto.attrs[1..] {
        write_u32(w, attrs.len() as u32)?;
        for &attr in attrs {
            attr.write_wire(w)?;
        }
    }
    Ok(())
}

/// Read an attributed FSM image.
pub fn read_attr_fsm<T, A, R>(r: &mut R) -> Result<AttributedFsm<T, A>, SerializeError>
where
    T: TransitionTable,
    A: Attribute,
    R: Read,
{
    let fsm = read_fsm(r)?;
    let num_states = read_u32(r)? as usize;
    if num_states + 1 != fsm.states.len() {
        return Err(SerializeError::Malformed(
            "attribute image does not match state count",
        ));
    }
    let mut attrs = Vec::with_capacity(num_states + 1);
    attrs.push(Vec::new());
    for _ in 0..num_states {
        let count = read_u32(r)? as usize;
        let mut list = Vec::with_capacity(count);
        for _ in 0..count {
            list.push(A::read_wire(r)?);
        }
        attrs.push(list);
    }
    Ok(AttributedFsm { fsm, attrs })
}

/// Write a trie image (identical to its attributed FSM image).
pub fn write_trie<T, A, W>(trie: &Trie<T, A>, w: &mut W) -> Result<(), SerializeError>
where
    T: TransitionTable,
    A: Attribute,
    W: Write,
{
    write_attr_fsm(&trie.auto, w)
}

/// Read a trie image.
pub fn read_trie<T, A, R>(r: &mut R) -> Result<Trie<T, A>, SerializeError>
where
    T: TransitionTable,
    A: Attribute,
    R: Read,
{
    Ok(Trie {
        auto: read_attr_fsm(r)?,
    })
}

/// Write an Aho-Corasick trie image.
pub fn write_ac_trie<T, A, W>(ac: &AhoCorasickTrie<T, A>, w: &mut W) -> Result<(), SerializeError>
where
    T: TransitionTable,
    A: Attribute,
    W: Write,
{
    write_trie(&ac.trie, w)?;
    write_u32(w, ac.fail.len() as u32)?;
    for &fail_state in &ac.fail {
        write_u32(w, fail_state)?;
    }
    Ok(())
}

/// Read an Aho-Corasick trie image.
pub fn read_ac_trie<T, A, R>(r: &mut R) -> Result<AhoCorasickTrie<T, A>, SerializeError>
where
    T: TransitionTable,
    A: Attribute,
    R: Read,
{
    let trie: Trie<T, A> = read_trie(r)?;
    let count = read_u32(r)? as usize;
    if count != trie.num_states() {
        return Err(SerializeError::Malformed(
            "fail link image does not match state count",
        ));
    }
    let mut fail: Vec<StateId> = Vec::with_capacity(count);
    for _ in 0..count {
        fail.push(read_u32(r)?);
    }
    Ok(AhoCorasickTrie { trie, fail })
}
