// Suffix lines: per-line maps between encoded suffixes and packed
// attributes.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{Read, Write};

use slovo_automata::serializer::{read_u32, write_u32};
use slovo_automata::SerializeError;

use crate::MorphoError;

/// The stored form of the empty suffix. Keys are kept non-empty by
/// encoding "no suffix" as a single NUL byte.
pub const NULL_SUFFIX: &[u8] = &[0];

#[derive(Debug, Clone, Default)]
struct SuffixLine {
    /// `suffix -> attrs`; the same suffix may carry several packings
    /// (morphological ambiguity), appended in insertion order.
    by_suffix: BTreeMap<Vec<u8>, Vec<u32>>,
    /// `attr -> suffix`; the primary suffix used for generation. The last
    /// recorded suffix for an attribute wins, so import order decides.
    by_attr: BTreeMap<u32, Vec<u8>>,
}

/// Ordered sequence of suffix lines.
///
/// A line id, once allocated, is stable. Every `(suffix, attr)` pair
/// recorded through the builder appears in both per-line maps.
#[derive(Debug, Clone, Default)]
pub struct SuffixStorage {
    lines: Vec<SuffixLine>,
}

impl SuffixStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated lines.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Append an empty line and return its id.
    pub(crate) fn add_line(&mut self) -> u32 {
        self.lines.push(SuffixLine::default());
        (self.lines.len() - 1) as u32
    }

    /// Record `(suffix, attr)` on a line. The suffix must already be
    /// encoded and non-empty (use [`NULL_SUFFIX`] for the empty suffix).
    pub(crate) fn add_suffix(
        &mut self,
        line: u32,
        attr: u32,
        suffix: Vec<u8>,
    ) -> Result<(), MorphoError> {
        let entry = self
            .lines
            .get_mut(line as usize)
            .ok_or(MorphoError::InvalidLine(line))?;
        entry
            .by_suffix
            .entry(suffix.clone())
            .or_default()
            .push(attr);
        entry.by_attr.insert(attr, suffix);
        Ok(())
    }

    /// Attribute packings recorded for `suffix` on `line`, in insertion
    /// order; empty when the suffix is unknown.
    ///
    /// Panics when `line` was never allocated.
    pub fn lookup_attrs(&self, line: u32, suffix: &[u8]) -> &[u32] {
        let entry = self.line(line);
        entry
            .by_suffix
            .get(suffix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The primary suffix recorded for `attr` on `line`.
    ///
    /// Panics when `line` was never allocated.
    pub fn lookup_suffix(&self, line: u32, attr: u32) -> Option<&[u8]> {
        self.line(line).by_attr.get(&attr).map(Vec::as_slice)
    }

    /// The set of primary suffixes of a line.
    ///
    /// Panics when `line` was never allocated.
    pub fn all_suffixes(&self, line: u32) -> BTreeSet<&[u8]> {
        self.line(line).by_attr.values().map(Vec::as_slice).collect()
    }

    fn line(&self, line: u32) -> &SuffixLine {
        self.lines
            .get(line as usize)
            .unwrap_or_else(|| panic!("suffix line {line} does not exist"))
    }

    pub fn serialize<W: Write>(&self, w: &mut W) -> Result<(), SerializeError> {
        write_u32(w, self.lines.len() as u32)?;
        for line in &self.lines {
            write_u32(w, line.by_suffix.len() as u32)?;
            for (suffix, attrs) in &line.by_suffix {
                write_bytes(w, suffix)?;
                write_u32(w, attrs.len() as u32)?;
                for &attr in attrs {
                    write_u32(w, attr)?;
                }
            }
            write_u32(w, line.by_attr.len() as u32)?;
            for (&attr, suffix) in &line.by_attr {
                write_u32(w, attr)?;
                write_bytes(w, suffix)?;
            }
        }
        Ok(())
    }

    pub fn deserialize<R: Read>(r: &mut R) -> Result<Self, SerializeError> {
        let num_lines = read_u32(r)? as usize;
        let mut lines = Vec::with_capacity(num_lines);
        for _ in 0..num_lines {
            let mut line = SuffixLine::default();
            let suffix_count = read_u32(r)? as usize;
            for _ in 0..suffix_count {
                let suffix = read_bytes(r)?;
                let attr_count = read_u32(r)? as usize;
                let mut attrs = Vec::with_capacity(attr_count);
                for _ in 0..attr_count {
                    attrs.push(read_u32(r)?);
                }
                line.by_suffix.insert(suffix, attrs);
            }
            let attr_count = read_u32(r)? as usize;
            for _ in 0..attr_count {
                let attr = read_u32(r)?;
                let suffix = read_bytes(r)?;
                line.by_attr.insert(attr, suffix);
            }
            lines.push(line);
        }
        Ok(Self { lines })
    }
}

fn write_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> Result<(), SerializeError> {
    write_u32(w, bytes.len() as u32)?;
    w.write_all(bytes).map_err(SerializeError::Io)
}

fn read_bytes<R: Read>(r: &mut R) -> Result<Vec<u8>, SerializeError> {
    let len = read_u32(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf).map_err(SerializeError::Io)?;
    Ok(buf)
}
