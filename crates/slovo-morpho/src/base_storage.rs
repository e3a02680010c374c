// Word-base storage: lemma id to encoded base, main form and suffix line.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use slovo_automata::serializer::{read_u32, write_u32};
use slovo_automata::SerializeError;

/// One lemma's stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaInfo {
    pub(crate) base: Vec<u8>,
    pub(crate) main_form: String,
    pub(crate) line_id: u32,
}

impl LemmaInfo {
    /// The alphabet-encoded base bytes.
    pub fn base(&self) -> &[u8] {
        &self.base
    }

    /// The canonical surface form, UTF-8.
    pub fn main_form(&self) -> &str {
        &self.main_form
    }

    /// The suffix line this lemma inflects by.
    pub fn line_id(&self) -> u32 {
        self.line_id
    }
}

/// `lemma id -> LemmaInfo` map.
#[derive(Debug, Clone, Default)]
pub struct BaseStorage {
    storage: BTreeMap<u32, LemmaInfo>,
}

impl BaseStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub(crate) fn insert(&mut self, lemma_id: u32, info: LemmaInfo) {
        self.storage.insert(lemma_id, info);
    }

    /// The stored data for a lemma, if any.
    pub fn lookup(&self, lemma_id: u32) -> Option<&LemmaInfo> {
        self.storage.get(&lemma_id)
    }

    /// The canonical surface form of a lemma, if any.
    pub fn main_form(&self, lemma_id: u32) -> Option<&str> {
        self.storage.get(&lemma_id).map(|info| info.main_form.as_str())
    }

    pub fn serialize<W: Write>(&self, w: &mut W) -> Result<(), SerializeError> {
        write_u32(w, self.storage.len() as u32)?;
        for (&lemma_id, info) in &self.storage {
            write_u32(w, lemma_id)?;
            write_u32(w, info.line_id)?;
            write_u32(w, info.base.len() as u32)?;
            w.write_all(&info.base)?;
            write_u32(w, info.main_form.len() as u32)?;
            w.write_all(info.main_form.as_bytes())?;
        }
        Ok(())
    }

    pub fn deserialize<R: Read>(r: &mut R) -> Result<Self, SerializeError> {
        let count = read_u32(r)? as usize;
        let mut storage = BTreeMap::new();
        for _ in 0..count {
            let lemma_id = read_u32(r)?;
            let line_id = read_u32(r)?;
            let base_len = read_u32(r)? as usize;
            let mut base = vec![0u8; base_len];
            r.read_exact(&mut base)?;
            let form_len = read_u32(r)? as usize;
            let mut form = vec![0u8; form_len];
            r.read_exact(&mut form)?;
            let main_form = String::from_utf8(form)
                .map_err(|_| SerializeError::Malformed("main form is not UTF-8"))?;
            storage.insert(
                lemma_id,
                LemmaInfo {
                    base,
                    main_form,
                    line_id,
                },
            );
        }
        Ok(Self { storage })
    }
}
