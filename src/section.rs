use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::{Decoded, Decoder};
use crate::disasm::{render_with, DumpConfig};
use crate::error::Result;
use crate::memory::{WordSource, WORD_BYTES};

/// A named run of code bytes loaded at `base`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl WordSource for Section {
    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Decodes every word of `src` in order, stopping at the first failure.
pub fn decode_words<S, D>(src: &S, dec: &D) -> Result<Vec<Decoded>>
where
    S: WordSource + ?Sized,
    D: Decoder,
{
    (0..src.word_count())
        .map(|index| {
            src.word_at(index * WORD_BYTES)
                .and_then(|raw| dec.decode(raw))
                .map_err(|e| e.at(index))
        })
        .collect()
}

/// Same result as [`decode_words`], with the words decoded on the rayon pool.
pub fn decode_words_par<S, D>(src: &S, dec: &D) -> Result<Vec<Decoded>>
where
    S: WordSource + Sync + ?Sized,
    D: Decoder + Sync,
{
    let results: Vec<Result<Decoded>> = (0..src.word_count())
        .into_par_iter()
        .map(|index| {
            src.word_at(index * WORD_BYTES)
                .and_then(|raw| dec.decode(raw))
                .map_err(|e| e.at(index))
        })
        .collect();
    // collect() keeps index order, so the first Err is the lowest failing word
    results.into_iter().collect()
}

/// A decoded section, ready to be dumped.
#[derive(Debug, Clone)]
pub struct Listing {
    pub section_name: String,
    pub base: u32,
    pub instrs: Vec<Decoded>,
}

impl Listing {
    pub fn from_section<D: Decoder + Sync>(section: &Section, dec: &D) -> Result<Self> {
        debug!(name = %section.name, bytes = section.bytes.len(), "decoding section");
        let instrs = decode_words_par(section, dec)?;
        Ok(Self { section_name: section.name.clone(), base: section.base, instrs })
    }

    pub fn dump(&self, indent: &str) -> Result<String> {
        let cfg = DumpConfig { indent: indent.to_string(), ..DumpConfig::default() };
        render_with(&self.instrs, &self.section_name, &cfg)
    }

    /// Address of each instruction, paired with it.
    pub fn iter_addrs(&self) -> impl Iterator<Item = (u32, &Decoded)> + '_ {
        self.instrs
            .iter()
            .enumerate()
            .map(move |(i, d)| (self.base.wrapping_add((i * WORD_BYTES) as u32), d))
    }
}
