use crate::error::{DvError, DvResult};
use crate::layouts::{KnownLayout, DVORAK, QWERTY};
use rayon::prelude::*;
use strum_macros::{Display, EnumIter, EnumString};

/// Buffers shorter than this are transcoded on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 64 * 1024;
const PARALLEL_CHUNK: usize = 16 * 1024;

static STANDARD: Transcoder = Transcoder::compile(QWERTY, DVORAK);

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Dvorak-table byte -> QWERTY-table byte at the same position.
    Encode,
    /// QWERTY-table byte -> Dvorak-table byte at the same position.
    Decode,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Self::Encode => Self::Decode,
            Self::Decode => Self::Encode,
        }
    }
}

/// Positional substitution between two keyboard layout tables.
///
/// Both directions are precomputed into 256-entry arrays indexed by byte
/// value, so every lookup is a single load. Bytes absent from a table map
/// to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transcoder {
    encode_map: [u8; 256],
    decode_map: [u8; 256],
    len: usize,
}

impl Transcoder {
    /// Builds a transcoder from a pair of tables, rejecting mismatched
    /// lengths and repeated entries.
    pub fn new(qwerty: &[u8], dvorak: &[u8]) -> DvResult<Self> {
        validate_tables(qwerty, dvorak)?;
        Ok(Self::build(qwerty, dvorak))
    }

    /// The built-in QWERTY/Dvorak pairing.
    pub fn standard() -> &'static Transcoder {
        &STANDARD
    }

    pub fn from_layouts(qwerty: KnownLayout, dvorak: KnownLayout) -> DvResult<Self> {
        Self::new(qwerty.table(), dvorak.table())
    }

    // Compile-time counterpart of `new`; a malformed table fails the build.
    const fn compile(qwerty: &[u8], dvorak: &[u8]) -> Self {
        assert!(qwerty.len() == dvorak.len(), "layout tables differ in length");
        assert!(!has_duplicate(qwerty), "qwerty table has a duplicate entry");
        assert!(!has_duplicate(dvorak), "dvorak table has a duplicate entry");
        Self::build(qwerty, dvorak)
    }

    const fn build(qwerty: &[u8], dvorak: &[u8]) -> Self {
        let mut encode_map = identity_map();
        let mut decode_map = identity_map();
        let mut i = 0;
        while i < qwerty.len() {
            encode_map[dvorak[i] as usize] = qwerty[i];
            decode_map[qwerty[i] as usize] = dvorak[i];
            i += 1;
        }
        Self {
            encode_map,
            decode_map,
            len: qwerty.len(),
        }
    }

    /// Number of key positions shared by the two tables.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn encode(&self, c: u8) -> u8 {
        self.encode_map[c as usize]
    }

    #[inline]
    pub fn decode(&self, c: u8) -> u8 {
        self.decode_map[c as usize]
    }

    #[inline]
    pub fn apply(&self, direction: Direction, c: u8) -> u8 {
        self.map(direction)[c as usize]
    }

    pub fn transcode(&self, direction: Direction, input: &[u8]) -> Vec<u8> {
        let mut out = input.to_vec();
        self.transcode_in_place(direction, &mut out);
        out
    }

    /// Rewrites every byte of `buf` in place. Large buffers are split into
    /// chunks and processed on the rayon pool; positions never move.
    pub fn transcode_in_place(&self, direction: Direction, buf: &mut [u8]) {
        let map = self.map(direction);
        if buf.len() < PARALLEL_THRESHOLD {
            substitute(map, buf);
        } else {
            buf.par_chunks_mut(PARALLEL_CHUNK)
                .for_each(|chunk| substitute(map, chunk));
        }
    }

    fn map(&self, direction: Direction) -> &[u8; 256] {
        match direction {
            Direction::Encode => &self.encode_map,
            Direction::Decode => &self.decode_map,
        }
    }
}

impl Default for Transcoder {
    fn default() -> Self {
        STANDARD
    }
}

/// Encodes one byte with the built-in tables.
pub fn encode(c: u8) -> u8 {
    STANDARD.encode(c)
}

/// Decodes one byte with the built-in tables.
pub fn decode(c: u8) -> u8 {
    STANDARD.decode(c)
}

pub fn validate_tables(qwerty: &[u8], dvorak: &[u8]) -> DvResult<()> {
    if qwerty.len() != dvorak.len() {
        return Err(DvError::TableLengthMismatch {
            qwerty: qwerty.len(),
            dvorak: dvorak.len(),
        });
    }
    check_unique(KnownLayout::Qwerty, qwerty)?;
    check_unique(KnownLayout::Dvorak, dvorak)
}

fn check_unique(layout: KnownLayout, table: &[u8]) -> DvResult<()> {
    let mut seen: [Option<usize>; 256] = [None; 256];
    for (i, &b) in table.iter().enumerate() {
        if let Some(first) = seen[b as usize] {
            return Err(DvError::DuplicateEntry {
                layout: layout.into(),
                byte: b,
                first,
                second: i,
            });
        }
        seen[b as usize] = Some(i);
    }
    Ok(())
}

fn substitute(map: &[u8; 256], buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = map[*b as usize];
    }
}

const fn identity_map() -> [u8; 256] {
    let mut map = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        map[i] = i as u8;
        i += 1;
    }
    map
}

const fn has_duplicate(table: &[u8]) -> bool {
    let mut seen = [false; 256];
    let mut i = 0;
    while i < table.len() {
        if seen[table[i] as usize] {
            return true;
        }
        seen[table[i] as usize] = true;
        i += 1;
    }
    false
}
