//! The precomputed 7-card lookup table and its state-machine evaluator.
//!
//! The table is a 32,487,834-entry array of `u32` transitions, shipped as
//! 13 little-endian binary chunks and loaded at runtime. Evaluation walks
//! one transition per card from state 53; after seven cards the state
//! encodes the hand's category and its rank within the category, which a
//! fixed offset table converts to the canonical 5-card evaluation rank.
//! Outputs agree bit-for-bit with [`rank_five`](crate::rank_five) applied
//! to the best 5-card subset.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{error, info, warn};
use md5::{Digest, Md5};
use once_cell::sync::OnceCell;

use vega_base::{Card, Suit};

use crate::EvalRank;

/// Total number of `u32` entries in the table.
pub const ENTRY_COUNT: usize = 32_487_834;

/// Number of binary chunks the table is shipped in.
pub const CHUNK_COUNT: usize = 13;

/// Entries per chunk, except for the final chunk.
pub const CHUNK_ENTRIES: usize = 2_621_440;

/// Entries in the final chunk.
pub const LAST_CHUNK_ENTRIES: usize = 1_030_554;

/// MD5 of the concatenated little-endian table produced by the reference
/// generator.
pub const REFERENCE_MD5: &str = "5de2fa6f53f4340d7d91ad605a6400fb";

/// Converts a final automaton state to the canonical evaluation rank:
/// `OFFSETS[category] - rank_within_category`, categories 1 (high card)
/// through 9 (straight flush).
const CATEGORY_OFFSETS: [u16; 10] = [0, 7463, 6186, 3326, 2468, 1610, 1600, 323, 167, 11];

/// An error raised while loading the lookup table.
///
/// Loading fails fast: a table that is the wrong size or does not match
/// the reference digest is never installed.
#[derive(Debug)]
pub enum TableError {
    Io(io::Error),
    /// A chunk's byte length is not a multiple of 4.
    ChunkSize { chunk: usize, bytes: usize },
    /// The concatenated table has the wrong number of entries.
    TotalSize { entries: usize },
    /// The concatenated table does not match [`REFERENCE_MD5`].
    Digest { computed: String },
    /// A table has already been installed for this process.
    AlreadyInstalled,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "failed to read table chunk: {}", err),
            TableError::ChunkSize { chunk, bytes } => {
                write!(f, "chunk {} is {} bytes, not a multiple of 4", chunk, bytes)
            }
            TableError::TotalSize { entries } => {
                write!(f, "table has {} entries, expected {}", entries, ENTRY_COUNT)
            }
            TableError::Digest { computed } => {
                write!(f, "table digest {} does not match {}", computed, REFERENCE_MD5)
            }
            TableError::AlreadyInstalled => write!(f, "a lookup table is already installed"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TableError {
    fn from(err: io::Error) -> TableError {
        TableError::Io(err)
    }
}

static TABLE: OnceCell<TwoPlusTwoTable> = OnceCell::new();

/// The 7-card lookup table.
#[derive(Debug)]
pub struct TwoPlusTwoTable {
    entries: Vec<u32>,
}

impl TwoPlusTwoTable {
    /// Assembles a table from its binary chunks, verifying sizes and,
    /// unless disabled, the reference digest.
    pub fn from_chunks<I>(chunks: I, verify_digest: bool) -> Result<TwoPlusTwoTable, TableError>
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut entries = Vec::new();
        let mut hasher = Md5::new();

        for (chunk_idx, chunk) in chunks.into_iter().enumerate() {
            if chunk.len() % 4 != 0 {
                error!(
                    "rejecting lookup table: chunk {} has a truncated entry",
                    chunk_idx
                );
                return Err(TableError::ChunkSize {
                    chunk: chunk_idx,
                    bytes: chunk.len(),
                });
            }

            hasher.update(&chunk);
            entries.extend(
                chunk
                    .chunks_exact(4)
                    .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]])),
            );
        }

        if entries.len() != ENTRY_COUNT {
            error!(
                "rejecting lookup table: {} entries instead of {}",
                entries.len(),
                ENTRY_COUNT
            );
            return Err(TableError::TotalSize {
                entries: entries.len(),
            });
        }

        let computed: String = hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        if computed != REFERENCE_MD5 {
            if verify_digest {
                error!("rejecting lookup table: digest mismatch ({})", computed);
                return Err(TableError::Digest { computed });
            }
            warn!(
                "lookup table digest {} does not match the reference; continuing unverified",
                computed
            );
        }

        info!("loaded 7-card lookup table ({} entries)", entries.len());
        Ok(TwoPlusTwoTable { entries })
    }

    /// Loads the table from a directory holding the 13 chunk files
    /// `twoplustwo.00.bin` through `twoplustwo.12.bin`.
    pub fn load_dir(dir: &Path, verify_digest: bool) -> Result<TwoPlusTwoTable, TableError> {
        let chunks = (0..CHUNK_COUNT)
            .map(|i| fs::read(dir.join(format!("twoplustwo.{:02}.bin", i))))
            .collect::<Result<Vec<_>, _>>()?;
        TwoPlusTwoTable::from_chunks(chunks, verify_digest)
    }

    /// Installs this table as the process-wide instance used by
    /// [`rank_seven`](crate::rank_seven). Can only happen once.
    pub fn install(self) -> Result<(), TableError> {
        TABLE.set(self).map_err(|_| TableError::AlreadyInstalled)
    }

    /// Returns the installed process-wide table, if any.
    pub fn global() -> Option<&'static TwoPlusTwoTable> {
        TABLE.get()
    }

    /// Ranks the best 5-card hand among 5, 6 or 7 cards.
    ///
    /// Any other input size evaluates to [`EvalRank::INVALID`].
    pub fn rank_of(&self, cards: &[Card]) -> EvalRank {
        if !(5..=7).contains(&cards.len()) {
            return EvalRank::INVALID;
        }

        let mut state = 53u32;
        for card in cards {
            state = self.entries[state as usize + table_index(card)];
        }
        if cards.len() < 7 {
            state = self.entries[state as usize];
        }

        decode(state)
    }

    /// Ranks the best 5-card hand among exactly 7 cards.
    #[inline]
    pub fn rank_seven(&self, cards: &[Card; 7]) -> EvalRank {
        self.rank_of(cards)
    }
}

pub(crate) fn installed() -> Option<&'static TwoPlusTwoTable> {
    TwoPlusTwoTable::global()
}

/// The table's 1-based card index: deuce of clubs first, ace of spades last.
fn table_index(card: &Card) -> usize {
    let suit = match card.suit() {
        Suit::Club => 0,
        Suit::Diamond => 1,
        Suit::Heart => 2,
        Suit::Spade => 3,
    };
    4 * card.rank_index() as usize + suit + 1
}

fn decode(state: u32) -> EvalRank {
    let category = (state >> 12) as usize;
    let sub_rank = (state & 0xfff) as u16;
    if category == 0 || category > 9 {
        return EvalRank::INVALID;
    }

    EvalRank(CATEGORY_OFFSETS[category] - sub_rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_maps_band_edges() {
        // Straight-flush category: the 10th and best is the royal flush.
        assert_eq!(decode((9 << 12) | 10), EvalRank(1));
        assert_eq!(decode((9 << 12) | 1), EvalRank(10));

        // High-card category: the single worst hand of all.
        assert_eq!(decode((1 << 12) | 1), EvalRank(7462));
        assert_eq!(decode((1 << 12) | 1277), EvalRank(6186));

        // Reserved category 0 never decodes.
        assert_eq!(decode(0), EvalRank::INVALID);
    }

    #[test]
    fn card_indices_span_the_deck() {
        let mut seen = [false; 53];
        for card in vega_base::CARDS.iter() {
            let idx = table_index(card);
            assert!((1..=52).contains(&idx));
            assert!(!seen[idx]);
            seen[idx] = true;
        }

        assert_eq!(table_index(&"2c".parse().unwrap()), 1);
        assert_eq!(table_index(&"2d".parse().unwrap()), 2);
        assert_eq!(table_index(&"As".parse().unwrap()), 52);
    }

    #[test]
    fn loader_rejects_truncated_chunks() {
        let err = TwoPlusTwoTable::from_chunks([vec![0u8; 7]], true).unwrap_err();
        assert!(matches!(err, TableError::ChunkSize { chunk: 0, bytes: 7 }));
    }

    #[test]
    fn loader_rejects_wrong_totals() {
        let err = TwoPlusTwoTable::from_chunks([vec![0u8; 4096]], true).unwrap_err();
        assert!(matches!(err, TableError::TotalSize { entries: 1024 }));
    }

    #[test]
    fn loader_rejects_corrupt_digests() {
        let mut chunks: Vec<Vec<u8>> = (0..CHUNK_COUNT - 1)
            .map(|_| vec![0u8; CHUNK_ENTRIES * 4])
            .collect();
        chunks.push(vec![0u8; LAST_CHUNK_ENTRIES * 4]);

        let err = TwoPlusTwoTable::from_chunks(chunks.clone(), true).unwrap_err();
        assert!(matches!(err, TableError::Digest { .. }));

        // With verification off the same bytes load.
        let table = TwoPlusTwoTable::from_chunks(chunks, false).unwrap();
        assert_eq!(table.entries.len(), ENTRY_COUNT);
    }

    #[test]
    fn loader_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = TwoPlusTwoTable::load_dir(dir.path(), true).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
