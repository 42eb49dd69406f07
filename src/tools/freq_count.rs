//! Symbol frequency analysis for huffzip.
//!
//! The frequency table is the seed of everything downstream: the tree is
//! built from it, the header serializes it, and its total is the exact
//! symbol count the decoder replays.

use std::io::{self, Read};

use rustc_hash::FxHashMap;

const BUFFER_SIZE: usize = 64 * 1024;

/// Occurrence counts for every symbol seen in an input stream.
///
/// Every stored count is at least 1; symbols that never occurred have no
/// entry. A table is filled once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<u8, u64>,
}

impl FrequencyTable {
    /// Count every byte in the slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = FxHashMap::default();
        for &byte in data {
            *counts.entry(byte).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count every byte readable from the source.
    ///
    /// Counting stops at the first read failure. The counts gathered up to
    /// that point are returned alongside the error so the caller can decide
    /// what to do with the partial result; nothing is rolled back. An empty
    /// source yields an empty table and no error.
    pub fn from_reader<R: Read>(mut source: R) -> (Self, Option<io::Error>) {
        let mut counts = FxHashMap::default();
        let mut buffer = [0_u8; BUFFER_SIZE];
        loop {
            match source.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &buffer[..n] {
                        *counts.entry(byte).or_insert(0) += 1;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return (Self { counts }, Some(e)),
            }
        }
        (Self { counts }, None)
    }

    /// Rebuild a table from stored (symbol, count) pairs.
    ///
    /// Used by the container header reader, which validates that counts are
    /// nonzero and symbols unique before calling.
    pub fn from_entries(entries: &[(u8, u64)]) -> Self {
        let mut counts = FxHashMap::default();
        for &(symbol, count) in entries {
            counts.insert(symbol, count);
        }
        Self { counts }
    }

    /// Count for one symbol; 0 when the symbol never occurred.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbol was ever counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the stream length in symbols.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// (symbol, count) pairs in ascending symbol order.
    ///
    /// The fixed order is what makes tree construction and the serialized
    /// header reproducible.
    pub fn entries(&self) -> Vec<(u8, u64)> {
        let mut entries: Vec<(u8, u64)> = self.counts.iter().map(|(&s, &c)| (s, c)).collect();
        entries.sort_unstable();
        entries
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyTable;
    use std::io;

    #[test]
    fn count_test() {
        let table = FrequencyTable::from_bytes(b"abracadabra");
        assert_eq!(table.count(b'a'), 5);
        assert_eq!(table.count(b'b'), 2);
        assert_eq!(table.count(b'r'), 2);
        assert_eq!(table.count(b'c'), 1);
        assert_eq!(table.count(b'd'), 1);
        assert_eq!(table.count(b'z'), 0);
        assert_eq!(table.distinct(), 5);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn empty_stream_test() {
        let (table, err) = FrequencyTable::from_reader(io::empty());
        assert!(err.is_none());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn reader_matches_slice_test() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let (from_reader, err) = FrequencyTable::from_reader(data.as_slice());
        assert!(err.is_none());
        assert_eq!(from_reader, FrequencyTable::from_bytes(data));
    }

    #[test]
    fn idempotent_test() {
        let data = b"mississippi";
        let first = FrequencyTable::from_bytes(data);
        let second = FrequencyTable::from_bytes(data);
        assert_eq!(first, second);
    }

    #[test]
    fn entries_sorted_test() {
        let table = FrequencyTable::from_bytes(b"cba");
        assert_eq!(table.entries(), vec![(b'a', 1), (b'b', 1), (b'c', 1)]);
    }

    /// A source that yields its data and then fails instead of reporting EOF.
    struct BrokenSource {
        data: Vec<u8>,
        pos: usize,
    }

    impl io::Read for BrokenSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.data.len() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
            }
            let n = buf.len().min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn partial_table_on_read_error_test() {
        let (table, err) = FrequencyTable::from_reader(BrokenSource {
            data: b"aab".to_vec(),
            pos: 0,
        });
        // The failure is reported AND the partial counts survive
        assert!(err.is_some());
        assert_eq!(table.count(b'a'), 2);
        assert_eq!(table.count(b'b'), 1);
    }
}
