//! The .hz stream header.
//!
//! Layout: a 4-byte signature, a little-endian u16 count of distinct
//! symbols, then one 9-byte entry per symbol (the symbol itself followed
//! by its little-endian u64 occurrence count) in ascending symbol order.
//! The bit-packed payload starts at the next byte.

use std::io::{self, Read, Write};

use crate::error::HuffError;
use crate::tools::freq_count::FrequencyTable;

/// Stream signature: "hfz" plus a format version.
pub const MAGIC: [u8; 4] = *b"hfz1";

/// Bytes a header occupies for a table with `distinct` symbols.
pub fn header_len(distinct: usize) -> u64 {
    (MAGIC.len() + 2 + distinct * 9) as u64
}

/// Serialize the frequency table as the stream header.
pub fn write_header<W: Write>(sink: &mut W, freqs: &FrequencyTable) -> Result<(), HuffError> {
    let mut header = Vec::with_capacity(header_len(freqs.distinct()) as usize);
    header.extend_from_slice(&MAGIC);
    header.extend_from_slice(&(freqs.distinct() as u16).to_le_bytes());
    for (symbol, count) in freqs.entries() {
        header.push(symbol);
        header.extend_from_slice(&count.to_le_bytes());
    }
    sink.write_all(&header)
        .map_err(|e| HuffError::StreamWrite { source: e })
}

/// Read and validate the header, rebuilding the frequency table.
pub fn read_header<R: Read>(source: &mut R) -> Result<FrequencyTable, HuffError> {
    let mut magic = [0_u8; 4];
    read_exact(source, &mut magic)?;
    if magic != MAGIC {
        return Err(HuffError::BadMagic);
    }

    let mut count_bytes = [0_u8; 2];
    read_exact(source, &mut count_bytes)?;
    let entry_count = u16::from_le_bytes(count_bytes) as usize;
    if entry_count > 256 {
        return Err(HuffError::CorruptStream);
    }

    let mut entries = Vec::with_capacity(entry_count);
    let mut last_symbol: Option<u8> = None;
    for _ in 0..entry_count {
        let mut entry = [0_u8; 9];
        read_exact(source, &mut entry)?;
        let symbol = entry[0];
        let mut count_bytes = [0_u8; 8];
        count_bytes.copy_from_slice(&entry[1..]);
        let count = u64::from_le_bytes(count_bytes);
        // Symbols must be strictly ascending and counts nonzero, or this
        // header did not come from our writer.
        if count == 0 || last_symbol.map_or(false, |prev| prev >= symbol) {
            return Err(HuffError::CorruptStream);
        }
        last_symbol = Some(symbol);
        entries.push((symbol, count));
    }
    Ok(FrequencyTable::from_entries(&entries))
}

/// read_exact with EOF mapped to CorruptStream: a short header is a
/// truncated stream, not an I/O failure.
fn read_exact<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<(), HuffError> {
    source.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => HuffError::CorruptStream,
        _ => HuffError::StreamRead { source: e },
    })
}

#[cfg(test)]
mod test {
    use super::{read_header, write_header, MAGIC};
    use crate::error::HuffError;
    use crate::tools::freq_count::FrequencyTable;

    #[test]
    fn round_trip_test() {
        let freqs = FrequencyTable::from_bytes(b"abracadabra");
        let mut buf = Vec::new();
        write_header(&mut buf, &freqs).unwrap();
        let restored = read_header(&mut buf.as_slice()).unwrap();
        assert_eq!(restored, freqs);
    }

    #[test]
    fn empty_table_round_trip_test() {
        let freqs = FrequencyTable::default();
        let mut buf = Vec::new();
        write_header(&mut buf, &freqs).unwrap();
        assert_eq!(buf.len(), 6);
        let restored = read_header(&mut buf.as_slice()).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn bad_magic_test() {
        let buf = b"nope\x00\x00";
        let err = read_header(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, HuffError::BadMagic));
    }

    #[test]
    fn truncated_header_is_corrupt_test() {
        let freqs = FrequencyTable::from_bytes(b"ab");
        let mut buf = Vec::new();
        write_header(&mut buf, &freqs).unwrap();
        buf.truncate(buf.len() - 3);
        let err = read_header(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, HuffError::CorruptStream));
    }

    #[test]
    fn zero_count_is_corrupt_test() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&1_u16.to_le_bytes());
        buf.push(b'a');
        buf.extend_from_slice(&0_u64.to_le_bytes());
        let err = read_header(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, HuffError::CorruptStream));
    }

    #[test]
    fn unsorted_symbols_are_corrupt_test() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&2_u16.to_le_bytes());
        buf.push(b'b');
        buf.extend_from_slice(&1_u64.to_le_bytes());
        buf.push(b'a');
        buf.extend_from_slice(&1_u64.to_le_bytes());
        let err = read_header(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, HuffError::CorruptStream));
    }
}
