//! The encoder: streams symbols into their Huffman codes.

use std::io::{self, Read, Write};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;

use super::code_table::CodeTable;

const BUFFER_SIZE: usize = 64 * 1024;

/// Encode every symbol readable from `source` into `sink`, in input order.
///
/// Returns the number of bits pushed. A symbol with no entry in the table
/// is an error. That cannot happen when the table was derived from this
/// input's own frequencies, but a mismatched or corrupted table must not
/// encode silently wrong output.
pub fn encode<R: Read, W: Write>(
    codes: &CodeTable,
    mut source: R,
    sink: &mut BitWriter<W>,
) -> Result<u64, HuffError> {
    let start = sink.bit_count();
    let mut buffer = [0_u8; BUFFER_SIZE];
    loop {
        let n = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(HuffError::StreamRead { source: e }),
        };
        for &symbol in &buffer[..n] {
            let code = codes
                .code(symbol)
                .ok_or(HuffError::MissingCode { symbol })?;
            for &bit in code {
                sink.push_bit(bit == 1)
                    .map_err(|e| HuffError::StreamWrite { source: e })?;
            }
        }
    }
    Ok(sink.bit_count() - start)
}
