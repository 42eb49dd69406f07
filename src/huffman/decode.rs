//! The decoder: walks the tree bit by bit back to symbols.

use std::io::{Read, Write};
use std::ptr;

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;

use super::tree::{HuffmanTree, Node, NodeData};

const BUFFER_SIZE: usize = 64 * 1024;

/// Decode until the bit source is exhausted. Returns the symbol count.
///
/// The cursor starts at the root and moves left on 0, right on 1; landing
/// on a leaf emits that leaf's symbol and resets the cursor. Prefix-freedom
/// guarantees the landing is exactly a code boundary. A source that ends
/// while the cursor is mid-path is truncated or corrupt.
pub fn decode<R: Read, W: Write>(
    tree: &HuffmanTree,
    bits: &mut BitReader<R>,
    sink: &mut W,
) -> Result<u64, HuffError> {
    decode_inner(tree, bits, sink, None)
}

/// Decode exactly `count` symbols, then stop.
///
/// This is the variant the container driver uses: the stream header says
/// how many symbols to replay, so the zero bits padding the final payload
/// byte are never misread as data. Running out of bits before the count is
/// reached is corruption no matter where the cursor stands.
pub fn decode_count<R: Read, W: Write>(
    tree: &HuffmanTree,
    bits: &mut BitReader<R>,
    sink: &mut W,
    count: u64,
) -> Result<u64, HuffError> {
    decode_inner(tree, bits, sink, Some(count))
}

fn decode_inner<R: Read, W: Write>(
    tree: &HuffmanTree,
    bits: &mut BitReader<R>,
    sink: &mut W,
    limit: Option<u64>,
) -> Result<u64, HuffError> {
    let mut out: Vec<u8> = Vec::with_capacity(BUFFER_SIZE);
    let mut emitted = 0_u64;

    // A lone-leaf tree gives the cursor nowhere to go: by the encoding
    // convention every bit read stands for one occurrence of the symbol.
    if let NodeData::Leaf(symbol) = &tree.root().node_data {
        let symbol = *symbol;
        while limit != Some(emitted) {
            match next_bit(bits)? {
                Some(_) => {
                    out.push(symbol);
                    emitted += 1;
                    if out.len() == BUFFER_SIZE {
                        write_out(sink, &mut out)?;
                    }
                }
                None => {
                    if limit.is_some() {
                        // Fewer bits than symbols promised
                        return Err(HuffError::CorruptStream);
                    }
                    break;
                }
            }
        }
        write_out(sink, &mut out)?;
        return Ok(emitted);
    }

    let mut cursor = tree.root();
    while limit != Some(emitted) {
        let bit = match next_bit(bits)? {
            Some(bit) => bit,
            None => {
                if limit.is_some() || !ptr::eq(cursor, tree.root()) {
                    // Mid-path, or short of the promised symbol count
                    return Err(HuffError::CorruptStream);
                }
                break;
            }
        };
        match &cursor.node_data {
            NodeData::Kids(left, right) => {
                let next: &Node = if bit { right } else { left };
                if let NodeData::Leaf(symbol) = &next.node_data {
                    out.push(*symbol);
                    emitted += 1;
                    cursor = tree.root();
                    if out.len() == BUFFER_SIZE {
                        write_out(sink, &mut out)?;
                    }
                } else {
                    cursor = next;
                }
            }
            // The lone-leaf root was handled above; the cursor never rests
            // on an interior leaf.
            NodeData::Leaf(_) => return Err(HuffError::CorruptStream),
        }
    }
    write_out(sink, &mut out)?;
    Ok(emitted)
}

fn next_bit<R: Read>(bits: &mut BitReader<R>) -> Result<Option<bool>, HuffError> {
    bits.bit().map_err(|e| HuffError::StreamRead { source: e })
}

fn write_out<W: Write>(sink: &mut W, out: &mut Vec<u8>) -> Result<(), HuffError> {
    if !out.is_empty() {
        sink.write_all(out)
            .map_err(|e| HuffError::StreamWrite { source: e })?;
        out.clear();
    }
    Ok(())
}
