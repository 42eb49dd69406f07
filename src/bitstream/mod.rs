//! The bitstream module forms the bit-level I/O subsystem for huffzip.
//!
//! Huffman codes are variable-length bit strings, so neither side of the
//! codec can work a byte at a time: the writer packs code bits into whole
//! bytes and the reader unpacks bytes back into single bits, most
//! significant bit first.
//!
//! Both sides are generic over the underlying byte stream and buffer their
//! I/O, so the drivers hand them files while the tests drive them from
//! slices and vectors.
//!
pub mod bitreader;
pub mod bitwriter;
