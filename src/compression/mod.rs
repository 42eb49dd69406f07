//! The compression module manages whole streams and files.
//!
//! Compression makes two passes over the input:
//! - Frequency scan: count every byte.
//! - Encode: write the frequency table as the stream header, then emit each
//!   byte's Huffman code into the packed payload.
//!
//! The raw payload is deliberately not self-describing (the tree is the
//! only decoding key), so the header ships the frequency table in-band.
//! Decompression reads it back, rebuilds the same tree (construction is
//! deterministic), and replays exactly the symbol count the table implies,
//! which also keeps trailing pad bits from being misread as data.
//!
pub mod compress;
pub mod decompress;
pub mod header;
