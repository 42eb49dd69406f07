//! A Huffman coding file compressor.
//!
//! huffzip builds an optimal prefix-free binary code from the byte
//! frequencies of its input, then packs the input into the coded bit
//! stream. The compressed artifact carries the frequency table as its
//! header, so the decoding side can rebuild the identical tree and replay
//! the stream without any side channel.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.hz.
//! The original file will be deleted unless -k is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman;
pub mod tools;
