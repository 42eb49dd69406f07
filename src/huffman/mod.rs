//! The huffman module is the coding core of huffzip.
//!
//! A coding pass has four stages: count symbol frequencies, build the tree
//! by repeatedly merging the two lightest nodes, read each symbol's code
//! off its root-to-leaf path, then stream the input through the code table.
//!
//! Decoding walks the same tree bit by bit. Because no code is a prefix of
//! another, the walk landing on a leaf is exactly a code boundary, so no
//! lookahead or backtracking is ever needed.
//!
pub mod code_table;
pub mod decode;
pub mod encode;
pub mod tree;
