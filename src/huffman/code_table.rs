//! Code table extraction.
//!
//! One walk over the finished tree turns every root-to-leaf path into that
//! leaf's code: append 0 descending left, 1 descending right, record the
//! accumulated path on arrival. Because no leaf has descendants, no code
//! can be a prefix of another.

use rustc_hash::FxHashMap;

use super::tree::{HuffmanTree, Node, NodeData};

/// Maps each symbol to its bit path from the root, left = 0 and right = 1.
///
/// Paths are stored as 0/1 bytes, never empty, and the set of paths is
/// prefix-free. Immutable after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u8, Vec<u8>>,
}

impl CodeTable {
    /// Walk the tree once and record every leaf's path.
    ///
    /// The walk keeps its own stack rather than recursing: a heavily skewed
    /// alphabet produces a near-linear-depth tree, and the path count is
    /// bounded only by the alphabet.
    ///
    /// A tree that is a single leaf has no parent-relative path, so its
    /// symbol gets the one-bit code 0 by convention; the decoder honors the
    /// same convention.
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let mut codes = FxHashMap::default();

        if let NodeData::Leaf(symbol) = &tree.root().node_data {
            codes.insert(*symbol, vec![0]);
            return CodeTable { codes };
        }

        let mut stack: Vec<(&Node, Vec<u8>)> = vec![(tree.root(), Vec::new())];
        while let Some((node, path)) = stack.pop() {
            match &node.node_data {
                NodeData::Leaf(symbol) => {
                    codes.insert(*symbol, path);
                }
                NodeData::Kids(left, right) => {
                    let mut right_path = path.clone();
                    right_path.push(1);
                    stack.push((right.as_ref(), right_path));
                    let mut left_path = path;
                    left_path.push(0);
                    stack.push((left.as_ref(), left_path));
                }
            }
        }
        CodeTable { codes }
    }

    /// The bit path for a symbol, if the symbol is in the table.
    pub fn code(&self, symbol: u8) -> Option<&[u8]> {
        self.codes.get(&symbol).map(|c| c.as_slice())
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (symbol, path) pairs in ascending symbol order.
    pub fn entries(&self) -> Vec<(u8, &[u8])> {
        let mut entries: Vec<(u8, &[u8])> =
            self.codes.iter().map(|(&s, c)| (s, c.as_slice())).collect();
        entries.sort_unstable();
        entries
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman::tree::HuffmanTree;
    use crate::tools::freq_count::FrequencyTable;

    fn table_for(data: &[u8]) -> (FrequencyTable, CodeTable) {
        let freqs = FrequencyTable::from_bytes(data);
        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        (freqs, CodeTable::from_tree(&tree))
    }

    #[test]
    fn two_symbols_get_one_bit_each_test() {
        let (_, codes) = table_for(b"aabb");
        assert_eq!(codes.code(b'a'), Some([0_u8].as_slice()));
        assert_eq!(codes.code(b'b'), Some([1_u8].as_slice()));
        assert_eq!(codes.len(), 2);
    }

    #[test]
    fn single_symbol_gets_one_bit_by_convention_test() {
        let (_, codes) = table_for(b"aaaa");
        assert_eq!(codes.code(b'a'), Some([0_u8].as_slice()));
    }

    #[test]
    fn absent_symbol_has_no_code_test() {
        let (_, codes) = table_for(b"aabb");
        assert_eq!(codes.code(b'z'), None);
    }

    #[test]
    fn four_equal_symbols_get_two_bits_each_test() {
        // All weights equal: merges happen in insertion order, so the
        // code assignment is pinned down completely.
        let (_, codes) = table_for(b"abcd");
        assert_eq!(codes.code(b'a'), Some([0, 0].as_slice()));
        assert_eq!(codes.code(b'b'), Some([0, 1].as_slice()));
        assert_eq!(codes.code(b'c'), Some([1, 0].as_slice()));
        assert_eq!(codes.code(b'd'), Some([1, 1].as_slice()));
    }

    #[test]
    fn prefix_freedom_test() {
        let (_, codes) = table_for(b"the quick brown fox jumps over the lazy dog");
        let entries = codes.entries();
        for (a, code_a) in &entries {
            for (b, code_b) in &entries {
                if a == b {
                    continue;
                }
                assert!(
                    !code_b.starts_with(code_a),
                    "code for {:?} is a prefix of the code for {:?}",
                    *a as char,
                    *b as char
                );
            }
        }
    }

    #[test]
    fn weighted_length_is_optimal_test() {
        // The classic distribution from the literature: the optimal
        // prefix-free encoding totals exactly 224 bits.
        let mut data = Vec::new();
        for (symbol, count) in [(b'a', 45), (b'b', 13), (b'c', 12), (b'd', 16), (b'e', 9), (b'f', 5)]
        {
            data.extend(std::iter::repeat(symbol).take(count));
        }
        let (freqs, codes) = table_for(&data);
        let total: u64 = freqs
            .entries()
            .iter()
            .map(|&(s, count)| count * codes.code(s).unwrap().len() as u64)
            .sum();
        assert_eq!(total, 224);
    }
}
