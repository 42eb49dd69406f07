//! Compression driver: whole streams and whole files.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman::code_table::CodeTable;
use crate::huffman::encode::encode;
use crate::huffman::tree::HuffmanTree;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::FrequencyTable;

use super::header::{header_len, write_header};

/// File name suffix for compressed output.
pub const SUFFIX: &str = ".hz";

/// What one compression pass produced, for reporting.
#[derive(Debug)]
pub struct CompressSummary {
    /// Symbols read from the input.
    pub symbols: u64,
    /// Bits of coded payload, before padding.
    pub payload_bits: u64,
    /// Zero bits padding the final payload byte.
    pub pad_bits: u8,
    /// Total compressed size, header included.
    pub out_bytes: u64,
}

/// Compress every file named in the options.
pub fn compress(opts: &HuffOpts) -> Result<(), HuffError> {
    if opts.files.is_empty() {
        warn!("No input files given.");
        return Ok(());
    }
    for path in &opts.files {
        compress_file(path, opts)?;
    }
    Ok(())
}

/// Compress one file into its .hz sibling (or stdout with -c).
fn compress_file(path: &str, opts: &HuffOpts) -> Result<(), HuffError> {
    let fin = File::open(path).map_err(|e| HuffError::StreamOpen {
        path: path.to_string(),
        source: e,
    })?;
    let mut reader = BufReader::new(fin);

    let summary = if opts.stdout {
        let mut writer = BufWriter::new(io::stdout());
        compress_stream(&mut reader, &mut writer)?
    } else {
        let out_path = format!("{}{}", path, SUFFIX);
        if Path::new(&out_path).exists() && !opts.force {
            return Err(HuffError::WouldOverwrite { path: out_path });
        }
        let fout = File::create(&out_path).map_err(|e| HuffError::StreamOpen {
            path: out_path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(fout);
        compress_stream(&mut reader, &mut writer)?
    };
    info!(
        "{}: {} bytes in, {} bytes out ({} payload bits, {} pad).",
        path, summary.symbols, summary.out_bytes, summary.payload_bits, summary.pad_bits
    );

    // Like bzip2, the input goes away after a successful compress
    if !opts.keep && !opts.stdout {
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove {}: {}", path, e);
        }
    }
    Ok(())
}

/// Compress `source` into `sink`: scan for frequencies, rewind, write the
/// header, then stream the coded payload.
pub fn compress_stream<R: Read + Seek, W: Write>(
    source: &mut R,
    sink: &mut W,
) -> Result<CompressSummary, HuffError> {
    // Pass one: count every byte. A partial count cannot produce a faithful
    // encode, so a scan failure aborts the whole operation.
    let (freqs, scan_err) = FrequencyTable::from_reader(&mut *source);
    if let Some(e) = scan_err {
        warn!("Frequency scan aborted after {} symbols: {}", freqs.total(), e);
        return Err(HuffError::StreamRead { source: e });
    }
    debug!(
        "Counted {} distinct symbols across {} total.",
        freqs.distinct(),
        freqs.total()
    );

    write_header(&mut *sink, &freqs)?;

    // An empty input is fully described by its empty header
    if freqs.is_empty() {
        sink.flush().map_err(|e| HuffError::StreamWrite { source: e })?;
        return Ok(CompressSummary {
            symbols: 0,
            payload_bits: 0,
            pad_bits: 0,
            out_bytes: header_len(0),
        });
    }

    let tree = HuffmanTree::from_frequencies(&freqs)?;
    let codes = CodeTable::from_tree(&tree);

    // Pass two: rewind and stream the input through the code table
    source
        .seek(SeekFrom::Start(0))
        .map_err(|e| HuffError::StreamRead { source: e })?;

    let mut bits = BitWriter::new(&mut *sink);
    let payload_bits = encode(&codes, &mut *source, &mut bits)?;
    let pad_bits = bits
        .flush()
        .map_err(|e| HuffError::StreamWrite { source: e })?;

    Ok(CompressSummary {
        symbols: freqs.total(),
        payload_bits,
        pad_bits,
        out_bytes: header_len(freqs.distinct()) + (payload_bits + pad_bits as u64) / 8,
    })
}
