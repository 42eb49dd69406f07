//! Decompression driver: whole streams and whole files.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info, trace, warn};

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;
use crate::huffman::decode::decode_count;
use crate::huffman::tree::HuffmanTree;
use crate::tools::cli::HuffOpts;

use super::compress::SUFFIX;
use super::header::read_header;

/// Decompress every file named in the options.
pub fn decompress(opts: &HuffOpts) -> Result<(), HuffError> {
    if opts.files.is_empty() {
        warn!("No input files given.");
        return Ok(());
    }
    for path in &opts.files {
        decompress_file(path, opts)?;
    }
    Ok(())
}

/// Derive the output name: strip the .hz suffix, or tack on .out when the
/// input is not named *.hz.
fn output_name(path: &str) -> String {
    match path.strip_suffix(SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", path),
    }
}

/// Decompress one file next to its compressed source (or to stdout with -c).
fn decompress_file(path: &str, opts: &HuffOpts) -> Result<(), HuffError> {
    let fin = File::open(path).map_err(|e| HuffError::StreamOpen {
        path: path.to_string(),
        source: e,
    })?;
    let mut reader = BufReader::new(fin);

    let symbols = if opts.stdout {
        let mut writer = BufWriter::new(io::stdout());
        decompress_stream(&mut reader, &mut writer)?
    } else {
        let out_path = output_name(path);
        if Path::new(&out_path).exists() && !opts.force {
            return Err(HuffError::WouldOverwrite { path: out_path });
        }
        let fout = File::create(&out_path).map_err(|e| HuffError::StreamOpen {
            path: out_path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(fout);
        decompress_stream(&mut reader, &mut writer)?
    };
    info!("{}: {} symbols restored.", path, symbols);

    // The compressed file goes away after a successful decompress
    if !opts.keep && !opts.stdout {
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove {}: {}", path, e);
        }
    }
    Ok(())
}

/// Decompress `source` into `sink`: read the header, rebuild the tree, and
/// replay exactly the symbol count the header promises.
pub fn decompress_stream<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
) -> Result<u64, HuffError> {
    let freqs = read_header(&mut *source)?;

    // An empty header describes an empty input
    if freqs.is_empty() {
        sink.flush().map_err(|e| HuffError::StreamWrite { source: e })?;
        return Ok(0);
    }

    let total = freqs.total();
    let tree = HuffmanTree::from_frequencies(&freqs)?;
    debug!(
        "Replaying {} symbols through a {}-leaf tree.",
        total,
        freqs.distinct()
    );

    let mut bits = BitReader::new(&mut *source);
    let emitted = decode_count(&tree, &mut bits, &mut *sink, total)?;
    trace!("Decode finished at {}.", bits.loc());

    sink.flush().map_err(|e| HuffError::StreamWrite { source: e })?;
    Ok(emitted)
}
