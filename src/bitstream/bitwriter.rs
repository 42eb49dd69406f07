//! BitWriter: the bit-sink side of the huffzip I/O subsystem.
//!
//! Packs single bits into bytes, most significant bit first, and writes the
//! packed bytes through to the underlying sink in buffered runs. Flush MUST
//! be called before the sink is used again or bits may be left in the
//! internal queue.

use std::io;

/// Full bytes accumulate here before being pushed to the sink.
const WRITE_THRESHOLD: usize = 64 * 1024;

/// Writes single bits into a byte-oriented sink.
pub struct BitWriter<W> {
    /// Handle to the output stream.
    sink: W,
    /// Packed bytes waiting to be written to the sink.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be packed into bytes.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total bits pushed since creation.
    written: u64,
}

impl<W: io::Write> BitWriter<W> {
    /// Create a new BitWriter over the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            output: Vec::with_capacity(WRITE_THRESHOLD),
            queue: 0,
            q_bits: 0,
            written: 0,
        }
    }

    /// Queue a single bit.
    pub fn push_bit(&mut self, bit: bool) -> io::Result<()> {
        self.queue = self.queue << 1 | bit as u64;
        self.q_bits += 1;
        self.written += 1;
        self.drain_queue();
        if self.output.len() >= WRITE_THRESHOLD {
            self.write_output()?;
        }
        Ok(())
    }

    /// Move full bytes from the bit queue into the output buffer.
    fn drain_queue(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Push the output buffer through to the sink.
    fn write_output(&mut self) -> io::Result<()> {
        self.sink.write_all(&self.output)?;
        self.output.clear();
        Ok(())
    }

    /// Pad the final partial byte with 0s in the least significant bits,
    /// write everything through, and flush the sink. Returns how many pad
    /// bits completed the last byte.
    pub fn flush(&mut self) -> io::Result<u8> {
        self.drain_queue();
        let mut padding = 0;
        if self.q_bits > 0 {
            padding = 8 - self.q_bits;
            let byte = ((self.queue as u8) & (0xff_u8 >> padding)) << padding;
            self.output.push(byte);
            self.q_bits = 0;
        }
        self.write_output()?;
        self.sink.flush()?;
        Ok(padding)
    }

    /// Total bits pushed so far.
    pub fn bit_count(&self) -> u64 {
        self.written
    }

    /// Give the sink back. Call flush() first or queued bits are dropped.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
