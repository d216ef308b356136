//! Strong and weak ETags rendered from an accumulator's digest

use crate::hash::Accumulator;
use crate::Result;
use std::fmt;
use std::io;

/// Hex digits used when no length is requested
pub const DEFAULT_LENGTH: usize = 32;

/// `W/` + quotes + 64 hex digits, plus one byte of slack for the odd nibble.
/// Digests up to 32 bytes render without touching the heap.
const STACK_LEN: usize = 4 + 64;

/// Number of hex digits an ETag actually carries.
///
/// A requested length of 0 means [`DEFAULT_LENGTH`]. The result never
/// exceeds the hex length of the digest itself.
pub fn effective_length(requested: usize, digest_size: usize) -> usize {
    let length = if requested == 0 { DEFAULT_LENGTH } else { requested };
    length.min(2 * digest_size)
}

/// ETag view over a borrowed hash accumulator.
///
/// Nothing is cached: every render reads the current digest.
#[derive(Debug)]
pub struct Etag<'a, H> {
    hash: &'a H,
    length: usize,
}

impl<H> Clone for Etag<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Etag<'_, H> {}

impl<'a, H: Accumulator> Etag<'a, H> {
    /// Bind to `hash` using the default length
    pub fn new(hash: &'a H) -> Self {
        Self::with_length(hash, 0)
    }

    /// Bind to `hash` requesting `length` hex digits (0 for the default)
    pub fn with_length(hash: &'a H, length: usize) -> Self {
        Self { hash, length }
    }

    /// Set the requested length
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// The accumulator this ETag reads from
    pub fn hash(&self) -> &'a H {
        self.hash
    }

    /// Length as configured, before defaulting and clamping
    pub fn requested_length(&self) -> usize {
        self.length
    }

    /// Length after defaulting and clamping to the digest size
    pub fn effective_length(&self) -> usize {
        let size = self.hash.size();
        let length = effective_length(self.length, size);
        if self.length > 2 * size {
            tracing::trace!(
                requested = self.length,
                cap = length,
                "etag length clamped to digest size"
            );
        }
        length
    }

    /// Strong ETag, e.g. `"b94d27b9"`
    pub fn strong(&self) -> String {
        self.render(false, ascii_string)
    }

    /// Weak ETag, e.g. `W/"b94d27b9"`
    pub fn weak(&self) -> String {
        self.render(true, ascii_string)
    }

    /// Write the strong ETag to `out`
    pub fn write_strong<W: io::Write>(&self, out: &mut W) -> Result<()> {
        self.render(false, |etag| out.write_all(etag))?;
        Ok(())
    }

    /// Write the weak ETag to `out`
    pub fn write_weak<W: io::Write>(&self, out: &mut W) -> Result<()> {
        self.render(true, |etag| out.write_all(etag))?;
        Ok(())
    }

    // Lays out [W/]"<hex>" in a scratch buffer and hands the finished
    // bytes to `f`. Only ceil(length / 2) digest bytes are encoded; for an
    // odd length the closing quote overwrites the surplus nibble.
    fn render<R>(&self, weak: bool, f: impl FnOnce(&[u8]) -> R) -> R {
        let length = self.effective_length();
        let digest = self.hash.sum();
        let prefix: &[u8] = if weak { b"W/\"" } else { b"\"" };

        let bytes = &digest.as_ref()[..(length + 1) / 2];
        let scratch_len = prefix.len() + 2 * bytes.len() + 1;

        let mut stack = [0u8; STACK_LEN];
        let mut heap;
        let buf: &mut [u8] = if scratch_len <= STACK_LEN {
            &mut stack[..scratch_len]
        } else {
            heap = vec![0u8; scratch_len];
            &mut heap
        };

        buf[..prefix.len()].copy_from_slice(prefix);
        let hex_end = prefix.len() + 2 * bytes.len();
        // Lengths match by construction, so this cannot fail.
        let _ = hex::encode_to_slice(bytes, &mut buf[prefix.len()..hex_end]);
        buf[prefix.len() + length] = b'"';

        f(&buf[..prefix.len() + length + 1])
    }
}

/// Renders the strong ETag; `{:#}` renders the weak one.
impl<H: Accumulator> fmt::Display for Etag<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weak = f.alternate();
        self.render(weak, |etag| {
            let etag = std::str::from_utf8(etag).map_err(|_| fmt::Error)?;
            f.write_str(etag)
        })
    }
}

fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
