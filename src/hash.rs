//! Streaming hash accumulators that an ETag can be rendered from

use sha2::digest::Output;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// A hash that consumes bytes incrementally and can report its digest
/// at any point without being consumed.
pub trait Accumulator {
    /// Digest bytes produced by [`Accumulator::sum`]
    type Output: AsRef<[u8]>;

    /// Feed more bytes into the hash
    fn write(&mut self, data: &[u8]);

    /// Return to the initial, empty state
    fn reset(&mut self);

    /// Native digest size in bytes
    fn size(&self) -> usize;

    /// Digest of everything written so far.
    ///
    /// The running state is left untouched, so further writes continue
    /// from where they left off.
    fn sum(&self) -> Self::Output;
}

macro_rules! impl_accumulator {
    ($($hasher:ty),* $(,)?) => {
        $(
            impl Accumulator for $hasher {
                type Output = Output<$hasher>;

                fn write(&mut self, data: &[u8]) {
                    Digest::update(self, data);
                }

                fn reset(&mut self) {
                    Digest::reset(self);
                }

                fn size(&self) -> usize {
                    <$hasher as Digest>::output_size()
                }

                fn sum(&self) -> Self::Output {
                    Digest::finalize(self.clone())
                }
            }
        )*
    };
}

impl_accumulator!(Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256);
