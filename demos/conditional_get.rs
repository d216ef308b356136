//! Example: ETags for a response body streamed in chunks
//!
//! Demonstrates how the same accumulator yields new tags as content grows.

use etag::{Accumulator, Etag};
use sha2::{Digest, Sha256};

fn main() -> etag::Result<()> {
    let mut hasher = Sha256::new();

    // Body arrives in chunks, as it would from a file or upstream response
    for chunk in [&b"<html>"[..], b"<body>Hello</body>", b"</html>"] {
        hasher.write(chunk);
    }

    let etag = Etag::new(&hasher);
    println!("ETag: {}", etag.strong());
    println!("ETag: {}", etag.weak());

    // Shorter tags trade collision resistance for header size
    let short = etag.length(8);
    println!("Short ETag: {short}");
    println!("Short weak ETag: {short:#}");

    // Render straight into a header buffer
    let mut header = b"ETag: ".to_vec();
    short.write_strong(&mut header)?;
    println!("{}", String::from_utf8_lossy(&header));

    // Appending changes the tag; nothing was consumed by rendering
    hasher.write(b"\n");
    println!("After edit: {}", Etag::new(&hasher).strong());

    Ok(())
}
