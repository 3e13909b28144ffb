/// Stable 32-bit hash of a book identity.
///
/// Base-31 polynomial over UTF-16 code units, `h = c + ((h << 5) - h)`,
/// wrapping at 32 bits so the value matches what a browser computes for the
/// same string. The empty string hashes to zero.
pub fn hash_identity(identity: &str) -> i32 {
    identity
        .encode_utf16()
        .fold(0i32, |h, unit| (unit as i32).wrapping_add((h << 5).wrapping_sub(h)))
}
