// crates/bytegen-core/src/verify.rs
//
// Read-only reporting over finalized bytes.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use sha2::{Digest, Sha256};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    pub hex: bool,
    pub base64: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    pub length: usize,
    pub sha256_hex: String,
    pub crc32: u32,
    pub hex_dump: Option<String>,
    pub base64: Option<String>,
}

pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

pub fn verify(bytes: &[u8], opts: &VerifyOptions) -> VerifyReport {
    VerifyReport {
        length: bytes.len(),
        sha256_hex: hex::encode(sha256(bytes)),
        crc32: crc32(bytes),
        hex_dump: opts.hex.then(|| hex::encode(bytes)),
        base64: opts.base64.then(|| B64.encode(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digests() {
        let r = verify(
            b"abc",
            &VerifyOptions {
                hex: true,
                base64: true,
            },
        );
        assert_eq!(r.length, 3);
        assert_eq!(
            r.sha256_hex,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(r.crc32, 0x3524_41C2);
        assert_eq!(r.hex_dump.as_deref(), Some("616263"));
        assert_eq!(r.base64.as_deref(), Some("YWJj"));
    }

    #[test]
    fn optional_renderings_are_off_by_default() {
        let r = verify(b"", &VerifyOptions::default());
        assert_eq!(
            r.sha256_hex,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert!(r.hex_dump.is_none());
        assert!(r.base64.is_none());
    }
}
