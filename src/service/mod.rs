use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

pub mod auth_service;
pub mod brain_service;
pub mod content_service;
pub mod tag_service;

/// generates an unpredictable, url-safe opaque token from `byte_count` bytes
/// of OS-seeded randomness. Used for both bearer sessions and brain share
/// links, so it must never be derived from anything guessable
pub fn random_token(byte_count: usize) -> String {
    let mut bytes = vec![0u8; byte_count];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
