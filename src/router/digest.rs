// file: src/router/digest.rs
// version: 1.0.0
// guid: 61b2b38b-f861-4287-9034-e86c5f975756

//! Login digest expected by the router's `hashpassword` field

use super::encoding::code_page_bytes;
use crate::config::Credential;

/// Lowercase hex MD5 of the credential immediately followed by the nonce.
///
/// The input is hashed as Windows-1252 bytes, the same code page the form
/// body is sent in.
pub fn login_digest(credential: &Credential, nonce: &str) -> Result<String, String> {
    let mut input = String::with_capacity(credential.expose().len() + nonce.len());
    input.push_str(credential.expose());
    input.push_str(nonce);
    let bytes = code_page_bytes(&input)?;
    Ok(format!("{:x}", md5::compute(&bytes)))
}
