// file: src/router/encoding.rs
// version: 1.0.0
// guid: 89ca34e9-2134-483f-93bb-4e7fa89fba92

//! Form body encoding for the router's Windows-1252 form decoder

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use url::form_urlencoded::byte_serialize;

/// Whether `text` maps onto Windows-1252 without substitution
pub fn is_representable(text: &str) -> bool {
    let (_, _, had_errors) = WINDOWS_1252.encode(text);
    !had_errors
}

/// Encode ordered form fields as `application/x-www-form-urlencoded`, with
/// every name and value percent-encoded from its Windows-1252 bytes.
pub fn encode_form(fields: &[(&str, &str)]) -> Result<Vec<u8>, String> {
    let mut body = String::new();

    for (name, value) in fields {
        if !body.is_empty() {
            body.push('&');
        }
        body.push_str(&encode_component(name)?);
        body.push('=');
        body.push_str(&encode_component(value)?);
    }

    // Percent-encoding leaves only ASCII behind
    Ok(body.into_bytes())
}

/// Windows-1252 bytes of `text`; characters outside the code page are an error
pub fn code_page_bytes(text: &str) -> Result<Cow<'_, [u8]>, String> {
    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    if had_errors {
        return Err(format!(
            "'{}' contains characters outside the Windows-1252 code page",
            text
        ));
    }
    Ok(bytes)
}

fn encode_component(text: &str) -> Result<String, String> {
    let bytes = code_page_bytes(text)?;
    Ok(byte_serialize(&bytes).collect())
}
