pub mod asm;
pub mod json;
pub mod read;
pub mod text;

#[cfg(test)]
mod asm_tests;
#[cfg(test)]
mod json_tests;

/// Bytes up to the first NUL, lossily decoded.
fn c_str(bytes: &[u8]) -> std::borrow::Cow<'_, str> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end])
}
