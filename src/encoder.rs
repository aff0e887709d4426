use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Base64-encode the UTF-8 bytes of `input` using the standard alphabet with padding.
pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Length of the padded encoding of `input`, without encoding it.
pub fn encoded_len(input: &str) -> usize {
    input.len().div_ceil(3) * 4
}
