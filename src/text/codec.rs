use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Byte encoding of the text on either side of the Base64 codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Little-endian UTF-16, what the platform's admin shells call "Unicode".
    Utf16Le,
}

pub fn base64_encode(text: &str, encoding: TextEncoding) -> String {
    let bytes: Vec<u8> = match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
    };
    STANDARD.encode(bytes)
}

/// Decode Base64 text; whitespace anywhere in the input (line wrapping) is ignored.
pub fn base64_decode(encoded: &str, encoding: TextEncoding) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .context("input is not valid Base64")?;

    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes).context("decoded bytes are not valid UTF-8"),
        TextEncoding::Utf16Le => {
            if bytes.len() % 2 != 0 {
                bail!("decoded byte count {} is odd; not UTF-16", bytes.len());
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).context("decoded bytes are not valid UTF-16")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        assert_eq!(base64_encode("hello", TextEncoding::Utf8), "aGVsbG8=");
        assert_eq!(base64_decode("aGVsbG8=", TextEncoding::Utf8).unwrap(), "hello");
    }

    #[test]
    fn test_utf16le_matches_shell_unicode_encoding() {
        assert_eq!(base64_encode("hi", TextEncoding::Utf16Le), "aABpAA==");
        assert_eq!(base64_decode("aABpAA==", TextEncoding::Utf16Le).unwrap(), "hi");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(base64_decode("  aGVsbG8=\n", TextEncoding::Utf8).unwrap(), "hello");
    }

    #[test]
    fn test_wrapped_input() {
        let text = "x".repeat(80);
        let encoded = base64_encode(&text, TextEncoding::Utf8);
        let wrapped = format!("{}\n{}\r\n", &encoded[..76], &encoded[76..]);
        assert_eq!(base64_decode(&wrapped, TextEncoding::Utf8).unwrap(), text);
    }

    #[test]
    fn test_invalid_input() {
        assert!(base64_decode("not base64!", TextEncoding::Utf8).is_err());
        assert!(base64_decode("/w==", TextEncoding::Utf8).is_err());
        assert!(base64_decode("aA==", TextEncoding::Utf16Le).is_err());
    }
}
