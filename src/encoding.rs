//! Locale text codec for the string region
//!
//! SCW containers store strings in the game's locale encoding (cp932 in every
//! known corpus). The codec is injected into decode/repack operations so the
//! choice of encoding stays out of the container arithmetic.

use encoding_rs::{Encoding, SHIFT_JIS};

/// Pluggable text codec over an `encoding_rs` encoding.
///
/// Decoding is lossy (malformed sequences become U+FFFD). Encoding substitutes
/// unmappable characters and reports that it did so, so callers can surface a
/// warning instead of failing the whole file.
#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl TextCodec {
    /// Codec for an arbitrary encoding.
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// The cp932 / Shift-JIS codec used by GsPack titles.
    #[must_use]
    pub fn shift_jis() -> Self {
        Self::new(SHIFT_JIS)
    }

    /// Label of the underlying encoding (e.g. `"Shift_JIS"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode raw bytes, replacing malformed sequences.
    #[must_use]
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, _, _) = self.encoding.decode(bytes);
        text.into_owned()
    }

    /// Encode a string. Returns the bytes and whether any character had to be
    /// substituted because the encoding cannot represent it.
    #[must_use]
    pub fn encode(&self, text: &str) -> (Vec<u8>, bool) {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        (bytes.into_owned(), had_errors)
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::shift_jis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_round_trip() {
        let codec = TextCodec::shift_jis();
        let (bytes, had_errors) = codec.encode("Hello");
        assert!(!had_errors);
        assert_eq!(codec.decode(&bytes), "Hello");
    }

    #[test]
    fn test_japanese_round_trip() {
        let codec = TextCodec::shift_jis();
        let (bytes, had_errors) = codec.encode("こんにちは");
        assert!(!had_errors);
        // Shift-JIS uses two bytes per kana/kanji
        assert_eq!(bytes.len(), 10);
        assert_eq!(codec.decode(&bytes), "こんにちは");
    }

    #[test]
    fn test_unencodable_is_substituted_not_fatal() {
        let codec = TextCodec::shift_jis();
        // no cp932 mapping for emoji
        let (bytes, had_errors) = codec.encode("🎮");
        assert!(had_errors);
        assert!(!bytes.is_empty());
    }
}
