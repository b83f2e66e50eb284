//! Raw text normalization ahead of tokenization.
//!
//! [`TextNormalizer`] strips non-linguistic material (URLs, email addresses,
//! @-mentions, symbols) from one raw string and collapses whitespace, leaving
//! text the tokenizer can work with. It is a pure function of its input:
//! no side effects, deterministic, and idempotent.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//!
//! assert_eq!(
//!     normalizer.normalize(Some("Check http://x.co now! 좋은 제품입니다 @user")),
//!     "Check now 좋은 제품입니다"
//! );
//! assert_eq!(normalizer.normalize(None), "");
//! ```

use regex::Regex;

use crate::error::{Result, WinnowerError};

/// Hangul blocks kept alongside word characters: compatibility jamo,
/// precomposed syllables, and conjoining jamo.
const HANGUL_RANGES: &[(char, char)] = &[
    ('\u{3131}', '\u{3163}'),
    ('\u{AC00}', '\u{D7A3}'),
    ('\u{1100}', '\u{11FF}'),
];

/// Strips URLs, emails, mentions, and non-linguistic symbols from raw text.
///
/// Removal order is URL → email → mention, each replaced with the empty
/// string rather than a space. Deleting instead of padding can concatenate
/// the words adjacent to the removed substring; downstream consumers depend
/// on exactly this behavior, so it is kept as-is rather than corrected.
/// Symbols outside the permitted character ranges become single spaces, and
/// whitespace runs are collapsed afterwards.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    url: Regex,
    email: Regex,
    mention: Regex,
    symbol: Regex,
    whitespace: Regex,
}

impl TextNormalizer {
    /// Create a normalizer that permits word characters, whitespace, and the
    /// Hangul blocks.
    pub fn new() -> Result<Self> {
        Self::with_script_ranges(HANGUL_RANGES)
    }

    /// Create a normalizer permitting word characters, whitespace, and the
    /// given inclusive character ranges (for corpora in other scripts).
    pub fn with_script_ranges(ranges: &[(char, char)]) -> Result<Self> {
        let mut class = String::from(r"[^\w\s");
        for (start, end) in ranges {
            class.push_str(&format!(
                r"\x{{{:X}}}-\x{{{:X}}}",
                *start as u32, *end as u32
            ));
        }
        class.push(']');

        Ok(TextNormalizer {
            url: Self::compile(r"https?://\S+")?,
            email: Self::compile(r"\S+@\S+")?,
            mention: Self::compile(r"@\w+")?,
            symbol: Self::compile(&class)?,
            whitespace: Self::compile(r"\s+")?,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).map_err(|e| WinnowerError::Anyhow(anyhow::Error::from(e)))
    }

    /// Normalize one raw string. Missing input yields the empty string;
    /// this never fails.
    pub fn normalize(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };
        if raw.is_empty() {
            return String::new();
        }

        let text = self.url.replace_all(raw, "");
        let text = self.email.replace_all(&text, "");
        let text = self.mention.replace_all(&text, "");
        let text = self.symbol.replace_all(&text, " ");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new().expect("built-in normalizer patterns should compile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_missing_and_empty_input() {
        let n = normalizer();
        assert_eq!(n.normalize(None), "");
        assert_eq!(n.normalize(Some("")), "");
        assert_eq!(n.normalize(Some("   \t\n ")), "");
    }

    #[test]
    fn test_url_removal() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("배송 https://shop.kr/item 빠름")), "배송 빠름");
        assert_eq!(n.normalize(Some("http://a.b/c?d=1")), "");
    }

    #[test]
    fn test_email_removal() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("문의는 cs@example.com 으로")), "문의는 으로");
    }

    #[test]
    fn test_mention_removal() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("감사합니다 @winnower")), "감사합니다");
    }

    #[test]
    fn test_symbols_become_spaces() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("가격↓!! 좋아요★")), "가격 좋아요");
        assert_eq!(n.normalize(Some("A/B-test (v2)")), "A B test v2");
    }

    #[test]
    fn test_no_space_inserted_for_removed_substrings() {
        let n = normalizer();
        // The URL match swallows everything up to the next whitespace; no
        // replacement space is inserted where it stood.
        assert_eq!(n.normalize(Some("재구매 http://x.co입니다 최고")), "재구매 최고");
    }

    #[test]
    fn test_hangul_jamo_kept() {
        let n = normalizer();
        assert_eq!(n.normalize(Some("ㅋㅋㅋ 재밌다")), "ㅋㅋㅋ 재밌다");
    }

    #[test]
    fn test_idempotence() {
        let n = normalizer();
        for raw in [
            "Check http://x.co now! 좋은 제품입니다 @user",
            "  가격↓!!   좋아요★  ",
            "cs@example.com",
            "plain text 123",
            "",
        ] {
            let once = n.normalize(Some(raw));
            assert_eq!(n.normalize(Some(&once)), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_custom_script_ranges() {
        let n = TextNormalizer::with_script_ranges(&[('\u{3040}', '\u{309F}')]).unwrap();
        assert_eq!(n.normalize(Some("すごい! です")), "すごい です");
    }
}
