//! 2-set (dubeolsik) keyboard layout.
//!
//! Password fields record the physical key rather than the jamo it produced,
//! and Hangul mode maps typed Latin keys onto jamo.

/// (jamo, Latin key) pairs of the standard Korean 2-set layout
const LAYOUT: [(char, char); 33] = [
    ('ㅁ', 'a'),
    ('ㄴ', 's'),
    ('ㅇ', 'd'),
    ('ㄹ', 'f'),
    ('ㅎ', 'g'),
    ('ㅗ', 'h'),
    ('ㅓ', 'j'),
    ('ㅏ', 'k'),
    ('ㅣ', 'l'),
    ('ㅂ', 'q'),
    ('ㅈ', 'w'),
    ('ㄷ', 'e'),
    ('ㄱ', 'r'),
    ('ㅅ', 't'),
    ('ㅛ', 'y'),
    ('ㅕ', 'u'),
    ('ㅑ', 'i'),
    ('ㅐ', 'o'),
    ('ㅔ', 'p'),
    ('ㅋ', 'z'),
    ('ㅌ', 'x'),
    ('ㅊ', 'c'),
    ('ㅍ', 'v'),
    ('ㅠ', 'b'),
    ('ㅜ', 'n'),
    ('ㅡ', 'm'),
    ('ㅃ', 'Q'),
    ('ㅉ', 'W'),
    ('ㄸ', 'E'),
    ('ㄲ', 'R'),
    ('ㅆ', 'T'),
    ('ㅒ', 'O'),
    ('ㅖ', 'P'),
];

/// Map a jamo to the Latin key that produces it; other characters pass through
pub fn jamo_to_latin(ch: char) -> char {
    LAYOUT
        .iter()
        .find(|(jamo, _)| *jamo == ch)
        .map_or(ch, |(_, key)| *key)
}

/// Map a Latin key to the jamo it produces; other characters pass through.
///
/// Shifted letters without a dedicated jamo fall back to their lowercase key,
/// matching how a Korean IME treats e.g. Shift+A.
pub fn latin_to_jamo(ch: char) -> char {
    if let Some((jamo, _)) = LAYOUT.iter().find(|(_, key)| *key == ch) {
        return *jamo;
    }
    if ch.is_ascii_uppercase() {
        let lower = ch.to_ascii_lowercase();
        if let Some((jamo, _)) = LAYOUT.iter().find(|(_, key)| *key == lower) {
            return *jamo;
        }
    }
    ch
}

/// Map every jamo in `text` to its Latin key
pub fn text_to_latin(text: &str) -> String {
    text.chars().map(jamo_to_latin).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jamo_to_latin() {
        assert_eq!(jamo_to_latin('ㄱ'), 'r');
        assert_eq!(jamo_to_latin('ㄴ'), 's');
        assert_eq!(jamo_to_latin('ㅒ'), 'O');
        assert_eq!(jamo_to_latin('!'), '!');
    }

    #[test]
    fn test_latin_to_jamo() {
        assert_eq!(latin_to_jamo('g'), 'ㅎ');
        assert_eq!(latin_to_jamo('k'), 'ㅏ');
        assert_eq!(latin_to_jamo('R'), 'ㄲ');
        // No shifted jamo for A: falls back to lowercase
        assert_eq!(latin_to_jamo('A'), 'ㅁ');
        assert_eq!(latin_to_jamo('1'), '1');
    }

    #[test]
    fn test_text_to_latin() {
        assert_eq!(text_to_latin("ㄱㄴq!1"), "rsq!1");
    }
}
