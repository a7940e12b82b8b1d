//! Jamo tables and algorithmic syllable composition

use super::{is_complete, SYLLABLE_BASE};

const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Index 0 is "no final consonant"
const JONGSEONG: [char; 28] = [
    '\0', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const COMPOUND_VOWELS: [(char, char, char); 7] = [
    ('ㅗ', 'ㅏ', 'ㅘ'),
    ('ㅗ', 'ㅐ', 'ㅙ'),
    ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'),
    ('ㅜ', 'ㅔ', 'ㅞ'),
    ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
];

const COMPOUND_FINALS: [(char, char, char); 11] = [
    ('ㄱ', 'ㅅ', 'ㄳ'),
    ('ㄴ', 'ㅈ', 'ㄵ'),
    ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'),
    ('ㄹ', 'ㅁ', 'ㄻ'),
    ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'),
    ('ㄹ', 'ㅌ', 'ㄾ'),
    ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'),
    ('ㅂ', 'ㅅ', 'ㅄ'),
];

const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

fn choseong_index(ch: char) -> Option<usize> {
    CHOSEONG.iter().position(|&c| c == ch)
}

fn jungseong_index(ch: char) -> Option<usize> {
    JUNGSEONG.iter().position(|&c| c == ch)
}

fn jongseong_index(ch: char) -> Option<usize> {
    JONGSEONG.iter().skip(1).position(|&c| c == ch).map(|i| i + 1)
}

fn is_vowel(ch: char) -> bool {
    jungseong_index(ch).is_some()
}

fn combine_vowel(first: char, second: char) -> Option<char> {
    COMPOUND_VOWELS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, c)| *c)
}

fn combine_final(first: char, second: char) -> Option<char> {
    COMPOUND_FINALS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, c)| *c)
}

/// Split a compound vowel or final cluster into its basic jamo
fn push_split(ch: char, out: &mut Vec<char>) {
    if let Some((a, b, _)) = COMPOUND_VOWELS.iter().find(|(_, _, c)| *c == ch) {
        out.extend([*a, *b]);
    } else if let Some((a, b, _)) = COMPOUND_FINALS.iter().find(|(_, _, c)| *c == ch) {
        out.extend([*a, *b]);
    } else {
        out.push(ch);
    }
}

/// Decompose text into basic jamo.
///
/// Syllable blocks expand to initial, medial and final jamo; compound vowels
/// and final clusters are split. Everything else passes through unchanged.
pub fn decompose(text: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len() * 3);

    for &ch in text {
        if is_complete(ch) {
            let index = ch as u32 - SYLLABLE_BASE;
            let cho = index / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
            let jung = (index % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
            let jong = index % JONGSEONG_COUNT;

            out.push(CHOSEONG[cho as usize]);
            push_split(JUNGSEONG[jung as usize], &mut out);
            if jong > 0 {
                push_split(JONGSEONG[jong as usize], &mut out);
            }
        } else {
            push_split(ch, &mut out);
        }
    }

    out
}

/// Compose a jamo sequence into syllable blocks.
///
/// Jamo that cannot be attached to a syllable are left uncombined, so an
/// incomplete sequence yields the best partial result (`ㅎ,ㅏ` -> `하`,
/// `ㅎ` -> `ㅎ`). Non-jamo characters pass through.
pub fn compose(jamo: &[char]) -> String {
    let mut out = String::with_capacity(jamo.len());
    let mut i = 0;

    while i < jamo.len() {
        let ch = jamo[i];
        let next_is_vowel = jamo.get(i + 1).is_some_and(|&n| is_vowel(n));

        match choseong_index(ch) {
            Some(cho) if next_is_vowel => {
                let mut vowel = jamo[i + 1];
                i += 2;
                if let Some(compound) = jamo.get(i).and_then(|&n| combine_vowel(vowel, n)) {
                    vowel = compound;
                    i += 1;
                }
                let jong = take_final(jamo, &mut i);
                match syllable(cho, vowel, jong) {
                    Some(block) => out.push(block),
                    None => out.extend([CHOSEONG[cho], vowel]),
                }
            }
            Some(_) => {
                i += 1;
                out.push(take_cluster(ch, jamo, &mut i));
            }
            None if is_vowel(ch) => {
                i += 1;
                let mut vowel = ch;
                if let Some(compound) = jamo.get(i).and_then(|&n| combine_vowel(vowel, n)) {
                    vowel = compound;
                    i += 1;
                }
                out.push(vowel);
            }
            None => {
                i += 1;
                out.push(ch);
            }
        }
    }

    out
}

fn followed_by_vowel(jamo: &[char], index: usize) -> bool {
    jamo.get(index + 1).is_some_and(|&c| is_vowel(c))
}

/// Take the final consonant (possibly a cluster) of the syllable being built.
/// A consonant followed by a vowel starts the next syllable instead.
fn take_final(jamo: &[char], i: &mut usize) -> Option<char> {
    let first = *jamo.get(*i)?;
    if jongseong_index(first).is_none() || followed_by_vowel(jamo, *i) {
        return None;
    }

    let compound = jamo
        .get(*i + 1)
        .and_then(|&second| combine_final(first, second))
        .filter(|_| !followed_by_vowel(jamo, *i + 1));

    match compound {
        Some(cluster) => {
            *i += 2;
            Some(cluster)
        }
        None => {
            *i += 1;
            Some(first)
        }
    }
}

/// A standalone consonant may still merge with the next one into a cluster
fn take_cluster(first: char, jamo: &[char], i: &mut usize) -> char {
    let cluster = jamo
        .get(*i)
        .and_then(|&second| combine_final(first, second))
        .filter(|_| !followed_by_vowel(jamo, *i));

    match cluster {
        Some(cluster) => {
            *i += 1;
            cluster
        }
        None => first,
    }
}

fn syllable(cho: usize, vowel: char, jong: Option<char>) -> Option<char> {
    let jung = jungseong_index(vowel)?;
    let jong = match jong {
        Some(ch) => jongseong_index(ch)?,
        None => 0,
    };
    let code = SYLLABLE_BASE
        + (cho as u32 * JUNGSEONG_COUNT + jung as u32) * JONGSEONG_COUNT
        + jong as u32;
    char::from_u32(code)
}
