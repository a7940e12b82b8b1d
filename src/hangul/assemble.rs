//! Buffer edits around the assemble position

use std::ops::Range;

use super::{compose, decompose};

/// Result of a composition edit: the new buffer, caret and assemble position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub text: Vec<char>,
    pub caret: usize,
    pub assemble: Option<usize>,
}

/// Insert a Hangul character, composing it with the syllable in progress.
///
/// With an open assemble position the character there is decomposed
/// together with `ch` and recomposed in place (`한` + `ㅏ` -> `하나`).
/// Otherwise `ch` replaces `selection` and a new composition starts. The
/// assemble position always ends on the last produced code point.
pub fn insert_jamo(
    text: &[char],
    selection: Range<usize>,
    assemble: Option<usize>,
    ch: char,
) -> Assembled {
    let len = text.len();
    let start = selection.start.min(len);
    let end = selection.end.clamp(start, len);

    let (prefix_end, suffix_start, seed) = match assemble.filter(|&pos| pos < len) {
        Some(pos) => (pos, (pos + 1).max(end), vec![text[pos], ch]),
        None => (start, end, vec![ch]),
    };

    let composed: Vec<char> = compose(&decompose(&seed)).chars().collect();

    let mut out = Vec::with_capacity(len + composed.len());
    out.extend_from_slice(&text[..prefix_end]);
    out.extend_from_slice(&composed);
    let caret = out.len();
    out.extend_from_slice(&text[suffix_start..]);

    Assembled {
        text: out,
        caret,
        assemble: caret.checked_sub(1).filter(|_| !composed.is_empty()),
    }
}

/// Remove the last jamo of the syllable at `pos`.
///
/// The assemble position survives on the shorter syllable, or is cleared
/// once the syllable is gone. Returns `None` if `pos` is out of range.
pub fn delete_jamo(text: &[char], pos: usize) -> Option<Assembled> {
    let target = *text.get(pos)?;

    let mut jamo = decompose(&[target]);
    jamo.pop();
    let composed: Vec<char> = compose(&jamo).chars().collect();

    let mut out = Vec::with_capacity(text.len());
    out.extend_from_slice(&text[..pos]);
    out.extend_from_slice(&composed);
    let caret = out.len();
    out.extend_from_slice(&text[pos + 1..]);

    Some(Assembled {
        text: out,
        caret,
        assemble: if composed.is_empty() { None } else { Some(caret - 1) },
    })
}
