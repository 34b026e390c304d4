// Korean-locale string collation
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Script groups in ko ordering: Hangul and Han are reordered ahead of Latin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Script {
    Symbol,
    Digit,
    Hangul,
    Han,
    Latin,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Primary {
    script: Script,
    weight: u32,
}

/// Precomputed sort key. Field order is comparison order:
/// base letters, then accents, then case, then code points.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<Primary>,
    accents: Vec<Vec<u32>>,
    uppercase: Vec<bool>,
    raw: String,
}

/// Builds the key for `s`. NFKD splits Hangul syllables into conjoining jamo
/// (leading < vowel < trailing, so syllable order falls out of plain jamo
/// comparison) and Latin letters into base letter plus combining marks.
pub fn collation_key(s: &str) -> CollationKey {
    let mut primary = Vec::new();
    let mut accents: Vec<Vec<u32>> = Vec::new();
    let mut uppercase = Vec::new();

    for c in s.nfkd() {
        if is_combining_mark(c) {
            if let Some(marks) = accents.last_mut() {
                marks.push(c as u32);
            }
            continue;
        }
        primary.push(primary_weight(c));
        accents.push(Vec::new());
        uppercase.push(c.is_uppercase());
    }

    CollationKey {
        primary,
        accents,
        uppercase,
        raw: s.to_string(),
    }
}

/// Compares two strings the way a Korean-locale UI would present them.
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn primary_weight(c: char) -> Primary {
    let code = c as u32;
    if is_hangul_jamo(code) {
        return Primary {
            script: Script::Hangul,
            weight: code,
        };
    }
    if c.is_ascii_digit() {
        return Primary {
            script: Script::Digit,
            weight: code,
        };
    }
    if c.is_ascii_alphabetic() {
        return Primary {
            script: Script::Latin,
            weight: c.to_ascii_lowercase() as u32,
        };
    }
    if is_han(code) {
        return Primary {
            script: Script::Han,
            weight: code,
        };
    }
    if c.is_alphanumeric() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        return Primary {
            script: Script::Other,
            weight: folded as u32,
        };
    }
    Primary {
        script: Script::Symbol,
        weight: code,
    }
}

/// Conjoining jamo, including the extended leading/trailing blocks.
fn is_hangul_jamo(code: u32) -> bool {
    (0x1100..=0x11FF).contains(&code)
        || (0xA960..=0xA97F).contains(&code)
        || (0xD7B0..=0xD7FF).contains(&code)
}

fn is_han(code: u32) -> bool {
    (0x4E00..=0x9FFF).contains(&code) || (0x3400..=0x4DBF).contains(&code)
}
