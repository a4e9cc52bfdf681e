//! Porter stemmer.
//!
//! Classic Porter (1980) suffix stripping, used to collapse plurals and common
//! verb endings so that "meetings", "meeting" and "meet" share a root.
//! Accuracy is not a goal here: the stems only feed loose substring matching.

/// Step 2 suffix replacements (applied when the remaining stem has measure > 0).
const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

/// Step 3 suffix replacements (measure > 0).
const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 suffixes removed when the remaining stem has measure > 1.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ou", "ism",
    "ate", "iti", "ous", "ive", "ize",
];

/// Reduce a word to its Porter stem.
///
/// The word is lowercased first. Words shorter than three characters and words
/// containing non-ASCII characters are returned lowercased but otherwise intact.
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.len() < 3 || !lower.is_ascii() {
        return lower;
    }

    let mut w = lower.into_bytes();
    step1a(&mut w);
    step1b(&mut w);
    step1c(&mut w);
    step2(&mut w);
    step3(&mut w);
    step4(&mut w);
    step5a(&mut w);
    step5b(&mut w);

    // Only ASCII bytes were ever written into the buffer.
    String::from_utf8(w).unwrap_or_default()
}

fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// Number of VC sequences in `[C](VC)^m[V]`.
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut i = 0;
    let mut m = 0;

    while i < n && is_consonant(w, i) {
        i += 1;
    }
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
        if i >= n {
            return m;
        }
    }
}

fn contains_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_with_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// `*o`: stem ends consonant-vowel-consonant, last consonant not w, x or y.
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

fn ends_with(w: &[u8], suffix: &str) -> bool {
    w.ends_with(suffix.as_bytes())
}

fn replace_suffix(w: &mut Vec<u8>, suffix_len: usize, replacement: &str) {
    w.truncate(w.len() - suffix_len);
    w.extend_from_slice(replacement.as_bytes());
}

/// Longest entry of `table` that `w` ends with.
fn longest_match<'a>(w: &[u8], table: &'a [(&'a str, &'a str)]) -> Option<&'a (&'a str, &'a str)> {
    table
        .iter()
        .filter(|(suffix, _)| ends_with(w, suffix))
        .max_by_key(|(suffix, _)| suffix.len())
}

fn step1a(w: &mut Vec<u8>) {
    if ends_with(w, "sses") || ends_with(w, "ies") {
        w.truncate(w.len() - 2);
    } else if ends_with(w, "ss") {
        // unchanged
    } else if ends_with(w, "s") {
        w.truncate(w.len() - 1);
    }
}

fn step1b(w: &mut Vec<u8>) {
    if ends_with(w, "eed") {
        if measure(&w[..w.len() - 3]) > 0 {
            w.truncate(w.len() - 1);
        }
        return;
    }

    let suffix_len = if ends_with(w, "ed") && contains_vowel(&w[..w.len() - 2]) {
        2
    } else if ends_with(w, "ing") && contains_vowel(&w[..w.len() - 3]) {
        3
    } else {
        return;
    };
    w.truncate(w.len() - suffix_len);

    if ends_with(w, "at") || ends_with(w, "bl") || ends_with(w, "iz") {
        w.push(b'e');
    } else if ends_with_double_consonant(w) && !matches!(w[w.len() - 1], b'l' | b's' | b'z') {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

fn step1c(w: &mut Vec<u8>) {
    let n = w.len();
    if n > 1 && w[n - 1] == b'y' && contains_vowel(&w[..n - 1]) {
        w[n - 1] = b'i';
    }
}

fn step2(w: &mut Vec<u8>) {
    if let Some((suffix, replacement)) = longest_match(w, STEP2_SUFFIXES) {
        if measure(&w[..w.len() - suffix.len()]) > 0 {
            replace_suffix(w, suffix.len(), replacement);
        }
    }
}

fn step3(w: &mut Vec<u8>) {
    if let Some((suffix, replacement)) = longest_match(w, STEP3_SUFFIXES) {
        if measure(&w[..w.len() - suffix.len()]) > 0 {
            replace_suffix(w, suffix.len(), replacement);
        }
    }
}

fn step4(w: &mut Vec<u8>) {
    let matched = STEP4_SUFFIXES
        .iter()
        .filter(|suffix| ends_with(w, suffix))
        .max_by_key(|suffix| suffix.len());

    if let Some(suffix) = matched {
        let stem_len = w.len() - suffix.len();
        if measure(&w[..stem_len]) > 1 {
            w.truncate(stem_len);
        }
        return;
    }

    // (s|t)ion
    if ends_with(w, "ion") && w.len() > 3 {
        let stem_len = w.len() - 3;
        if matches!(w[stem_len - 1], b's' | b't') && measure(&w[..stem_len]) > 1 {
            w.truncate(stem_len);
        }
    }
}

fn step5a(w: &mut Vec<u8>) {
    if !ends_with(w, "e") {
        return;
    }
    let stem = &w[..w.len() - 1];
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_cvc(stem)) {
        w.pop();
    }
}

fn step5b(w: &mut Vec<u8>) {
    if ends_with(w, "ll") && measure(w) > 1 {
        w.pop();
    }
}
