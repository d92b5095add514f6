//! Alphanumeric palindrome predicate
//!
//! Ignores every non-alphanumeric character and compares case-insensitively.
//! Empty input, and input with no alphanumeric characters, is a palindrome.
//!
//! Two scans, both O(n) time and O(1) space (no filtered copy is built):
//! - [`is_palindrome`] works on `&str` with Unicode semantics. The two
//!   pointers are the front and back of a double-ended `chars()` iterator,
//!   so multi-byte characters are stepped over whole.
//! - [`is_palindrome_ascii`] works on raw bytes with explicit `left`/`right`
//!   indices and ASCII classification.
//!
//! Unicode behavior: alphanumeric means `char::is_alphanumeric` (letters and
//! numerics of any script). Case-insensitive means the `to_lowercase()`
//! expansions are equal, compared per character as a whole: `İ` lowercases
//! to `i` + U+0307, which does not match a plain `i`, so `"İi"` is not a
//! palindrome. There is no accent stripping (`é` != `e`) and no full case
//! folding (`ß` != `SS`).

use crate::probe::Probe;

#[inline(always)]
fn eq_lowercase(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Unicode-aware alphanumeric palindrome check.
#[inline]
pub fn is_palindrome(text: &str) -> bool {
    is_palindrome_probed(text, &mut ())
}

/// [`is_palindrome`] reporting one step per character comparison.
pub fn is_palindrome_probed<P: Probe>(text: &str, probe: &mut P) -> bool {
    let mut chars = text.chars().filter(|c| c.is_alphanumeric());

    // front and back converge; a lone middle character leaves `next_back` empty
    while let (Some(left), Some(right)) = (chars.next(), chars.next_back()) {
        probe.step();
        if !eq_lowercase(left, right) {
            log::trace!("is_palindrome: mismatch {left:?} vs {right:?}");
            return false;
        }
    }

    true
}

/// Byte-oriented check with ASCII alphanumeric classification.
///
/// Non-ASCII bytes count as non-alphanumeric and are skipped.
#[inline]
pub fn is_palindrome_ascii(bytes: &[u8]) -> bool {
    is_palindrome_ascii_probed(bytes, &mut ())
}

/// [`is_palindrome_ascii`] reporting one step per byte comparison.
pub fn is_palindrome_ascii_probed<P: Probe>(bytes: &[u8], probe: &mut P) -> bool {
    if bytes.is_empty() {
        return true;
    }

    let mut left = 0;
    let mut right = bytes.len() - 1;
    while left < right {
        while left < right && !bytes[left].is_ascii_alphanumeric() {
            left += 1;
        }
        while left < right && !bytes[right].is_ascii_alphanumeric() {
            right -= 1;
        }
        // lone middle byte, or nothing alphanumeric left
        if left == right {
            break;
        }

        probe.step();
        if !bytes[left].eq_ignore_ascii_case(&bytes[right]) {
            return false;
        }

        left += 1;
        right -= 1;
    }

    true
}

/// Baseline that buffers the lowercase expansion of every alphanumeric
/// character and compares the list with its reverse. Expansions stay grouped
/// per character, matching [`is_palindrome`]. O(n) extra space.
pub fn is_palindrome_buffered(text: &str) -> bool {
    let folded: Vec<String> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_lowercase().collect())
        .collect();
    folded.iter().eq(folded.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::StepCounter;

    const CASES: [(&str, bool); 14] = [
        ("", true),
        ("a", true),
        ("A man a plan a canal Panama", true),
        ("race a car", false),
        ("a dog! a panic in a pagoda.", true),
        ("Madam", true),
        ("No 'x' in Nixon", true),
        ("12321", true),
        ("12345", false),
        ("A Santa at NASA", true),
        ("Was it a car or a cat I saw?", true),
        ("12345abcde54321", false),
        ("Abc3cbA", true),
        ("ab", false),
    ];

    #[test]
    fn ascii_fixtures() {
        for (text, expected) in CASES {
            assert_eq!(is_palindrome(text), expected, "is_palindrome({text:?})");
            assert_eq!(
                is_palindrome_ascii(text.as_bytes()),
                expected,
                "is_palindrome_ascii({text:?})"
            );
            assert_eq!(
                is_palindrome_buffered(text),
                expected,
                "is_palindrome_buffered({text:?})"
            );
        }
    }

    #[test]
    fn only_punctuation_is_palindrome() {
        assert!(is_palindrome(" .,!?  "));
        assert!(is_palindrome_ascii(b" .,!?  "));
        assert!(is_palindrome_ascii(b"!"));
    }

    #[test]
    fn pointers_meet_after_skipping() {
        assert!(is_palindrome_ascii(b"a!"));
        assert!(is_palindrome_ascii(b"!a"));
        assert!(is_palindrome_ascii(b"?!a!!"));
        assert!(is_palindrome("a!"));
    }

    #[test]
    fn punctuation_at_the_edges() {
        assert!(is_palindrome("..a.."));
        assert!(is_palindrome_ascii(b"..a.."));
        assert!(!is_palindrome("!ab?"));
        assert!(!is_palindrome_ascii(b"!ab?"));
    }

    #[test]
    fn unicode_letters_and_case() {
        assert!(is_palindrome("ΑβΒα"));
        assert!(is_palindrome("А роза упала на лапу Азора"));
        assert!(is_palindrome("été"));
        assert!(is_palindrome("Été, été!"));
    }

    #[test]
    fn unicode_has_no_accent_stripping() {
        assert!(!is_palindrome("Ésope reste ici et se repose"));
        assert!(!is_palindrome("ée"));
    }

    #[test]
    fn unicode_is_not_full_case_folding() {
        assert!(!is_palindrome("ßSS"));
        assert!(!is_palindrome_buffered("ßSS"));
    }

    #[test]
    fn multi_char_lowercase_compares_whole_expansion() {
        // 'İ' lowercases to "i\u{307}"
        assert!(!is_palindrome("İi"));
        assert!(!is_palindrome_buffered("İi"));
        assert!(!is_palindrome("i, İ"));
        assert!(!is_palindrome_buffered("i, İ"));
        assert!(is_palindrome("İ.x.İ"));
        assert!(is_palindrome_buffered("İ.x.İ"));
    }

    #[test]
    fn ascii_scan_skips_non_ascii_bytes() {
        // "été" has no ASCII alphanumerics except 't'
        assert!(is_palindrome_ascii("été".as_bytes()));
        // The Unicode scan compares 'é' with 'e'
        assert!(!is_palindrome("étÉe"));
    }

    #[test]
    fn comparisons_are_at_most_half() {
        let text = "ab".repeat(500) + &"ba".repeat(500);
        let mut counter = StepCounter::new();
        assert!(is_palindrome_probed(&text, &mut counter));
        assert_eq!(counter.steps, 1000);

        let mut counter = StepCounter::new();
        assert!(is_palindrome_ascii_probed(text.as_bytes(), &mut counter));
        assert_eq!(counter.steps, 1000);
    }

    #[test]
    fn mismatch_returns_early() {
        let text = format!("x{}y", "a".repeat(1000));
        let mut counter = StepCounter::new();
        assert!(!is_palindrome_probed(&text, &mut counter));
        assert_eq!(counter.steps, 1);
    }
}
