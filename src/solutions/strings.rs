//! Greatest Common Divisor of Strings.
//!
//! A string `d` divides `s` when `s` is `d` concatenated with itself one
//! or more times. The solution looks for the longest `d` dividing both
//! inputs.

/// Returns true if `target` is one or more back-to-back copies of `unit`.
///
/// An empty unit tiles nothing, and an empty target is not a positive
/// repetition of anything.
pub fn is_tiled_by(target: &str, unit: &str) -> bool {
    repeats(target, unit).is_some()
}

/// Number of copies of `unit` that make up `target`, if it tiles.
pub fn repeats(target: &str, unit: &str) -> Option<usize> {
    let (target, unit) = (target.as_bytes(), unit.as_bytes());
    if unit.is_empty() || target.is_empty() || target.len() % unit.len() != 0 {
        return None;
    }
    if target.chunks_exact(unit.len()).all(|chunk| chunk == unit) {
        Some(target.len() / unit.len())
    } else {
        None
    }
}

/// Longest string that tiles both `a` and `b`, or an empty string if none does.
///
/// Any common divisor is a prefix of the longer input, so candidates are the
/// prefixes of the longer string from longest to shortest and the first one
/// tiling both inputs is the answer. O(L²) for L the longer length.
pub fn gcd_of_strings(a: &str, b: &str) -> String {
    let longer = if a.len() < b.len() { b } else { a };

    for len in (1..=longer.len()).rev() {
        // Lengths are in bytes; a tiling unit always ends on a char boundary.
        if !longer.is_char_boundary(len) {
            continue;
        }
        let candidate = &longer[..len];
        if is_tiled_by(a, candidate) && is_tiled_by(b, candidate) {
            return candidate.to_string();
        }
    }

    String::new()
}

/// Reference solution: two strings share a divisor iff `a + b == b + a`, and
/// then the greatest one has length `gcd(|a|, |b|)`.
pub fn gcd_of_strings_by_length(a: &str, b: &str) -> String {
    if a.is_empty() || b.is_empty() {
        return String::new();
    }
    if format!("{a}{b}") != format!("{b}{a}") {
        return String::new();
    }
    a[..gcd(a.len(), b.len())].to_string()
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_longer_repeats_shorter() {
        assert_eq!(gcd_of_strings("ABCABC", "ABC"), "ABC");
        assert_eq!(gcd_of_strings("ABC", "ABCABC"), "ABC");
    }

    #[test]
    fn test_shared_shorter_unit() {
        assert_eq!(gcd_of_strings("ABABAB", "ABAB"), "AB");
    }

    #[test]
    fn test_no_common_divisor() {
        assert_eq!(gcd_of_strings("LEET", "CODE"), "");
        assert_eq!(gcd_of_strings("ABAB", "BABA"), "");
        assert_eq!(gcd_of_strings("AAB", "AA"), "");
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(gcd_of_strings("XYZ", "XYZ"), "XYZ");
        assert_eq!(gcd_of_strings("AAAA", "AAAA"), "AAAA");
    }

    #[test]
    fn test_coprime_repeat_counts() {
        // 6 and 4 copies of "A": gcd length 2
        assert_eq!(gcd_of_strings("AAAAAA", "AAAA"), "AA");
        // 3 and 2 copies of "XY"
        assert_eq!(gcd_of_strings("XYXYXY", "XYXY"), "XY");
    }

    #[test]
    fn test_empty_inputs_have_no_divisor() {
        assert_eq!(gcd_of_strings("", "ABC"), "");
        assert_eq!(gcd_of_strings("ABC", ""), "");
        assert_eq!(gcd_of_strings("", ""), "");
    }

    #[test]
    fn test_multibyte_input_stays_on_char_boundaries() {
        assert_eq!(gcd_of_strings("éaéaéa", "éaéa"), "éa");
        assert_eq!(gcd_of_strings("ééé", "é"), "é");
        assert_eq!(gcd_of_strings("日本", "本日"), "");
    }

    #[test]
    fn test_repeats_counts_copies() {
        assert_eq!(repeats("ABCABC", "ABC"), Some(2));
        assert_eq!(repeats("ABC", "ABC"), Some(1));
        assert_eq!(repeats("ABCAB", "ABC"), None);
        assert_eq!(repeats("ABCABD", "ABC"), None);
        assert_eq!(repeats("ABC", ""), None);
        assert_eq!(repeats("", "ABC"), None);
    }

    #[test]
    fn test_reference_agrees_on_examples() {
        let pairs = [
            ("ABCABC", "ABC"),
            ("ABABAB", "ABAB"),
            ("LEET", "CODE"),
            ("AAAAAA", "AAAA"),
            ("", "A"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                gcd_of_strings(a, b),
                gcd_of_strings_by_length(a, b),
                "solutions disagree on ({a:?}, {b:?})"
            );
        }
    }

    /// Every common divisor, found by checking all prefix lengths of `a`.
    fn all_common_divisors(a: &str, b: &str) -> Vec<String> {
        (1..=a.len())
            .map(|len| &a[..len])
            .filter(|d| is_tiled_by(a, d) && is_tiled_by(b, d))
            .map(str::to_string)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_result_tiles_both_inputs(a in "[AB]{1,12}", b in "[AB]{1,12}") {
            let d = gcd_of_strings(&a, &b);
            if !d.is_empty() {
                prop_assert_eq!(d.repeat(a.len() / d.len()), a.clone());
                prop_assert_eq!(d.repeat(b.len() / d.len()), b.clone());
            }
        }

        #[test]
        fn prop_result_is_maximal(a in "[AB]{1,12}", b in "[AB]{1,12}") {
            let d = gcd_of_strings(&a, &b);
            let longest = all_common_divisors(&a, &b).into_iter().max_by_key(String::len);
            prop_assert_eq!(d, longest.unwrap_or_default());
        }

        #[test]
        fn prop_tiled_pairs_always_share_a_divisor(
            unit in "[ABC]{1,4}",
            m in 1usize..6,
            n in 1usize..6,
        ) {
            let a = unit.repeat(m);
            let b = unit.repeat(n);
            let d = gcd_of_strings(&a, &b);
            prop_assert!(!d.is_empty());
            prop_assert!(is_tiled_by(&unit.repeat(m.max(n)), &d));
        }

        #[test]
        fn prop_string_divides_itself(s in "[a-z]{1,16}") {
            prop_assert_eq!(gcd_of_strings(&s, &s), s);
        }

        #[test]
        fn prop_matches_length_gcd_reference(a in "[AB]{0,10}", b in "[AB]{0,10}") {
            prop_assert_eq!(gcd_of_strings(&a, &b), gcd_of_strings_by_length(&a, &b));
        }
    }
}
