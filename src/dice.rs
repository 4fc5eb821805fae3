use std::collections::HashMap;

/// Sørensen–Dice coefficient over character bigrams, in [0, 1].
///
/// Whitespace is ignored, bigrams are counted (multiset intersection), and
/// strings shorter than one bigram score 0.0 against anything unequal. Two
/// strings that are identical after whitespace removal score 1.0.
pub fn similarity(first: &str, second: &str) -> f64 {
    let a: Vec<char> = first.chars().filter(|c| !c.is_whitespace()).collect();
    let b: Vec<char> = second.chars().filter(|c| !c.is_whitespace()).collect();

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut overlap = 0usize;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1]))
            && *count > 0
        {
            *count -= 1;
            overlap += 1;
        }
    }

    (2.0 * overlap as f64) / ((a.len() - 1) + (b.len() - 1)) as f64
}

#[cfg(test)]
mod tests {
    use super::similarity;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("healed", "healed"), 1.0);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(similarity("hello world", "helloworld"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abcdef", "xyz"), 0.0);
    }

    #[test]
    fn known_value_night_nacht() {
        // bigrams ni/ig/gh/ht vs na/ac/ch/ht share only ht: 2*1/(4+4)
        assert_eq!(similarity("night", "nacht"), 0.25);
    }

    #[test]
    fn single_char_and_empty_inputs_score_zero() {
        assert_eq!(similarity("a", "abc"), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn repeated_bigrams_are_counted_not_set_matched() {
        // aaa has two "aa" bigrams, aa has one; overlap is limited to one.
        assert_eq!(similarity("aaa", "aa"), 2.0 / 3.0);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        for (a, b) in [
            ("what is your mission", "what is your vision"),
            ("donate", "donation"),
            ("hi", "hello"),
        ] {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a} vs {b} scored {score}");
        }
    }
}
