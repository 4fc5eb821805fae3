/// Canonical comparable form of an utterance: lowercased, stripped of
/// everything that is not a letter, digit, underscore, or whitespace, with
/// whitespace runs collapsed to single spaces and the ends trimmed.
///
/// Catalog examples and runtime input must pass through the same function,
/// otherwise similarity scores between the two are skewed.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("What is STEM Inspires' mission?"),
            "what is stem inspires mission"
        );
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  hello\t there \n friend  "), "hello there friend");
    }

    #[test]
    fn empty_and_punctuation_only_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("?!...,;:"), "");
    }

    #[test]
    fn keeps_unicode_letters_and_digits() {
        assert_eq!(normalize("Água é vida! 42"), "água é vida 42");
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(normalize("ftc_teams rock"), "ftc_teams rock");
    }
}
