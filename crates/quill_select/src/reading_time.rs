/// Assumed reading speed for the estimate shown under article titles.
pub const WORDS_PER_MINUTE: usize = 200;

/// Human-readable reading-time estimate for a block of text. Words are
/// whatever whitespace splitting produces; minutes are floored.
pub fn reading_time(text: &str) -> String {
    let words = text.split_whitespace().count();
    let minutes = words / WORDS_PER_MINUTE;
    match minutes {
        0 => "less than 1 minute".to_string(),
        1 => "about 1 minute".to_string(),
        n => format!("about {} minutes", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(reading_time(""), "less than 1 minute");
    }

    #[test]
    fn test_under_a_minute() {
        assert_eq!(reading_time(&words(199)), "less than 1 minute");
    }

    #[test]
    fn test_exactly_one_minute() {
        assert_eq!(reading_time(&words(200)), "about 1 minute");
    }

    #[test]
    fn test_floors_partial_minutes() {
        assert_eq!(reading_time(&words(450)), "about 2 minutes");
    }

    #[test]
    fn test_ignores_extra_whitespace() {
        assert_eq!(reading_time("  \n\t  "), "less than 1 minute");
        assert_eq!(reading_time(&words(200).replace(' ', "\n\n")), "about 1 minute");
    }

    #[test]
    fn test_idempotent() {
        let text = words(500);
        assert_eq!(reading_time(&text), reading_time(&text));
    }
}
