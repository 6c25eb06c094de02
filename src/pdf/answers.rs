//! Answer recovery from extracted PDF text
//!
//! The solutions PDF lists one question per line: the question number, then
//! the correct options somewhere in the rest of the line. Any capital A-D on
//! such a line counts as an answer, so descriptive words that contain those
//! letters are picked up as well.

use lazy_static::lazy_static;
use regex::Regex;

use crate::answers::AnswerMap;

lazy_static! {
    /// Question number (1-3 digits), whitespace, then the rest of the line
    static ref RE_ANSWER_LINE: Regex = Regex::new(r"^\s*([0-9]{1,3})\s+(.*)$").unwrap();

    static ref RE_OPTION_LETTER: Regex = Regex::new(r"[A-D]").unwrap();
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Parse a single trimmed line into a question number and its letters
fn parse_line(line: &str) -> Option<(u32, Vec<String>)> {
    let caps = RE_ANSWER_LINE.captures(line)?;
    let question = caps[1].parse::<u32>().ok()?;
    let letters = RE_OPTION_LETTER
        .find_iter(&caps[2])
        .map(|m| m.as_str().to_string())
        .collect();
    Some((question, letters))
}

/// Scan extracted PDF text for answer lines
///
/// Lines not starting with a question number are skipped, as are numbered
/// lines without any option letter. When a question number shows up on
/// several lines, the last one with letters wins.
pub fn parse_answer_lines(text: &str) -> AnswerMap {
    let mut answers = AnswerMap::new();
    let mut scanned = 0usize;

    for line in text.split(is_line_break).map(str::trim) {
        scanned += 1;
        if let Some((question, letters)) = parse_line(line) {
            if !letters.is_empty() {
                answers.insert(question, letters);
            }
        }
    }

    log::debug!("Scanned {} lines, found {} questions", scanned, answers.len());
    answers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_in_scan_order() {
        let answers = parse_answer_lines("12 A, C and D");
        assert_eq!(answers[&12], vec!["A", "C", "D"]);
    }

    #[test]
    fn test_line_without_leading_number() {
        let answers = parse_answer_lines("Page 3 of 10\nLoesungen A B C D");
        assert!(answers.is_empty());
    }

    #[test]
    fn test_four_digit_number_ignored() {
        let answers = parse_answer_lines("1234 A B");
        assert!(answers.is_empty());
    }

    #[test]
    fn test_number_needs_whitespace() {
        let answers = parse_answer_lines("12.A\n13A");
        assert!(answers.is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let answers = parse_answer_lines("   7\tB D   \r\n  8 C");
        assert_eq!(answers[&7], vec!["B", "D"]);
        assert_eq!(answers[&8], vec!["C"]);
    }

    #[test]
    fn test_later_line_overwrites() {
        let answers = parse_answer_lines("5 A\n5 B C");
        assert_eq!(answers[&5], vec!["B", "C"]);
    }

    #[test]
    fn test_line_without_letters_keeps_earlier_entry() {
        let answers = parse_answer_lines("5 A\n5 siehe oben");
        assert_eq!(answers[&5], vec!["A"]);

        let answers = parse_answer_lines("6 keine");
        assert!(!answers.contains_key(&6));
    }

    #[test]
    fn test_stray_capitals_are_captured() {
        // "Bundes" contributes a B
        let answers = parse_answer_lines("3 A Bundesgesetz");
        assert_eq!(answers[&3], vec!["A", "B"]);
    }

    #[test]
    fn test_lowercase_and_other_letters_ignored() {
        let answers = parse_answer_lines("9 a b E F C");
        assert_eq!(answers[&9], vec!["C"]);
    }

    #[test]
    fn test_leading_zeros() {
        let answers = parse_answer_lines("007 D");
        assert_eq!(answers[&7], vec!["D"]);
    }

    #[test]
    fn test_form_feed_separates_lines() {
        let answers = parse_answer_lines("1 A\x0c2 B");
        assert_eq!(answers.len(), 2);
    }
}
