//! Answer map shared by both answer sources

use std::collections::BTreeMap;

/// Question number to the option letters marked correct.
///
/// Letter order inside a question carries no meaning; comparisons go through
/// [`sorted_letters`].
pub type AnswerMap = BTreeMap<u32, Vec<String>>;

/// Letters for `question`, sorted, duplicates kept. Absent questions give an
/// empty list.
pub fn sorted_letters(answers: &AnswerMap, question: u32) -> Vec<String> {
    let mut letters = answers.get(&question).cloned().unwrap_or_default();
    letters.sort();
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_letters_keeps_duplicates() {
        let mut answers = AnswerMap::new();
        answers.insert(3, vec!["C".into(), "A".into(), "C".into()]);
        assert_eq!(sorted_letters(&answers, 3), vec!["A", "C", "C"]);
    }

    #[test]
    fn test_sorted_letters_absent() {
        assert!(sorted_letters(&AnswerMap::new(), 7).is_empty());
    }
}
