//! Local answers embedded in the quiz webpage
//!
//! The page carries its questions as a JavaScript object literal assigned to a
//! constant (`const QUESTIONS_DATA = {...}`). The object is valid JSON, keyed by
//! question number, and each entry lists its correct options under `correct`.
//!
//! The block is cut out with a plain brace counter. Braces inside string
//! values are counted too, so a question text containing an unbalanced `{` or
//! `}` ends the block in the wrong place and the JSON parse fails.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::answers::AnswerMap;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    #[serde(default)]
    correct: Vec<String>,
}

/// Cut the JSON object that follows `marker` out of `source`.
pub fn find_data_block<'a>(source: &'a str, marker: &str) -> Result<&'a str> {
    let start = source
        .find(marker)
        .ok_or_else(|| Error::StructureNotFound(format!("{} not found in webpage", marker)))?;

    let brace_start = source[start..]
        .find('{')
        .map(|offset| start + offset)
        .ok_or_else(|| Error::StructureNotFound(format!("{} JSON start not found", marker)))?;

    let mut depth: usize = 0;
    for (offset, ch) in source[brace_start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = brace_start + offset + ch.len_utf8();
                    return Ok(&source[brace_start..end]);
                }
            }
            _ => {}
        }
    }

    Err(Error::StructureNotFound(format!("{} JSON end not found", marker)))
}

/// Parse the extracted object into an answer map.
///
/// Entries are visited in document order, so when two keys name the same
/// question (`"01"` and `"1"`) the later one wins.
pub fn parse_answer_block(json: &str) -> Result<AnswerMap> {
    let invalid = |e: serde_json::Error| Error::StructureNotFound(format!("invalid question data: {}", e));
    let entries: Map<String, Value> = serde_json::from_str(json).map_err(invalid)?;

    entries
        .into_iter()
        .map(|(key, value)| {
            let question = key.trim().parse::<u32>().map_err(|_| {
                Error::StructureNotFound(format!("question key is not a number: {:?}", key))
            })?;
            let entry: QuestionEntry = serde_json::from_value(value).map_err(invalid)?;
            Ok((question, entry.correct))
        })
        .collect()
}

/// Locate and parse the embedded question data in a webpage source.
pub fn load_local_answers(source: &str, marker: &str) -> Result<AnswerMap> {
    let block = find_data_block(source, marker)?;
    log::debug!("Question data block is {} bytes", block.len());

    let answers = parse_answer_block(block)?;
    log::info!("Loaded {} local answers", answers.len());
    Ok(answers)
}

/// Read a webpage from disk and load its embedded answers.
pub fn load_local_answers_from_file(path: &Path, marker: &str) -> Result<AnswerMap> {
    if !path.exists() {
        return Err(Error::InputMissing(path.to_path_buf()));
    }

    let source = std::fs::read_to_string(path)?;
    load_local_answers(&source, marker)
}
