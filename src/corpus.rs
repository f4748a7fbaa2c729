use crate::error::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Training data bundled into the binary; used when no corpus file is
/// configured.
const BUNDLED_TRAINING_DATA: &str = include_str!("../data/training.json");

/// One entry of the static training corpus. `similar_questions` holds
/// alternate phrasings of the same intent so the corpus author can cover
/// paraphrases without diluting the main question's score.
#[derive(Deserialize, Clone, Debug)]
pub struct TrainingExample {
    pub question: String,
    #[serde(default, rename = "similarQuestions")]
    pub similar_questions: Vec<String>,
    pub answer: String,
}

/// Read-only corpus of question/answer pairs, loaded once at startup.
#[derive(Deserialize, Clone, Debug)]
pub struct Corpus {
    pub conversations: Vec<TrainingExample>,
}

impl Corpus {
    /// Load the corpus from a file if a path is given, otherwise parse the
    /// bundled dataset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let corpus = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                serde_json::from_str(&contents)?
            }
            None => serde_json::from_str(BUNDLED_TRAINING_DATA)?,
        };
        Ok(corpus)
    }

    pub fn from_examples(conversations: Vec<TrainingExample>) -> Self {
        Corpus { conversations }
    }

    /// Find the canned answer with the best keyword overlap against the
    /// user's input, or `None` when no corpus entry shares a single token.
    ///
    /// Matching is case-insensitive and whitespace-tokenized. Each example
    /// scores max(question overlap, best similar-question overlap); a
    /// question token counts once per occurrence. The highest count wins and
    /// ties resolve to the earliest entry in corpus order, so the result is
    /// deterministic for a fixed corpus and input.
    pub fn find_response(&self, input: &str) -> Option<&str> {
        let normalized = input.to_lowercase();
        let input_tokens: HashSet<&str> = normalized.split_whitespace().collect();
        if input_tokens.is_empty() {
            return None;
        }

        let mut best: Option<(&str, usize)> = None;
        for example in &self.conversations {
            let mut match_count = overlap(&example.question, &input_tokens);
            for similar in &example.similar_questions {
                match_count = match_count.max(overlap(similar, &input_tokens));
            }

            if match_count > 0 {
                // Strictly-greater keeps the first entry on ties.
                let improves = match best {
                    Some((_, best_count)) => match_count > best_count,
                    None => true,
                };
                if improves {
                    best = Some((example.answer.as_str(), match_count));
                }
            }
        }

        best.map(|(answer, _)| answer)
    }
}

fn overlap(question: &str, input_tokens: &HashSet<&str>) -> usize {
    let normalized = question.to_lowercase();
    normalized
        .split_whitespace()
        .filter(|token| input_tokens.contains(token))
        .count()
}
