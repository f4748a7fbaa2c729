use tamly::corpus::{Corpus, TrainingExample};

fn example(question: &str, similar: &[&str], answer: &str) -> TrainingExample {
    TrainingExample {
        question: question.to_string(),
        similar_questions: similar.iter().map(|s| s.to_string()).collect(),
        answer: answer.to_string(),
    }
}

#[test]
fn test_matches_best_overlap() {
    let corpus = Corpus::from_examples(vec![
        example("làm sao để ngủ ngon", &[], "answer-sleep"),
        example("cảm thấy lo âu", &[], "answer-anxiety"),
    ]);

    let response = corpus.find_response("Tôi cảm thấy lo âu");
    assert_eq!(response, Some("answer-anxiety"));
}

#[test]
fn test_deterministic_across_invocations() {
    let corpus = Corpus::from_examples(vec![
        example("cảm thấy lo âu", &[], "answer-anxiety"),
        example("bị mất ngủ", &[], "answer-sleep"),
    ]);

    let first = corpus.find_response("tôi bị lo âu và mất ngủ");
    for _ in 0..10 {
        assert_eq!(corpus.find_response("tôi bị lo âu và mất ngủ"), first);
    }
}

#[test]
fn test_tie_breaks_to_earlier_entry() {
    // Both entries share exactly one token with the input.
    let corpus = Corpus::from_examples(vec![
        example("áp lực thi cử", &[], "answer-first"),
        example("áp lực gia đình", &[], "answer-second"),
    ]);

    assert_eq!(corpus.find_response("tôi bị áp đảo"), Some("answer-first"));
}

#[test]
fn test_paraphrase_count_is_max_not_sum() {
    // If variant counts were summed, the second entry would score 1 + 2 = 3
    // and win; with max it scores 2, ties the first entry, and loses the
    // tie-break.
    let corpus = Corpus::from_examples(vec![
        example("mất ngủ ban đêm", &[], "answer-first"),
        example("khó ngủ", &["mất ngủ trằn trọc"], "answer-second"),
    ]);

    assert_eq!(
        corpus.find_response("tôi mất ngủ thường xuyên"),
        Some("answer-first")
    );
}

#[test]
fn test_similar_question_can_dominate() {
    let corpus = Corpus::from_examples(vec![
        example("chuyện khác hẳn", &[], "answer-other"),
        example("một câu gốc", &["dạo này hay lo lắng"], "answer-anxiety"),
    ]);

    assert_eq!(
        corpus.find_response("dạo này tôi hay lo lắng"),
        Some("answer-anxiety")
    );
}

#[test]
fn test_question_token_counts_per_occurrence() {
    // The later entry's question repeats a matching token, so it scores 2
    // and beats the earlier single-token match.
    let corpus = Corpus::from_examples(vec![
        example("sớm mai", &[], "answer-single"),
        example("ngủ ngủ", &[], "answer-repeated"),
    ]);

    assert_eq!(corpus.find_response("ngủ sớm"), Some("answer-repeated"));
}

#[test]
fn test_case_insensitive_matching() {
    let corpus = Corpus::from_examples(vec![example("cảm thấy lo âu", &[], "answer-anxiety")]);

    assert_eq!(corpus.find_response("LO ÂU QUÁ"), Some("answer-anxiety"));
}

#[test]
fn test_no_overlap_returns_none() {
    let corpus = Corpus::from_examples(vec![
        example("cảm thấy lo âu", &[], "answer-anxiety"),
        example("bị mất ngủ", &["khó ngủ"], "answer-sleep"),
    ]);

    assert_eq!(corpus.find_response("asdkjasd"), None);
}

#[test]
fn test_blank_input_returns_none() {
    let corpus = Corpus::from_examples(vec![example("cảm thấy lo âu", &[], "answer-anxiety")]);

    assert_eq!(corpus.find_response("   "), None);
    assert_eq!(corpus.find_response(""), None);
}

#[test]
fn test_bundled_corpus_loads() {
    let corpus = Corpus::load(None).unwrap();
    assert!(!corpus.conversations.is_empty());
    assert!(corpus.find_response("tôi cảm thấy lo âu").is_some());
}
