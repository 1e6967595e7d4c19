use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::index::FaqIndex;

/// Cosine similarity floor for the vector stage.
pub const SIMILARITY_THRESHOLD: f32 = 0.2;

/// Minimum keyword-overlap score the fallback stage accepts.
pub const MIN_KEYWORD_SCORE: u32 = 2;

const BOOST_PHRASES: [&str; 3] = ["bba", "nfe", "admission test"];
const BOOST_WEIGHT: u32 = 2;

/// Reply when the FAQ store has no rows at all.
pub const EMPTY_FAQ_MESSAGE: &str =
    "I'm sorry, I don't have enough information to answer your question.";

/// Reply when neither matching stage clears its threshold.
pub const NO_MATCH_MESSAGE: &str = "I'm sorry, I couldn't find an answer to your question. \
     Please try rephrasing or contact admission@diu.net.bd.";

/// Conversational filler stripped from the query before vectorization. The
/// fallback stage sees the raw query.
const QUERY_STOPWORDS: [&str; 19] = [
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "what", "how", "when",
    "where", "why", "of", "in", "on", "to",
];

/// Which stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Similarity,
    Keyword,
}

impl MatchStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Similarity => "similarity",
            Self::Keyword => "keyword",
        }
    }
}

/// A successful FAQ lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqMatch {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub stage: MatchStage,
}

/// Two-stage lookup: TF-IDF cosine similarity first, keyword overlap as the
/// fallback. `None` means neither stage cleared its threshold.
pub fn best_match(index: &FaqIndex, query: &str) -> Option<FaqMatch> {
    let stripped = strip_query_stopwords(query);
    if let Some((at, score)) = index.most_similar(&stripped) {
        if score >= SIMILARITY_THRESHOLD {
            return Some(to_match(index, at, MatchStage::Similarity));
        }
    }

    keyword_match(index, query).map(|at| to_match(index, at, MatchStage::Keyword))
}

/// Sentinel-folding entry point: always returns something presentable.
pub fn reply(index: &FaqIndex, query: &str) -> String {
    if index.is_empty() {
        return EMPTY_FAQ_MESSAGE.to_string();
    }

    match best_match(index, query) {
        Some(found) => found.answer,
        None => NO_MATCH_MESSAGE.to_string(),
    }
}

/// Word-set overlap with fixed phrase boosts. Questions that are just links
/// are skipped; a candidate replaces the current best only on a strictly
/// greater score, so the earliest of equals wins.
fn keyword_match(index: &FaqIndex, query: &str) -> Option<usize> {
    let query_lower = query.to_lowercase();
    let query_words = word_set(&query_lower);
    if query_words.is_empty() {
        return None;
    }

    let mut best: Option<(usize, u32)> = None;

    for (at, record) in index.records().iter().enumerate() {
        let question_lower = record.question.to_lowercase();
        if question_lower.contains("http") || question_lower.contains("www.") {
            continue;
        }

        let mut candidate_words = word_set(&question_lower);
        for keyword in &record.keywords {
            candidate_words.extend(word_set(keyword));
        }

        let mut score = query_words.intersection(&candidate_words).count() as u32;
        for phrase in BOOST_PHRASES {
            if query_lower.contains(phrase) && question_lower.contains(phrase) {
                score += BOOST_WEIGHT;
            }
        }

        let beats_best = best.map_or(true, |(_, best_score)| score > best_score);
        if score >= MIN_KEYWORD_SCORE && beats_best {
            best = Some((at, score));
        }
    }

    best.map(|(at, _)| at)
}

/// Whitespace words with edge punctuation trimmed, so "test?" and "test"
/// count as the same term.
fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|ch: char| !ch.is_alphanumeric())
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn strip_query_stopwords(query: &str) -> String {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !QUERY_STOPWORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_match(index: &FaqIndex, at: usize, stage: MatchStage) -> FaqMatch {
    let record = &index.records()[at];
    FaqMatch {
        question: record.question.clone(),
        answer: record.answer.clone(),
        category: record.category.clone(),
        stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{builtin_faq, FaqRecord};

    fn record(question: &str, answer: &str, keywords: &[&str]) -> FaqRecord {
        FaqRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            category: "Test".to_string(),
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        }
    }

    #[test]
    fn exact_question_matches_through_similarity() {
        let index = FaqIndex::new(builtin_faq());

        let found = best_match(&index, "What programs does DIU offer?")
            .expect("exact question should match");

        assert_eq!(found.stage, MatchStage::Similarity);
        assert_eq!(
            found.answer,
            "DIU offers programs in Engineering, Business, Humanities, and more."
        );
    }

    #[test]
    fn gibberish_misses_both_stages() {
        let index = FaqIndex::new(builtin_faq());

        assert!(best_match(&index, "xyz unrelated gibberish").is_none());
        assert_eq!(reply(&index, "xyz unrelated gibberish"), NO_MATCH_MESSAGE);
    }

    #[test]
    fn empty_index_reports_no_information() {
        let index = FaqIndex::new(Vec::new());

        assert_eq!(reply(&index, "anything"), EMPTY_FAQ_MESSAGE);
    }

    #[test]
    fn matching_is_idempotent() {
        let index = FaqIndex::new(builtin_faq());

        let first = best_match(&index, "How do I apply for admission?");
        let second = best_match(&index, "How do I apply for admission?");

        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn keyword_stage_catches_vocabulary_the_vector_space_lacks() {
        // The question shares no content words with the query; only the
        // keyword column links them, so the vector stage scores zero.
        let index = FaqIndex::new(vec![
            record(
                "What is the cost of studying business?",
                "See the tuition schedule.",
                &["bba tuition fees"],
            ),
            record("Where is the campus?", "Dhaka.", &[]),
        ]);

        let found = best_match(&index, "tuition fees please").expect("keywords should match");

        assert_eq!(found.stage, MatchStage::Keyword);
        assert_eq!(found.answer, "See the tuition schedule.");
    }

    #[test]
    fn keyword_ties_keep_the_first_record() {
        let index = FaqIndex::new(vec![
            record("Alpha question?", "first", &["visa", "hostel"]),
            record("Beta question?", "second", &["visa", "hostel"]),
        ]);

        let found = best_match(&index, "visa hostel").expect("both rows tie at two");

        assert_eq!(found.answer, "first");
        assert_eq!(found.stage, MatchStage::Keyword);
    }

    #[test]
    fn single_word_overlap_is_below_the_floor() {
        let index = FaqIndex::new(vec![record("Alpha question?", "first", &["visa"])]);

        assert!(best_match(&index, "zzqq visa").is_none());
    }

    #[test]
    fn link_only_questions_are_skipped_by_the_fallback() {
        let index = FaqIndex::new(vec![
            record(
                "Portal guide at www.portal.example.edu",
                "link row",
                &["visa", "hostel"],
            ),
            record("Gamma question?", "kept row", &["visa", "hostel"]),
        ]);

        let found = best_match(&index, "visa hostel").expect("non-link row should match");

        assert_eq!(found.answer, "kept row");
        assert_eq!(found.stage, MatchStage::Keyword);
    }

    #[test]
    fn boost_phrases_lift_weak_overlaps_over_the_floor() {
        // "nfes" never tokenizes to "nfe", so word overlap is zero and only
        // the shared phrase carries the score past the floor.
        let index = FaqIndex::new(vec![record(
            "Does DIU run NFE programs?",
            "Yes, through the open school.",
            &[],
        )]);

        let found = best_match(&index, "tell me about nfes").expect("boost should lift the score");
        assert_eq!(found.stage, MatchStage::Keyword);
        assert_eq!(found.answer, "Yes, through the open school.");

        assert!(best_match(&index, "tell me about something").is_none());
    }

    #[test]
    fn punctuation_does_not_break_word_overlap() {
        let index = FaqIndex::new(vec![record(
            "Accommodation and entry papers?",
            "Both are on the website.",
            &["visa", "hostel"],
        )]);

        let found = best_match(&index, "visa... hostel!!").expect("trimmed words should match");

        assert_eq!(found.answer, "Both are on the website.");
        assert_eq!(found.stage, MatchStage::Keyword);
    }
}
