use std::collections::{HashMap, HashSet};

use crate::datasets::FaqRecord;

/// English words carrying no signal for similarity scoring, dropped during
/// tokenization on both the indexing and the query side.
const ENGLISH_STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

pub(crate) type SparseVector = HashMap<usize, f32>;

/// Immutable FAQ search index: the record store plus a TF-IDF vector space
/// fitted once over the stored questions.
///
/// The FAQ set never changes after load, so the fitted vocabulary and
/// document vectors are cached at construction instead of being rebuilt per
/// query. Safe to share for concurrent read-only matching.
#[derive(Debug, Clone)]
pub struct FaqIndex {
    records: Vec<FaqRecord>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    question_vectors: Vec<SparseVector>,
}

impl FaqIndex {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        let documents: Vec<Vec<String>> = records
            .iter()
            .map(|record| tokenize(&record.question))
            .collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for tokens in &documents {
            for token in tokens {
                let next_term = vocabulary.len();
                vocabulary.entry(token.clone()).or_insert(next_term);
            }
        }

        let mut document_frequency = vec![0u32; vocabulary.len()];
        for tokens in &documents {
            let mut counted: HashSet<usize> = HashSet::new();
            for token in tokens {
                if let Some(&term) = vocabulary.get(token) {
                    if counted.insert(term) {
                        document_frequency[term] += 1;
                    }
                }
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1, never zero or negative.
        let total_documents = documents.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + total_documents) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let question_vectors = documents
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();

        Self {
            records,
            vocabulary,
            idf,
            question_vectors,
        }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cosine similarity of `query` against every stored question. Returns
    /// the best record index and its score; ties keep the earliest record.
    /// `None` when the query shares no vocabulary with the index.
    pub(crate) fn most_similar(&self, query: &str) -> Option<(usize, f32)> {
        let query_vector = weigh(&tokenize(query), &self.vocabulary, &self.idf);
        if query_vector.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f32)> = None;
        for (at, vector) in self.question_vectors.iter().enumerate() {
            let score = cosine(&query_vector, vector);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((at, score)),
            }
        }

        best
    }
}

/// Lowercased word tokens of two or more alphanumeric/underscore characters,
/// minus stopwords (the usual vectorizer convention for English text).
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in lowered.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.push(ch);
        } else if !current.is_empty() {
            push_token(&mut tokens, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, current);
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, token: String) {
    if token.chars().count() >= 2 && !ENGLISH_STOPWORDS.contains(&token.as_str()) {
        tokens.push(token);
    }
}

/// Term-frequency times idf, L2-normalized so that the dot product of two
/// vectors is their cosine similarity.
fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> SparseVector {
    let mut weights: SparseVector = HashMap::new();
    for token in tokens {
        if let Some(&term) = vocabulary.get(token) {
            *weights.entry(term).or_insert(0.0) += idf[term];
        }
    }

    let norm = weights
        .values()
        .map(|weight| weight * weight)
        .sum::<f32>()
        .sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }

    weights
}

fn cosine(a: &SparseVector, b: &SparseVector) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum()
}
