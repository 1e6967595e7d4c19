//! The admission assistant: FAQ lookup, chat dispatch, and department
//! recommendations.
//!
//! FAQ lookup runs in two stages. A TF-IDF index over the stored questions
//! answers anything with enough vocabulary overlap; a keyword-scoring
//! fallback catches queries whose terms only appear in the curated keyword
//! column. The chat layer wraps the matcher with fixed intercepts for
//! greetings and tool pointers, then a literal scan of catalog names.

pub mod chat;
pub mod index;
pub mod matcher;
pub mod recommend;
pub mod router;

pub use chat::AdmissionAssistant;
pub use index::FaqIndex;
pub use matcher::{
    best_match, reply, FaqMatch, MatchStage, EMPTY_FAQ_MESSAGE, NO_MATCH_MESSAGE,
    SIMILARITY_THRESHOLD,
};
pub use recommend::{recommend_departments, DepartmentMatch, MAX_RECOMMENDATIONS};
pub use router::assistant_router;
