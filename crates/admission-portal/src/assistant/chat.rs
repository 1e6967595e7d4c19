use tracing::debug;

use super::index::FaqIndex;
use super::matcher::{self, FaqMatch};
use super::recommend::{recommend_departments, DepartmentMatch};
use crate::datasets::{InfoCatalog, PortalData};

const WAIVER_TERMS: [&str; 4] = ["waiver", "scholarship", "financial aid", "discount"];
const GREETINGS: [&str; 3] = ["hello", "hi", "hey"];

const WAIVER_TOOL_REPLY: &str = "I can help you understand DIU's waiver system! Use our Waiver \
     Calculator tool to see what you might qualify for based on your academic performance and \
     profile.";
const GREETING_REPLY: &str =
    "Welcome to DIU's Premium Admission Portal! Ask about admissions, programs, or waivers.";
const SMALL_TALK_REPLY: &str = "I'm doing great! Ready to assist with your admission queries.";
const GUIDANCE_REPLY: &str =
    "Let's get you sorted! Try the 'Recommendation' tool or ask about specific programs.";
const RECOMMENDER_REPLY: &str =
    "Use our 'Recommendation' tool to find the perfect department based on your GPA and interests.";
const FALLBACK_REPLY: &str =
    "Could you rephrase your question? Try asking about programs or waivers.";

/// Conversational front door: fixed intercepts, then the FAQ matcher, then a
/// literal scan of catalog names.
#[derive(Debug, Clone)]
pub struct AdmissionAssistant {
    index: FaqIndex,
    catalog: InfoCatalog,
}

impl AdmissionAssistant {
    pub fn new(index: FaqIndex, catalog: InfoCatalog) -> Self {
        Self { index, catalog }
    }

    pub fn from_data(data: PortalData) -> Self {
        Self::new(FaqIndex::new(data.faq), data.catalog)
    }

    pub fn index(&self) -> &FaqIndex {
        &self.index
    }

    pub fn catalog(&self) -> &InfoCatalog {
        &self.catalog
    }

    /// Structured FAQ lookup for callers that need the matched question and
    /// stage, not just an answer string.
    pub fn best_match(&self, question: &str) -> Option<FaqMatch> {
        matcher::best_match(&self.index, question)
    }

    /// FAQ lookup folded to a displayable string, sentinels included.
    pub fn faq_reply(&self, question: &str) -> String {
        matcher::reply(&self.index, question)
    }

    pub fn recommend(&self, interests: &str, ssc_gpa: f32, hsc_gpa: f32) -> Vec<DepartmentMatch> {
        recommend_departments(&self.catalog.departments, interests, ssc_gpa, hsc_gpa)
    }

    /// Dispatches a chat message through the fixed rules in order; the first
    /// hit wins. Greetings must match the whole trimmed message, the other
    /// intercepts are substring checks.
    pub fn reply(&self, message: &str) -> String {
        let normalized = message.trim().to_lowercase();

        if WAIVER_TERMS.iter().any(|term| normalized.contains(term)) {
            return WAIVER_TOOL_REPLY.to_string();
        }
        if GREETINGS.contains(&normalized.as_str()) {
            return GREETING_REPLY.to_string();
        }
        if normalized.contains("how are you") {
            return SMALL_TALK_REPLY.to_string();
        }
        if normalized.contains("help") || normalized.contains("confused") {
            return GUIDANCE_REPLY.to_string();
        }
        if normalized.contains("department") || normalized.contains("choose") {
            return RECOMMENDER_REPLY.to_string();
        }

        if let Some(found) = self.best_match(message) {
            debug!(question = %found.question, "chat answered from the FAQ");
            return found.answer;
        }

        if let Some(found) = self.catalog_reply(&normalized) {
            return found;
        }

        debug!("chat fell through to the default reply");
        FALLBACK_REPLY.to_string()
    }

    /// Looks for a catalog entry whose name appears verbatim in the message.
    /// Waivers are scanned before programs, catalog order within each.
    fn catalog_reply(&self, normalized: &str) -> Option<String> {
        for waiver in &self.catalog.waivers {
            if !waiver.name.is_empty() && normalized.contains(&waiver.name.to_lowercase()) {
                debug!(name = %waiver.name, "chat answered from the waiver catalog");
                return Some(format!(
                    "**{}** ({}): {}.",
                    waiver.name, waiver.waiver_rate, waiver.description
                ));
            }
        }
        for program in &self.catalog.programs {
            if !program.name.is_empty() && normalized.contains(&program.name.to_lowercase()) {
                debug!(name = %program.name, "chat answered from the program catalog");
                return Some(format!("**{}**: {}.", program.name, program.details));
            }
        }
        None
    }
}
