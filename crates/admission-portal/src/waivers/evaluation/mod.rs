//! The waiver evaluator: one pass per award family over the schedule, with
//! aggregation into a single applicable percentage.

mod quota;
mod result;
mod sgpa;

use serde::{Deserialize, Serialize};

use super::domain::{StudentRecord, WaiverAward};
use super::schedule::WaiverSchedule;

pub(crate) const NEW_STUDENT_REQUIREMENT: &str = "Maintain SGPA after admission";

/// Stateless evaluator over an immutable waiver schedule. Safe to share
/// behind an `Arc` for concurrent read-only evaluation.
#[derive(Debug, Clone)]
pub struct WaiverEngine {
    schedule: WaiverSchedule,
}

impl WaiverEngine {
    pub fn new(schedule: WaiverSchedule) -> Self {
        Self { schedule }
    }

    /// Engine over the published university schedule.
    pub fn standard() -> Self {
        Self::new(WaiverSchedule::standard())
    }

    pub fn schedule(&self) -> &WaiverSchedule {
        &self.schedule
    }

    /// Collects every award the student qualifies for: result-based rules
    /// first, SGPA bands for continuing students, then each claimed quota in
    /// declaration order. Nothing is deduplicated or capped. A faculty or
    /// quota kind with no schedule entry contributes nothing.
    pub fn evaluate(&self, student: &StudentRecord) -> Vec<WaiverAward> {
        let mut awards = result::result_based_awards(&self.schedule, student);

        if !student.is_new_student {
            awards.extend(sgpa::sgpa_based_awards(&self.schedule, student));
        }

        awards.extend(quota::quota_awards(&self.schedule, student));
        awards
    }

    pub fn summarize(&self, student: &StudentRecord) -> EligibilitySummary {
        EligibilitySummary::from_awards(self.evaluate(student))
    }
}

/// Full award list plus the single percentage the university applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilitySummary {
    pub awards: Vec<WaiverAward>,
    pub max_waiver_percent: u8,
}

impl EligibilitySummary {
    /// Best single waiver wins; the full list stays visible so every
    /// qualifying path can be shown.
    pub fn from_awards(awards: Vec<WaiverAward>) -> Self {
        let max_waiver_percent = awards
            .iter()
            .map(|award| award.waiver_percent)
            .max()
            .unwrap_or(0);

        Self {
            awards,
            max_waiver_percent,
        }
    }

    pub fn is_eligible(&self) -> bool {
        !self.awards.is_empty()
    }
}

/// Requirement line attached to result and quota awards. New students see a
/// generic note; continuing students see the concrete figures.
pub(crate) fn maintenance_requirement(
    is_new_student: bool,
    sgpa_requirement: f32,
    min_credits: Option<u8>,
) -> String {
    if is_new_student {
        return NEW_STUDENT_REQUIREMENT.to_string();
    }

    match min_credits {
        Some(credits) => {
            format!("Maintain SGPA: {sgpa_requirement:.2}, Take {credits} credits")
        }
        None => format!("Maintain SGPA: {sgpa_requirement:.2}"),
    }
}
