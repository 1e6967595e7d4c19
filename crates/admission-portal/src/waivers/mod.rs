//! Tuition-waiver eligibility: the published rule schedule, the evaluator
//! that walks it, and the HTTP surface over both.
//!
//! Waivers come in three families. Result-based rules reward SSC/HSC exam
//! results of new applicants; SGPA bands reward continuing students'
//! semester GPA; special quotas cover the closed set of non-academic
//! categories (employee, diploma holder, athlete, and so on). A student may
//! qualify for several waivers at once; policy applies only the largest, but
//! every qualifying path is reported.

pub mod domain;
pub mod evaluation;
pub mod router;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use domain::{
    Faculty, PlayerLevel, QuotaKind, RecordValidationError, StudentProfile, StudentRecord,
    WaiverAward, WaiverCategory,
};
pub use evaluation::{EligibilitySummary, WaiverEngine};
pub use router::waiver_router;
pub use schedule::WaiverSchedule;
