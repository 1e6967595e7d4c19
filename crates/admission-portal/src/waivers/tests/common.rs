use std::collections::BTreeMap;

use crate::waivers::domain::{Faculty, StudentProfile, StudentRecord};
use crate::waivers::evaluation::WaiverEngine;
use crate::waivers::schedule::{ResultRule, SgpaBand, SgpaRange, WaiverSchedule};

pub(super) fn engine() -> WaiverEngine {
    WaiverEngine::standard()
}

pub(super) fn new_student(faculty: &str, ssc_gpa: f32, hsc_gpa: f32) -> StudentRecord {
    StudentRecord {
        faculty: Faculty::new(faculty),
        ssc_gpa,
        hsc_gpa,
        is_new_student: true,
        current_sgpa: 0.0,
        profile: StudentProfile::default(),
    }
}

/// Continuing student whose exam results sit below every result-based band,
/// so tests see the SGPA family in isolation.
pub(super) fn continuing_student(faculty: &str, current_sgpa: f32) -> StudentRecord {
    StudentRecord {
        faculty: Faculty::new(faculty),
        ssc_gpa: 4.2,
        hsc_gpa: 4.2,
        is_new_student: false,
        current_sgpa,
        profile: StudentProfile::default(),
    }
}

/// Continuing student on an unlisted faculty, so only quota claims matter.
pub(super) fn quota_claimant(profile: StudentProfile) -> StudentRecord {
    StudentRecord {
        faculty: Faculty::new("Unlisted_Faculty"),
        ssc_gpa: 4.0,
        hsc_gpa: 4.0,
        is_new_student: false,
        current_sgpa: 3.2,
        profile,
    }
}

/// One-faculty schedule with a single result rule, for polarity tests.
pub(super) fn single_result_rule_schedule(faculty: &str, rule: ResultRule) -> WaiverSchedule {
    let mut result_based = BTreeMap::new();
    result_based.insert(Faculty::new(faculty), vec![rule]);

    WaiverSchedule::new(result_based, BTreeMap::new(), BTreeMap::new())
}

/// One-faculty schedule with a single SGPA band.
pub(super) fn single_sgpa_band_schedule(faculty: &str, range: SgpaRange, waiver_percent: u8) -> WaiverSchedule {
    let mut sgpa_based = BTreeMap::new();
    sgpa_based.insert(
        Faculty::new(faculty),
        vec![SgpaBand {
            range,
            waiver_percent,
            for_new_students: false,
        }],
    );

    WaiverSchedule::new(BTreeMap::new(), sgpa_based, BTreeMap::new())
}
