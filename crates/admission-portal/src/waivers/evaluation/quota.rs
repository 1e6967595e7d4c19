use std::collections::BTreeMap;

use crate::waivers::domain::{
    Faculty, PlayerLevel, QuotaKind, StudentRecord, WaiverAward, WaiverCategory,
};
use crate::waivers::schedule::{
    DiplomaBand, FlatQuotaRule, GpaWindowRule, PlayerRule, QuotaRule, WaiverSchedule,
};

use super::{maintenance_requirement, NEW_STUDENT_REQUIREMENT};

/// One pass over the closed quota set: each claimed kind is matched against
/// its rule shape. A kind with no schedule entry is skipped silently, never
/// an error.
pub(crate) fn quota_awards(schedule: &WaiverSchedule, student: &StudentRecord) -> Vec<WaiverAward> {
    let mut awards = Vec::new();

    for kind in QuotaKind::ordered() {
        if !student.profile.claims(kind) {
            continue;
        }
        let Some(rule) = schedule.quota_rule(kind) else {
            continue;
        };

        match rule {
            QuotaRule::Flat(rule) => awards.push(flat_award(kind, rule, student)),
            QuotaRule::FacultyBanded(windows) => {
                if let Some(award) = window_award(kind, windows, student) {
                    awards.push(award);
                }
            }
            QuotaRule::ResultBranch { better, worse } => {
                awards.push(branch_award(kind, better, worse, student));
            }
            QuotaRule::GpaTiered(bands) => awards.extend(tiered_awards(kind, bands, student)),
            QuotaRule::Leveled(levels) => {
                if let Some(award) = level_award(levels, student) {
                    awards.push(award);
                }
            }
        }
    }

    awards
}

fn flat_award(kind: QuotaKind, rule: &FlatQuotaRule, student: &StudentRecord) -> WaiverAward {
    WaiverAward {
        category: WaiverCategory::Quota,
        label: kind.label().to_string(),
        condition: format!("Eligible for {} quota", kind.condition_phrase()),
        waiver_percent: rule.waiver_percent,
        requirement: maintenance_requirement(
            student.is_new_student,
            rule.sgpa_requirement,
            rule.min_credits,
        ),
        for_new_students: student.is_new_student,
    }
}

/// Faculty-keyed HSC window (female quota). No window for the student's
/// faculty, or an HSC GPA outside it, yields nothing.
fn window_award(
    kind: QuotaKind,
    windows: &BTreeMap<Faculty, GpaWindowRule>,
    student: &StudentRecord,
) -> Option<WaiverAward> {
    let window = windows.get(&student.faculty)?;
    if student.hsc_gpa < window.min_hsc || student.hsc_gpa > window.max_hsc {
        return None;
    }

    Some(WaiverAward {
        category: WaiverCategory::Quota,
        label: kind.label().to_string(),
        condition: format!("Female student with HSC GPA {:.2}", student.hsc_gpa),
        waiver_percent: window.waiver_percent,
        requirement: maintenance_requirement(student.is_new_student, window.sgpa_requirement, None),
        for_new_students: student.is_new_student,
    })
}

/// DIPTI branch: the better-result rate applies when the HSC result improved
/// on the SSC result, otherwise the same/worse rate. Always awards.
fn branch_award(
    kind: QuotaKind,
    better: &FlatQuotaRule,
    worse: &FlatQuotaRule,
    student: &StudentRecord,
) -> WaiverAward {
    let (rule, relation) = if student.profile.hsc_better_than_ssc {
        (better, "better")
    } else {
        (worse, "same/worse")
    };

    WaiverAward {
        category: WaiverCategory::Quota,
        label: kind.label().to_string(),
        condition: format!("DIPTI student with {relation} HSC result"),
        waiver_percent: rule.waiver_percent,
        requirement: maintenance_requirement(
            student.is_new_student,
            rule.sgpa_requirement,
            rule.min_credits,
        ),
        for_new_students: student.is_new_student,
    }
}

/// Diploma-holder bands over the diploma CGPA. The published bands do not
/// overlap, but every matching band is awarded regardless.
fn tiered_awards(kind: QuotaKind, bands: &[DiplomaBand], student: &StudentRecord) -> Vec<WaiverAward> {
    let Some(diploma_gpa) = student.profile.diploma_gpa else {
        return Vec::new();
    };

    bands
        .iter()
        .filter(|band| diploma_gpa >= band.min_gpa && diploma_gpa <= band.max_gpa)
        .map(|band| WaiverAward {
            category: WaiverCategory::Quota,
            label: kind.label().to_string(),
            condition: format!("Diploma GPA {diploma_gpa:.2}"),
            waiver_percent: band.waiver_percent,
            requirement: maintenance_requirement(
                student.is_new_student,
                band.sgpa_requirement,
                Some(band.min_credits),
            ),
            for_new_students: student.is_new_student,
        })
        .collect()
}

/// Player quota keyed by recognized level. The DIU Player range awards its
/// floor and records the full range in the condition.
fn level_award(
    levels: &BTreeMap<PlayerLevel, PlayerRule>,
    student: &StudentRecord,
) -> Option<WaiverAward> {
    let level = student.profile.player_level?;
    let rule = levels.get(&level)?;

    let condition = match rule.max_percent {
        Some(max) => format!(
            "Recognized {} level player ({}-{}% range)",
            level.label(),
            rule.waiver_percent,
            max
        ),
        None => format!("Recognized {} level player", level.label()),
    };

    Some(WaiverAward {
        category: WaiverCategory::Quota,
        label: format!("{} Player Quota", level.label()),
        condition,
        waiver_percent: rule.waiver_percent,
        requirement: player_requirement(student.is_new_student, rule),
        for_new_students: student.is_new_student,
    })
}

fn player_requirement(is_new_student: bool, rule: &PlayerRule) -> String {
    if is_new_student {
        return NEW_STUDENT_REQUIREMENT.to_string();
    }

    format!(
        "Maintain SGPA: {:.2}, Take {} credits (UG) or {} credits (Masters)",
        rule.sgpa_requirement, rule.min_credits_undergrad, rule.min_credits_masters
    )
}
