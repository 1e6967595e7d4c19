use crate::waivers::domain::{StudentRecord, WaiverAward, WaiverCategory};
use crate::waivers::schedule::{ResultRule, WaiverSchedule};

use super::maintenance_requirement;

/// Result-based pass: every matching band is awarded, so a Golden GPA-5
/// student collects the plain GPA-5 bands too.
///
/// Rules flagged `for_new_students: false` are skipped for new students;
/// the reverse direction is deliberately not gated (see the rule-table
/// tests), matching published policy.
pub(crate) fn result_based_awards(
    schedule: &WaiverSchedule,
    student: &StudentRecord,
) -> Vec<WaiverAward> {
    let mut awards = Vec::new();

    for rule in schedule.result_rules(&student.faculty) {
        if !rule.for_new_students && student.is_new_student {
            continue;
        }

        if matches(rule, student) {
            awards.push(WaiverAward {
                category: WaiverCategory::ResultBased,
                label: WaiverCategory::ResultBased.label().to_string(),
                condition: rule.condition.to_string(),
                waiver_percent: rule.waiver_percent,
                requirement: maintenance_requirement(
                    student.is_new_student,
                    rule.sgpa_requirement,
                    None,
                ),
                for_new_students: student.is_new_student,
            });
        }
    }

    awards
}

fn matches(rule: &ResultRule, student: &StudentRecord) -> bool {
    let ssc_ok = rule.min_ssc.map_or(true, |min| student.ssc_gpa >= min);
    let hsc_floor_ok = rule.min_hsc.map_or(true, |min| student.hsc_gpa >= min);
    let hsc_ceiling_ok = rule.max_hsc.map_or(true, |max| student.hsc_gpa <= max);

    ssc_ok && hsc_floor_ok && hsc_ceiling_ok
}
