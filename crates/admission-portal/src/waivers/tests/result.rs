use super::common::{continuing_student, engine, new_student, single_result_rule_schedule};
use crate::waivers::domain::WaiverCategory;
use crate::waivers::evaluation::WaiverEngine;
use crate::waivers::schedule::{ResultRule, ENGINEERING, HUMANITIES};

#[test]
fn golden_gpa5_student_collects_every_matching_band() {
    let summary = engine().summarize(&new_student(ENGINEERING, 5.0, 5.0));

    let conditions: Vec<&str> = summary
        .awards
        .iter()
        .map(|award| award.condition.as_str())
        .collect();
    assert_eq!(
        conditions,
        vec![
            "Golden GPA-5 both in SSC and HSC",
            "Golden GPA-5 in HSC",
            "GPA-5 both in SSC and HSC",
            "GPA-5 in HSC",
        ]
    );

    let percents: Vec<u8> = summary
        .awards
        .iter()
        .map(|award| award.waiver_percent)
        .collect();
    assert_eq!(percents, vec![75, 50, 35, 25]);
    assert_eq!(summary.max_waiver_percent, 75);

    assert!(summary.awards.iter().all(|award| {
        award.category == WaiverCategory::ResultBased
            && award.for_new_students
            && award.requirement == "Maintain SGPA after admission"
    }));
}

#[test]
fn lower_bounds_are_inclusive() {
    // ssc == min_ssc and hsc == min_hsc must qualify.
    let awards = engine().evaluate(&new_student(ENGINEERING, 5.0, 5.0));

    assert!(awards
        .iter()
        .any(|award| award.condition == "GPA-5 both in SSC and HSC"));
}

#[test]
fn upper_bound_is_inclusive_and_one_step_above_is_not() {
    let at_ceiling = engine().evaluate(&new_student(ENGINEERING, 4.0, 4.99));
    assert!(at_ceiling
        .iter()
        .any(|award| award.condition == "HSC GPA 4.90-4.99"));

    let above_ceiling = engine().evaluate(&new_student(ENGINEERING, 4.0, 5.0));
    assert!(!above_ceiling
        .iter()
        .any(|award| award.condition == "HSC GPA 4.90-4.99"));
}

#[test]
fn hsc_only_bands_ignore_ssc() {
    let awards = engine().evaluate(&new_student(ENGINEERING, 2.0, 5.0));

    assert!(awards.iter().any(|award| award.condition == "Golden GPA-5 in HSC"));
    assert!(!awards
        .iter()
        .any(|award| award.condition == "Golden GPA-5 both in SSC and HSC"));
}

#[test]
fn unknown_faculty_yields_no_result_awards() {
    let awards = engine().evaluate(&new_student("Faculty_Of_Typos", 5.0, 5.0));

    assert!(awards.is_empty());
}

#[test]
fn continuing_only_rules_are_skipped_for_new_students() {
    let schedule = single_result_rule_schedule(
        "Evening_Program",
        ResultRule {
            condition: "HSC GPA 4.00-4.49",
            min_ssc: None,
            min_hsc: Some(4.0),
            max_hsc: Some(4.49),
            waiver_percent: 10,
            sgpa_requirement: 3.0,
            for_new_students: false,
        },
    );
    let engine = WaiverEngine::new(schedule);

    assert!(engine.evaluate(&new_student("Evening_Program", 4.2, 4.2)).is_empty());

    let mut continuing = new_student("Evening_Program", 4.2, 4.2);
    continuing.is_new_student = false;
    assert_eq!(engine.evaluate(&continuing).len(), 1);
}

#[test]
fn new_student_rules_still_match_continuing_students() {
    // The skip is one-directional: rules written for new admissions are not
    // withheld from continuing students. Observed policy, kept as-is.
    let mut student = continuing_student(HUMANITIES, 3.0);
    student.hsc_gpa = 4.55;

    let awards = engine().evaluate(&student);

    let hsc_band = awards
        .iter()
        .find(|award| award.condition == "HSC GPA 4.50-4.79")
        .expect("continuing student should still match the entry band");
    assert_eq!(hsc_band.waiver_percent, 10);
    assert!(!hsc_band.for_new_students);
    assert_eq!(hsc_band.requirement, "Maintain SGPA: 3.00");
}
