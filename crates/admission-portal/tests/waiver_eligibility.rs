//! Integration specifications for the waiver eligibility engine.
//!
//! Scenarios run end-to-end through the public crate surface: a student
//! record goes in, an eligibility summary comes out. Nothing here reaches
//! into private modules.

mod common {
    use admission_portal::waivers::{Faculty, StudentRecord, WaiverEngine};

    pub(super) fn engine() -> WaiverEngine {
        WaiverEngine::standard()
    }

    pub(super) fn new_student(faculty: &str, ssc_gpa: f32, hsc_gpa: f32) -> StudentRecord {
        StudentRecord {
            faculty: Faculty::from(faculty),
            ssc_gpa,
            hsc_gpa,
            is_new_student: true,
            ..StudentRecord::default()
        }
    }

    pub(super) fn continuing_student(faculty: &str, current_sgpa: f32) -> StudentRecord {
        StudentRecord {
            faculty: Faculty::from(faculty),
            ssc_gpa: 4.2,
            hsc_gpa: 4.2,
            is_new_student: false,
            current_sgpa,
            ..StudentRecord::default()
        }
    }
}

mod scenarios {
    use super::common::*;
    use admission_portal::waivers::schedule::{ENGINEERING, HUMANITIES};
    use admission_portal::waivers::{StudentRecord, WaiverCategory};

    #[test]
    fn golden_engineering_applicant_collects_every_overlapping_band() {
        let summary = engine().summarize(&new_student(ENGINEERING, 5.0, 5.0));

        let conditions: Vec<&str> = summary
            .awards
            .iter()
            .map(|award| award.condition.as_str())
            .collect();
        assert!(conditions.contains(&"Golden GPA-5 both in SSC and HSC"));
        assert!(conditions.contains(&"GPA-5 both in SSC and HSC"));
        assert_eq!(summary.max_waiver_percent, 75);
        assert!(summary.is_eligible());
    }

    #[test]
    fn humanities_perfect_semester_earns_half_tuition() {
        let summary = engine().summarize(&continuing_student(HUMANITIES, 4.0));

        assert_eq!(summary.awards.len(), 1);
        let award = &summary.awards[0];
        assert_eq!(award.category, WaiverCategory::SgpaBased);
        assert_eq!(award.condition, "Perfect 4.0 SGPA");
        assert_eq!(award.waiver_percent, 50);
        assert_eq!(summary.max_waiver_percent, 50);
    }

    #[test]
    fn physically_challenged_claim_stands_alone() {
        let mut record = StudentRecord::default();
        record.profile.is_physically_challenged = true;

        let summary = engine().summarize(&record);

        assert_eq!(summary.awards.len(), 1);
        let award = &summary.awards[0];
        assert_eq!(award.label, "Physically Challenged Quota");
        assert_eq!(award.waiver_percent, 25);
        assert!(award.requirement.contains("2.50"));
        assert!(award.requirement.contains("12 credits"));
    }

    #[test]
    fn unknown_faculty_only_loses_the_academic_families() {
        let mut record = continuing_student("School_Of_Unknown", 4.0);
        record.profile.is_tribal = true;

        let summary = engine().summarize(&record);

        assert_eq!(summary.awards.len(), 1);
        assert_eq!(summary.awards[0].label, "Tribal Quota");
        assert_eq!(summary.max_waiver_percent, 15);
    }
}

mod properties {
    use super::common::*;
    use admission_portal::waivers::schedule::{ENGINEERING, HUMANITIES, PHARMACY_LAW_CSE};
    use admission_portal::waivers::{EligibilitySummary, WaiverCategory};

    #[test]
    fn result_lower_bounds_are_inclusive() {
        // 4.75 sits exactly on the floor of the lowest Engineering band.
        let summary = engine().summarize(&new_student(ENGINEERING, 3.0, 4.75));

        assert_eq!(summary.awards.len(), 1);
        assert_eq!(summary.awards[0].condition, "HSC GPA 4.75-4.89");
        assert_eq!(summary.max_waiver_percent, 10);
    }

    #[test]
    fn result_upper_bounds_are_inclusive_then_cut_off() {
        let at_cap = engine().summarize(&new_student(ENGINEERING, 3.0, 4.99));
        assert!(at_cap
            .awards
            .iter()
            .any(|award| award.condition == "HSC GPA 4.90-4.99"));

        let above_cap = engine().summarize(&new_student(ENGINEERING, 3.0, 5.0));
        assert!(above_cap
            .awards
            .iter()
            .all(|award| award.condition != "HSC GPA 4.90-4.99"));
    }

    #[test]
    fn new_students_never_collect_sgpa_awards() {
        let mut record = new_student(HUMANITIES, 4.2, 4.55);
        record.current_sgpa = 4.0;

        let summary = engine().summarize(&record);

        assert!(!summary.awards.is_empty());
        assert!(summary
            .awards
            .iter()
            .all(|award| award.category != WaiverCategory::SgpaBased));
    }

    #[test]
    fn max_percent_ignores_award_order() {
        let mut record = new_student(PHARMACY_LAW_CSE, 5.0, 5.0);
        record.profile.is_tribal = true;

        let mut awards = engine().evaluate(&record);
        assert!(awards.len() > 2);

        let forward = EligibilitySummary::from_awards(awards.clone()).max_waiver_percent;
        awards.reverse();
        let reversed = EligibilitySummary::from_awards(awards.clone()).max_waiver_percent;
        awards.rotate_left(1);
        let rotated = EligibilitySummary::from_awards(awards).max_waiver_percent;

        assert_eq!(forward, 50);
        assert_eq!(forward, reversed);
        assert_eq!(forward, rotated);
    }
}
