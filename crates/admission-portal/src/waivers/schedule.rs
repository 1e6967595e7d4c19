use std::collections::BTreeMap;

use super::domain::{Faculty, PlayerLevel, QuotaKind};

/// Faculty ids used by the published schedule.
pub const ENGINEERING: &str = "SIT_BE_AHS_Engineering";
pub const HUMANITIES: &str = "Humanities_Social_Sciences";
pub const PHARMACY_LAW_CSE: &str = "BPharm_LLB_CSE";

/// One result-based waiver band. Absent bounds are simply not checked; all
/// present bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRule {
    pub condition: &'static str,
    pub min_ssc: Option<f32>,
    pub min_hsc: Option<f32>,
    pub max_hsc: Option<f32>,
    pub waiver_percent: u8,
    pub sgpa_requirement: f32,
    pub for_new_students: bool,
}

/// SGPA band forms used by the continuing-student tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SgpaRange {
    /// The sentinel top band, matched by exact comparison.
    Exact(f32),
    /// Open-ended band, `sgpa >= min`.
    AtLeast(f32),
    /// Closed band, inclusive at both ends.
    Between { min: f32, max: f32 },
}

impl SgpaRange {
    pub fn contains(self, sgpa: f32) -> bool {
        match self {
            SgpaRange::Exact(value) => sgpa == value,
            SgpaRange::AtLeast(min) => sgpa >= min,
            SgpaRange::Between { min, max } => sgpa >= min && sgpa <= max,
        }
    }

    pub(crate) fn describe(self) -> String {
        match self {
            SgpaRange::Exact(value) if value == 4.0 => "Perfect 4.0 SGPA".to_string(),
            SgpaRange::Exact(value) => format!("SGPA {value:.2}"),
            SgpaRange::AtLeast(min) => format!("SGPA {min:.2}+"),
            SgpaRange::Between { min, max } => format!("SGPA {min:.2}-{max:.2}"),
        }
    }
}

/// One continuing-student waiver band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgpaBand {
    pub range: SgpaRange,
    pub waiver_percent: u8,
    pub for_new_students: bool,
}

/// Flat quota award independent of grades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatQuotaRule {
    pub waiver_percent: u8,
    pub sgpa_requirement: f32,
    pub min_credits: Option<u8>,
}

/// HSC GPA window, inclusive at both ends. Used by the female quota, which
/// is the one quota keyed by faculty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaWindowRule {
    pub min_hsc: f32,
    pub max_hsc: f32,
    pub waiver_percent: u8,
    pub sgpa_requirement: f32,
}

/// Diploma-holder band over the diploma CGPA, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiplomaBand {
    pub min_gpa: f32,
    pub max_gpa: f32,
    pub waiver_percent: u8,
    pub sgpa_requirement: f32,
    pub min_credits: u8,
}

/// Player-quota entry for one recognized level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerRule {
    pub waiver_percent: u8,
    /// Upper end of a discretionary range, where the schedule grants one.
    pub max_percent: Option<u8>,
    pub sgpa_requirement: f32,
    pub min_credits_undergrad: u8,
    pub min_credits_masters: u8,
}

/// Rule shape per quota kind, dispatched through a single `match` during
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum QuotaRule {
    Flat(FlatQuotaRule),
    FacultyBanded(BTreeMap<Faculty, GpaWindowRule>),
    ResultBranch {
        better: FlatQuotaRule,
        worse: FlatQuotaRule,
    },
    GpaTiered(Vec<DiplomaBand>),
    Leveled(BTreeMap<PlayerLevel, PlayerRule>),
}

/// The full waiver schedule: result and SGPA tables keyed by faculty, quota
/// rules keyed by kind. Immutable after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaiverSchedule {
    result_based: BTreeMap<Faculty, Vec<ResultRule>>,
    sgpa_based: BTreeMap<Faculty, Vec<SgpaBand>>,
    quotas: BTreeMap<QuotaKind, QuotaRule>,
}

impl WaiverSchedule {
    pub fn new(
        result_based: BTreeMap<Faculty, Vec<ResultRule>>,
        sgpa_based: BTreeMap<Faculty, Vec<SgpaBand>>,
        quotas: BTreeMap<QuotaKind, QuotaRule>,
    ) -> Self {
        Self {
            result_based,
            sgpa_based,
            quotas,
        }
    }

    /// The published university schedule.
    pub fn standard() -> Self {
        let mut result_based = BTreeMap::new();
        result_based.insert(Faculty::new(ENGINEERING), engineering_result_rules());
        result_based.insert(Faculty::new(HUMANITIES), humanities_result_rules());
        result_based.insert(Faculty::new(PHARMACY_LAW_CSE), pharmacy_law_cse_result_rules());

        let mut sgpa_based = BTreeMap::new();
        sgpa_based.insert(Faculty::new(ENGINEERING), engineering_sgpa_bands());
        sgpa_based.insert(Faculty::new(HUMANITIES), humanities_sgpa_bands());

        Self {
            result_based,
            sgpa_based,
            quotas: standard_quota_rules(),
        }
    }

    /// Result rules for `faculty`; an unlisted faculty yields no rules.
    pub fn result_rules(&self, faculty: &Faculty) -> &[ResultRule] {
        self.result_based
            .get(faculty)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// SGPA bands for `faculty`; an unlisted faculty yields no bands.
    pub fn sgpa_bands(&self, faculty: &Faculty) -> &[SgpaBand] {
        self.sgpa_based
            .get(faculty)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The rule for `kind`, if the schedule defines one.
    pub fn quota_rule(&self, kind: QuotaKind) -> Option<&QuotaRule> {
        self.quotas.get(&kind)
    }

    /// Faculties with at least one result-based rule.
    pub fn faculties(&self) -> impl Iterator<Item = &Faculty> {
        self.result_based.keys()
    }
}

fn new_student_rule(
    condition: &'static str,
    min_ssc: Option<f32>,
    min_hsc: Option<f32>,
    max_hsc: Option<f32>,
    waiver_percent: u8,
    sgpa_requirement: f32,
) -> ResultRule {
    ResultRule {
        condition,
        min_ssc,
        min_hsc,
        max_hsc,
        waiver_percent,
        sgpa_requirement,
        for_new_students: true,
    }
}

fn engineering_result_rules() -> Vec<ResultRule> {
    vec![
        new_student_rule("Golden GPA-5 both in SSC and HSC", Some(5.0), Some(5.0), None, 75, 3.5),
        new_student_rule("Golden GPA-5 in HSC", None, Some(5.0), None, 50, 3.25),
        new_student_rule("GPA-5 both in SSC and HSC", Some(5.0), Some(5.0), None, 35, 3.25),
        new_student_rule("GPA-5 in HSC", None, Some(5.0), None, 25, 3.0),
        new_student_rule("HSC GPA 4.90-4.99", None, Some(4.90), Some(4.99), 20, 3.0),
        new_student_rule("HSC GPA 4.75-4.89", None, Some(4.75), Some(4.89), 10, 3.0),
    ]
}

fn humanities_result_rules() -> Vec<ResultRule> {
    vec![
        new_student_rule("Golden GPA-5 both in SSC and HSC", Some(5.0), Some(5.0), None, 75, 3.5),
        new_student_rule("Golden GPA-5 in HSC", None, Some(5.0), None, 50, 3.25),
        new_student_rule("GPA-5 both in SSC and HSC", Some(5.0), Some(5.0), None, 35, 3.25),
        new_student_rule("GPA-5 in HSC", None, Some(5.0), None, 25, 3.0),
        new_student_rule("HSC GPA 4.90-4.99", None, Some(4.90), Some(4.99), 20, 3.0),
        new_student_rule("HSC GPA 4.80-4.89", None, Some(4.80), Some(4.89), 15, 3.0),
        new_student_rule("HSC GPA 4.50-4.79", None, Some(4.50), Some(4.79), 10, 3.0),
    ]
}

fn pharmacy_law_cse_result_rules() -> Vec<ResultRule> {
    vec![
        new_student_rule("Golden GPA-5 both in SSC and HSC", Some(5.0), Some(5.0), None, 50, 3.25),
        new_student_rule("Golden GPA-5 in HSC", None, Some(5.0), None, 30, 3.0),
        new_student_rule("GPA-5 both in SSC and HSC", Some(5.0), Some(5.0), None, 25, 3.0),
        new_student_rule("GPA-5 in HSC", None, Some(5.0), None, 20, 3.0),
    ]
}

fn continuing_band(range: SgpaRange, waiver_percent: u8) -> SgpaBand {
    SgpaBand {
        range,
        waiver_percent,
        for_new_students: false,
    }
}

fn engineering_sgpa_bands() -> Vec<SgpaBand> {
    vec![
        continuing_band(SgpaRange::Exact(4.0), 50),
        continuing_band(SgpaRange::Between { min: 3.90, max: 3.99 }, 30),
        continuing_band(SgpaRange::Between { min: 3.85, max: 3.89 }, 20),
        continuing_band(SgpaRange::Between { min: 3.80, max: 3.84 }, 10),
    ]
}

fn humanities_sgpa_bands() -> Vec<SgpaBand> {
    vec![
        continuing_band(SgpaRange::Exact(4.0), 50),
        continuing_band(SgpaRange::Between { min: 3.90, max: 3.99 }, 50),
        continuing_band(SgpaRange::Between { min: 3.85, max: 3.89 }, 40),
        continuing_band(SgpaRange::Between { min: 3.80, max: 3.84 }, 20),
        continuing_band(SgpaRange::Between { min: 3.75, max: 3.79 }, 15),
        continuing_band(SgpaRange::Between { min: 3.60, max: 3.74 }, 10),
    ]
}

fn flat(waiver_percent: u8, sgpa_requirement: f32, min_credits: Option<u8>) -> QuotaRule {
    QuotaRule::Flat(FlatQuotaRule {
        waiver_percent,
        sgpa_requirement,
        min_credits,
    })
}

fn diploma_band(
    min_gpa: f32,
    max_gpa: f32,
    waiver_percent: u8,
    sgpa_requirement: f32,
) -> DiplomaBand {
    DiplomaBand {
        min_gpa,
        max_gpa,
        waiver_percent,
        sgpa_requirement,
        min_credits: 18,
    }
}

fn standard_quota_rules() -> BTreeMap<QuotaKind, QuotaRule> {
    let mut quotas = BTreeMap::new();

    let mut female_windows = BTreeMap::new();
    female_windows.insert(
        Faculty::new(ENGINEERING),
        GpaWindowRule {
            min_hsc: 4.0,
            max_hsc: 4.74,
            waiver_percent: 10,
            sgpa_requirement: 3.0,
        },
    );
    female_windows.insert(
        Faculty::new(HUMANITIES),
        GpaWindowRule {
            min_hsc: 4.0,
            max_hsc: 4.49,
            waiver_percent: 10,
            sgpa_requirement: 3.0,
        },
    );
    quotas.insert(QuotaKind::Female, QuotaRule::FacultyBanded(female_windows));

    quotas.insert(QuotaKind::DiuEmployee, flat(50, 3.0, None));
    quotas.insert(QuotaKind::DicStudent, flat(20, 3.0, Some(18)));
    quotas.insert(QuotaKind::DpiStudent, flat(20, 3.0, Some(18)));
    quotas.insert(
        QuotaKind::DiptiStudent,
        QuotaRule::ResultBranch {
            better: FlatQuotaRule {
                waiver_percent: 25,
                sgpa_requirement: 3.0,
                min_credits: Some(18),
            },
            worse: FlatQuotaRule {
                waiver_percent: 15,
                sgpa_requirement: 3.0,
                min_credits: Some(18),
            },
        },
    );
    quotas.insert(QuotaKind::AlumniRelative, flat(10, 3.0, Some(18)));
    quotas.insert(QuotaKind::AlumniSpouse, flat(10, 3.0, Some(18)));
    quotas.insert(QuotaKind::PhysicallyChallenged, flat(25, 2.5, Some(12)));
    quotas.insert(QuotaKind::Tribal, flat(15, 3.0, Some(18)));
    quotas.insert(QuotaKind::SiblingSpouse, flat(20, 3.0, Some(18)));

    quotas.insert(
        QuotaKind::DiplomaHolder,
        QuotaRule::GpaTiered(vec![
            diploma_band(3.90, 4.00, 75, 3.5),
            diploma_band(3.80, 3.89, 60, 3.5),
            diploma_band(3.75, 3.79, 50, 3.25),
            diploma_band(3.50, 3.74, 40, 3.25),
            diploma_band(3.25, 3.49, 30, 3.0),
            diploma_band(3.00, 3.24, 25, 3.0),
            diploma_band(2.50, 2.99, 15, 3.0),
        ]),
    );

    quotas.insert(QuotaKind::FirstBatch, flat(15, 3.0, None));

    let mut player_rules = BTreeMap::new();
    player_rules.insert(
        PlayerLevel::NationalTeam,
        PlayerRule {
            waiver_percent: 100,
            max_percent: None,
            sgpa_requirement: 2.0,
            min_credits_undergrad: 6,
            min_credits_masters: 6,
        },
    );
    player_rules.insert(
        PlayerLevel::PremierLeague,
        PlayerRule {
            waiver_percent: 90,
            max_percent: None,
            sgpa_requirement: 2.0,
            min_credits_undergrad: 12,
            min_credits_masters: 9,
        },
    );
    player_rules.insert(
        PlayerLevel::FirstDivision,
        PlayerRule {
            waiver_percent: 60,
            max_percent: None,
            sgpa_requirement: 2.0,
            min_credits_undergrad: 12,
            min_credits_masters: 9,
        },
    );
    player_rules.insert(
        PlayerLevel::SecondDivision,
        PlayerRule {
            waiver_percent: 40,
            max_percent: None,
            sgpa_requirement: 2.0,
            min_credits_undergrad: 12,
            min_credits_masters: 9,
        },
    );
    // DIU players get a discretionary 20-40% range; the floor is awarded.
    player_rules.insert(
        PlayerLevel::DiuPlayer,
        PlayerRule {
            waiver_percent: 20,
            max_percent: Some(40),
            sgpa_requirement: 2.0,
            min_credits_undergrad: 12,
            min_credits_masters: 9,
        },
    );
    quotas.insert(QuotaKind::Player, QuotaRule::Leveled(player_rules));

    quotas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schedule_covers_published_faculties() {
        let schedule = WaiverSchedule::standard();

        let faculties: Vec<&str> = schedule.faculties().map(Faculty::as_str).collect();
        assert_eq!(faculties, vec![PHARMACY_LAW_CSE, HUMANITIES, ENGINEERING]);

        assert_eq!(schedule.result_rules(&Faculty::new(ENGINEERING)).len(), 6);
        assert_eq!(schedule.result_rules(&Faculty::new(HUMANITIES)).len(), 7);
        assert_eq!(schedule.result_rules(&Faculty::new(PHARMACY_LAW_CSE)).len(), 4);
        assert_eq!(schedule.sgpa_bands(&Faculty::new(ENGINEERING)).len(), 4);
        assert_eq!(schedule.sgpa_bands(&Faculty::new(HUMANITIES)).len(), 6);
        assert!(schedule.sgpa_bands(&Faculty::new(PHARMACY_LAW_CSE)).is_empty());
    }

    #[test]
    fn standard_schedule_defines_every_quota_kind() {
        let schedule = WaiverSchedule::standard();

        for kind in QuotaKind::ordered() {
            assert!(
                schedule.quota_rule(kind).is_some(),
                "missing quota rule for {kind:?}"
            );
        }
    }

    #[test]
    fn sgpa_ranges_are_inclusive() {
        let band = SgpaRange::Between { min: 3.80, max: 3.84 };

        assert!(band.contains(3.80));
        assert!(band.contains(3.84));
        assert!(!band.contains(3.85));

        assert!(SgpaRange::AtLeast(3.90).contains(3.90));
        assert!(!SgpaRange::AtLeast(3.90).contains(3.89));

        assert!(SgpaRange::Exact(4.0).contains(4.0));
        assert!(!SgpaRange::Exact(4.0).contains(3.99));
    }

    #[test]
    fn sgpa_range_descriptions_match_the_published_wording() {
        assert_eq!(SgpaRange::Exact(4.0).describe(), "Perfect 4.0 SGPA");
        assert_eq!(SgpaRange::AtLeast(3.90).describe(), "SGPA 3.90+");
        assert_eq!(
            SgpaRange::Between { min: 3.85, max: 3.89 }.describe(),
            "SGPA 3.85-3.89"
        );
    }

    #[test]
    fn unknown_faculty_has_no_rules() {
        let schedule = WaiverSchedule::standard();
        let faculty = Faculty::new("School_Of_Nowhere");

        assert!(schedule.result_rules(&faculty).is_empty());
        assert!(schedule.sgpa_bands(&faculty).is_empty());
    }
}
