use std::fmt;

use serde::{Deserialize, Serialize};

/// Faculty grouping key for the result and SGPA rule tables.
///
/// The faculty set is schedule data, not a closed enum: an id with no table
/// entry simply produces no awards for that family.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Faculty(String);

impl Faculty {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Faculty {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Recognized athletic levels for the player quota.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PlayerLevel {
    NationalTeam,
    PremierLeague,
    FirstDivision,
    SecondDivision,
    DiuPlayer,
}

impl PlayerLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::NationalTeam,
            Self::PremierLeague,
            Self::FirstDivision,
            Self::SecondDivision,
            Self::DiuPlayer,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NationalTeam => "National Team",
            Self::PremierLeague => "Premier League",
            Self::FirstDivision => "First Division",
            Self::SecondDivision => "Second Division",
            Self::DiuPlayer => "DIU Player",
        }
    }

    /// Accepts the values used on the application form, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "national" | "national team" => Some(Self::NationalTeam),
            "premier league" => Some(Self::PremierLeague),
            "first division" => Some(Self::FirstDivision),
            "second division" => Some(Self::SecondDivision),
            "diu" | "diu player" => Some(Self::DiuPlayer),
            _ => None,
        }
    }
}

/// The closed set of special-admission quota categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QuotaKind {
    Female,
    DiuEmployee,
    DicStudent,
    DpiStudent,
    DiptiStudent,
    AlumniRelative,
    AlumniSpouse,
    PhysicallyChallenged,
    Tribal,
    SiblingSpouse,
    DiplomaHolder,
    FirstBatch,
    Player,
}

impl QuotaKind {
    /// Evaluation order; quota awards are appended in this sequence.
    pub const fn ordered() -> [Self; 13] {
        [
            Self::Female,
            Self::DiuEmployee,
            Self::DicStudent,
            Self::DpiStudent,
            Self::DiptiStudent,
            Self::AlumniRelative,
            Self::AlumniSpouse,
            Self::PhysicallyChallenged,
            Self::Tribal,
            Self::SiblingSpouse,
            Self::DiplomaHolder,
            Self::FirstBatch,
            Self::Player,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Female Quota",
            Self::DiuEmployee => "DIU Employee Quota",
            Self::DicStudent => "DIC Student Quota",
            Self::DpiStudent => "DPI Student Quota",
            Self::DiptiStudent => "DIPTI Student Quota",
            Self::AlumniRelative => "Alumni Relative Quota",
            Self::AlumniSpouse => "Alumni Spouse Quota",
            Self::PhysicallyChallenged => "Physically Challenged Quota",
            Self::Tribal => "Tribal Quota",
            Self::SiblingSpouse => "Sibling/Spouse Quota",
            Self::DiplomaHolder => "Diploma Holder Quota",
            Self::FirstBatch => "First Batch Quota",
            Self::Player => "Player Quota",
        }
    }

    pub(crate) const fn condition_phrase(self) -> &'static str {
        match self {
            Self::Female => "female student",
            Self::DiuEmployee => "DIU employee",
            Self::DicStudent => "DIC student",
            Self::DpiStudent => "DPI student",
            Self::DiptiStudent => "DIPTI student",
            Self::AlumniRelative => "alumni relative",
            Self::AlumniSpouse => "alumni spouse",
            Self::PhysicallyChallenged => "physically challenged",
            Self::Tribal => "tribal",
            Self::SiblingSpouse => "sibling/spouse",
            Self::DiplomaHolder => "diploma holder",
            Self::FirstBatch => "first batch",
            Self::Player => "player",
        }
    }
}

/// Quota claims attached to an application, one field per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub is_female: bool,
    pub is_diu_employee: bool,
    pub is_dic_student: bool,
    pub is_dpi_student: bool,
    pub is_dipti_student: bool,
    /// Only consulted when `is_dipti_student` is set.
    pub hsc_better_than_ssc: bool,
    pub is_alumni_relative: bool,
    pub is_alumni_spouse: bool,
    pub is_physically_challenged: bool,
    pub is_tribal: bool,
    pub has_sibling_student: bool,
    pub has_spouse_student: bool,
    pub diploma_gpa: Option<f32>,
    pub is_first_batch: bool,
    pub player_level: Option<PlayerLevel>,
}

impl StudentProfile {
    /// Whether the profile claims membership in `kind`.
    pub fn claims(&self, kind: QuotaKind) -> bool {
        match kind {
            QuotaKind::Female => self.is_female,
            QuotaKind::DiuEmployee => self.is_diu_employee,
            QuotaKind::DicStudent => self.is_dic_student,
            QuotaKind::DpiStudent => self.is_dpi_student,
            QuotaKind::DiptiStudent => self.is_dipti_student,
            QuotaKind::AlumniRelative => self.is_alumni_relative,
            QuotaKind::AlumniSpouse => self.is_alumni_spouse,
            QuotaKind::PhysicallyChallenged => self.is_physically_challenged,
            QuotaKind::Tribal => self.is_tribal,
            QuotaKind::SiblingSpouse => self.has_sibling_student || self.has_spouse_student,
            QuotaKind::DiplomaHolder => self.diploma_gpa.is_some(),
            QuotaKind::FirstBatch => self.is_first_batch,
            QuotaKind::Player => self.player_level.is_some(),
        }
    }
}

/// Academic record and quota claims for one waiver evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub faculty: Faculty,
    pub ssc_gpa: f32,
    pub hsc_gpa: f32,
    #[serde(default)]
    pub is_new_student: bool,
    /// Semester GPA on the 0-4 scale; only meaningful for continuing
    /// students.
    #[serde(default)]
    pub current_sgpa: f32,
    #[serde(default)]
    pub profile: StudentProfile,
}

/// Board exams (SSC/HSC) grade on a 0-5 scale; university semesters on 0-4.
const BOARD_GPA_MAX: f32 = 5.0;
const SGPA_MAX: f32 = 4.0;

/// Raised when an evaluation input lies outside its grading scale.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordValidationError {
    #[error("SSC GPA {0} is outside the 0-5 scale")]
    SscGpaOutOfScale(f32),
    #[error("HSC GPA {0} is outside the 0-5 scale")]
    HscGpaOutOfScale(f32),
    #[error("SGPA {0} is outside the 0-4 scale")]
    SgpaOutOfScale(f32),
    #[error("diploma GPA {0} is outside the 0-4 scale")]
    DiplomaGpaOutOfScale(f32),
}

impl StudentRecord {
    /// Checks every grade against its scale. NaN never passes a range
    /// check, so it is rejected along with out-of-scale values.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !(0.0..=BOARD_GPA_MAX).contains(&self.ssc_gpa) {
            return Err(RecordValidationError::SscGpaOutOfScale(self.ssc_gpa));
        }
        if !(0.0..=BOARD_GPA_MAX).contains(&self.hsc_gpa) {
            return Err(RecordValidationError::HscGpaOutOfScale(self.hsc_gpa));
        }
        if !(0.0..=SGPA_MAX).contains(&self.current_sgpa) {
            return Err(RecordValidationError::SgpaOutOfScale(self.current_sgpa));
        }
        if let Some(diploma_gpa) = self.profile.diploma_gpa {
            if !(0.0..=SGPA_MAX).contains(&diploma_gpa) {
                return Err(RecordValidationError::DiplomaGpaOutOfScale(diploma_gpa));
            }
        }

        Ok(())
    }
}

/// The three award families, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaiverCategory {
    ResultBased,
    SgpaBased,
    Quota,
}

impl WaiverCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ResultBased => "Result-based",
            Self::SgpaBased => "SGPA-based",
            Self::Quota => "Quota",
        }
    }
}

/// One tuition waiver the student qualifies for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiverAward {
    pub category: WaiverCategory,
    /// Human-facing award name, e.g. "Result-based" or "Tribal Quota".
    pub label: String,
    /// Which rule matched, e.g. "Golden GPA-5 both in SSC and HSC".
    pub condition: String,
    pub waiver_percent: u8,
    /// What the student must sustain to keep the waiver.
    pub requirement: String,
    pub for_new_students: bool,
}
