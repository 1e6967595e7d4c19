use crate::waivers::domain::{StudentRecord, WaiverAward, WaiverCategory};
use crate::waivers::schedule::{SgpaRange, WaiverSchedule};

const EXCELLENT_STANDING: &str = "Maintain excellent academic performance";
const GOOD_STANDING: &str = "Maintain good academic performance";

/// Continuing-student bands. The engine gates on enrollment status before
/// calling this; an unlisted faculty yields no bands.
pub(crate) fn sgpa_based_awards(
    schedule: &WaiverSchedule,
    student: &StudentRecord,
) -> Vec<WaiverAward> {
    let mut awards = Vec::new();

    for band in schedule.sgpa_bands(&student.faculty) {
        if band.range.contains(student.current_sgpa) {
            awards.push(WaiverAward {
                category: WaiverCategory::SgpaBased,
                label: WaiverCategory::SgpaBased.label().to_string(),
                condition: band.range.describe(),
                waiver_percent: band.waiver_percent,
                requirement: standing_requirement(band.range).to_string(),
                for_new_students: band.for_new_students,
            });
        }
    }

    awards
}

fn standing_requirement(range: SgpaRange) -> &'static str {
    match range {
        SgpaRange::Exact(_) | SgpaRange::AtLeast(_) => EXCELLENT_STANDING,
        SgpaRange::Between { .. } => GOOD_STANDING,
    }
}
