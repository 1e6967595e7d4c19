use std::path::PathBuf;

use clap::Args;

use admission_portal::assistant::{best_match, reply, AdmissionAssistant, FaqIndex};
use admission_portal::config::AppConfig;
use admission_portal::datasets::{load_faq, PortalData};
use admission_portal::error::AppError;
use admission_portal::waivers::schedule::{ENGINEERING, HUMANITIES, PHARMACY_LAW_CSE};
use admission_portal::waivers::{
    EligibilitySummary, Faculty, PlayerLevel, StudentProfile, StudentRecord, WaiverEngine,
};

use crate::infra::parse_player_level;

#[derive(Args, Debug)]
pub(crate) struct WaiverCalcArgs {
    /// Faculty grouping key, e.g. SIT_BE_AHS_Engineering
    #[arg(long)]
    pub(crate) faculty: String,
    /// SSC GPA on the 0-5 scale
    #[arg(long)]
    pub(crate) ssc_gpa: f32,
    /// HSC GPA on the 0-5 scale
    #[arg(long)]
    pub(crate) hsc_gpa: f32,
    /// Evaluate as a new applicant rather than a continuing student
    #[arg(long)]
    pub(crate) new_student: bool,
    /// Current semester GPA on the 0-4 scale (continuing students)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) sgpa: f32,
    /// Claim the female quota
    #[arg(long)]
    pub(crate) female: bool,
    /// Claim the DIU employee quota
    #[arg(long)]
    pub(crate) diu_employee: bool,
    /// Claim the DIC student quota
    #[arg(long)]
    pub(crate) dic_student: bool,
    /// Claim the DPI student quota
    #[arg(long)]
    pub(crate) dpi_student: bool,
    /// Claim the DIPTI student quota
    #[arg(long)]
    pub(crate) dipti_student: bool,
    /// With --dipti-student: the HSC result improved on the SSC result
    #[arg(long)]
    pub(crate) hsc_better: bool,
    /// Claim the alumni relative quota
    #[arg(long)]
    pub(crate) alumni_relative: bool,
    /// Claim the alumni spouse quota
    #[arg(long)]
    pub(crate) alumni_spouse: bool,
    /// Claim the physically challenged quota
    #[arg(long)]
    pub(crate) physically_challenged: bool,
    /// Claim the tribal quota
    #[arg(long)]
    pub(crate) tribal: bool,
    /// A sibling is currently enrolled
    #[arg(long)]
    pub(crate) sibling: bool,
    /// A spouse is currently enrolled
    #[arg(long)]
    pub(crate) spouse: bool,
    /// Diploma GPA for diploma-holder applicants
    #[arg(long)]
    pub(crate) diploma_gpa: Option<f32>,
    /// Claim the first batch quota
    #[arg(long)]
    pub(crate) first_batch: bool,
    /// Player level (national, premier league, first division, second division, diu player)
    #[arg(long, value_parser = parse_player_level)]
    pub(crate) player_level: Option<PlayerLevel>,
}

impl WaiverCalcArgs {
    fn into_record(self) -> StudentRecord {
        StudentRecord {
            faculty: Faculty::new(self.faculty),
            ssc_gpa: self.ssc_gpa,
            hsc_gpa: self.hsc_gpa,
            is_new_student: self.new_student,
            current_sgpa: self.sgpa,
            profile: StudentProfile {
                is_female: self.female,
                is_diu_employee: self.diu_employee,
                is_dic_student: self.dic_student,
                is_dpi_student: self.dpi_student,
                is_dipti_student: self.dipti_student,
                hsc_better_than_ssc: self.hsc_better,
                is_alumni_relative: self.alumni_relative,
                is_alumni_spouse: self.alumni_spouse,
                is_physically_challenged: self.physically_challenged,
                is_tribal: self.tribal,
                has_sibling_student: self.sibling,
                has_spouse_student: self.spouse,
                diploma_gpa: self.diploma_gpa,
                is_first_batch: self.first_batch,
                player_level: self.player_level,
            },
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// The question to look up
    pub(crate) question: String,
    /// Load the FAQ sheet from this CSV instead of the data directory
    #[arg(long)]
    pub(crate) faq_csv: Option<PathBuf>,
    /// Data directory holding faq.csv (defaults to the configured directory)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Data directory holding faq.csv and the info catalogs
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Skip the assistant portion of the demo
    #[arg(long)]
    pub(crate) skip_assistant: bool,
}

pub(crate) fn run_waiver_calc(args: WaiverCalcArgs) -> Result<(), AppError> {
    let engine = WaiverEngine::standard();
    let record = args.into_record();
    record.validate()?;
    let summary = engine.summarize(&record);

    render_summary(&record, &summary);
    Ok(())
}

pub(crate) fn run_faq_ask(args: AskArgs) -> Result<(), AppError> {
    let AskArgs {
        question,
        faq_csv,
        data_dir,
    } = args;

    // An explicitly named sheet should fail loudly; the data directory keeps
    // the built-in fallback semantics.
    let records = match faq_csv {
        Some(path) => load_faq(&path)?,
        None => PortalData::load(&resolve_data_dir(data_dir)?).faq,
    };

    let index = FaqIndex::new(records);
    match best_match(&index, &question) {
        Some(found) => {
            println!("Q: {}", found.question);
            println!("A: {}", found.answer);
            println!(
                "(matched via the {} stage over {} entries)",
                found.stage.label(),
                index.len()
            );
        }
        None => println!("{}", reply(&index, &question)),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        data_dir,
        skip_assistant,
    } = args;

    println!("Admission portal demo");

    let engine = WaiverEngine::standard();
    for (note, record) in demo_records() {
        println!("\n=== {note} ===");
        let summary = engine.summarize(&record);
        render_summary(&record, &summary);
    }

    if skip_assistant {
        return Ok(());
    }

    let assistant = AdmissionAssistant::from_data(PortalData::load(&resolve_data_dir(data_dir)?));
    println!(
        "\nAssistant demo ({} FAQ entries loaded)",
        assistant.index().len()
    );
    for question in DEMO_QUESTIONS {
        println!("\n> {question}");
        println!("{}", assistant.reply(question));
    }

    Ok(())
}

const DEMO_QUESTIONS: [&str; 4] = [
    "hello",
    "What programs does DIU offer?",
    "Do I qualify for a scholarship?",
    "Which department should I choose?",
];

fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match data_dir {
        Some(dir) => Ok(dir),
        None => Ok(AppConfig::load()?.data.data_dir),
    }
}

fn render_summary(record: &StudentRecord, summary: &EligibilitySummary) {
    println!(
        "Faculty {} | SSC {:.2} | HSC {:.2}",
        record.faculty, record.ssc_gpa, record.hsc_gpa
    );
    if record.is_new_student {
        println!("Evaluated as a new applicant");
    } else {
        println!(
            "Evaluated as a continuing student (SGPA {:.2})",
            record.current_sgpa
        );
    }

    if summary.awards.is_empty() {
        println!("No waivers matched this record.");
        return;
    }

    println!("Qualifying waivers:");
    for award in &summary.awards {
        println!(
            "- {} | {} | {}% | {}",
            award.label, award.condition, award.waiver_percent, award.requirement
        );
    }
    println!("Applicable waiver: {}%", summary.max_waiver_percent);
}

fn demo_records() -> Vec<(&'static str, StudentRecord)> {
    vec![
        (
            "Golden GPA-5 applicant, Engineering",
            StudentRecord {
                faculty: Faculty::from(ENGINEERING),
                ssc_gpa: 5.0,
                hsc_gpa: 5.0,
                is_new_student: true,
                ..StudentRecord::default()
            },
        ),
        (
            "Continuing student with a perfect semester, Humanities",
            StudentRecord {
                faculty: Faculty::from(HUMANITIES),
                ssc_gpa: 4.2,
                hsc_gpa: 4.2,
                current_sgpa: 4.0,
                ..StudentRecord::default()
            },
        ),
        (
            "Physically challenged applicant, no academic waivers",
            StudentRecord {
                profile: StudentProfile {
                    is_physically_challenged: true,
                    ..StudentProfile::default()
                },
                ..StudentRecord::default()
            },
        ),
        (
            "National team player, Pharmacy/Law/CSE",
            StudentRecord {
                faculty: Faculty::from(PHARMACY_LAW_CSE),
                ssc_gpa: 3.8,
                hsc_gpa: 3.9,
                is_new_student: true,
                profile: StudentProfile {
                    player_level: Some(PlayerLevel::NationalTeam),
                    ..StudentProfile::default()
                },
                ..StudentRecord::default()
            },
        ),
    ]
}
