//! Flat-file datasets backing the portal: the FAQ sheet and the
//! waiver/program/department catalogs. Loading is deliberately forgiving;
//! rule tables live in code, not here.

pub mod catalog;
pub mod faq;

pub use catalog::{DepartmentInfo, InfoCatalog, ProgramInfo, WaiverInfo, WaiverRate};
pub use faq::{builtin_faq, load_faq, read_faq, FaqLoadError, FaqRecord, MISSING_FIELD};

use std::path::Path;

use tracing::{info, warn};

/// Everything the assistant needs, loaded from one data directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalData {
    pub faq: Vec<FaqRecord>,
    pub catalog: InfoCatalog,
}

impl PortalData {
    /// Loads the FAQ sheet and catalogs from `dir`. An unreadable sheet
    /// falls back to the built-in defaults; an empty-but-valid sheet stays
    /// empty so the assistant reports it has nothing to answer from.
    pub fn load(dir: &Path) -> Self {
        let faq_path = dir.join(faq::FAQ_FILE_NAME);
        let faq = match load_faq(&faq_path) {
            Ok(records) => {
                info!(path = %faq_path.display(), rows = records.len(), "FAQ sheet loaded");
                records
            }
            Err(err) => {
                warn!(path = %faq_path.display(), error = %err, "could not load FAQ sheet, using built-in defaults");
                builtin_faq()
            }
        };

        Self {
            faq,
            catalog: InfoCatalog::load(dir),
        }
    }

    /// The defaults used when no data directory is available at all.
    pub fn builtin() -> Self {
        Self {
            faq: builtin_faq(),
            catalog: InfoCatalog::empty(),
        }
    }
}
