use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use admission_portal::assistant::AdmissionAssistant;
use admission_portal::datasets::PortalData;
use admission_portal::waivers::{PlayerLevel, WaiverEngine};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the two shared portal services. The engine carries the published
/// waiver schedule; the assistant is hydrated from the flat-file data
/// directory, falling back to the built-in FAQ rows when the sheet is
/// unreadable.
pub(crate) fn build_portal(data_dir: &Path) -> (Arc<WaiverEngine>, Arc<AdmissionAssistant>) {
    let engine = Arc::new(WaiverEngine::standard());
    let assistant = Arc::new(AdmissionAssistant::from_data(PortalData::load(data_dir)));
    (engine, assistant)
}

pub(crate) fn parse_player_level(raw: &str) -> Result<PlayerLevel, String> {
    PlayerLevel::parse(raw).ok_or_else(|| {
        format!(
            "unrecognized player level '{raw}' (expected national, premier league, \
             first division, second division, or diu player)"
        )
    })
}
