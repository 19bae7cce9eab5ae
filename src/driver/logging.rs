use std::path::Path;
use std::time::Instant;

use tracing::info;

pub(super) fn log_stage(stage: &str, path: &Path, start: Instant) {
    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!(
        target: "pipeline",
        stage = stage,
        status = "ok",
        path = %path.display(),
        elapsed_ms
    );
}
