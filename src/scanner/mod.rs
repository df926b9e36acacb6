pub mod classifier;

use std::path::Path;
use tracing::debug;

use crate::cleaner::{self, CleanOutcome, DeletePolicy};
use crate::cli::output;
use crate::common::config::Config;

/// Counters accumulated over one run, rendered once at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub locations: usize,
    pub unreadable: usize,
    pub known: usize,
    pub unexpected: usize,
    pub deleted: usize,
    pub delete_failed: usize,
}

/// Scan every configured location in order.
///
/// `policy` is `Some` only in clean mode; without it, unexpected files are
/// reported and left alone.
pub fn run_scan(config: &Config, mut policy: Option<&mut dyn DeletePolicy>) -> ScanSummary {
    let mut summary = ScanSummary::default();

    for location in &config.locations {
        output::print_location_header(location);
        scan_location(
            location,
            &config.allowed_daemons,
            policy.as_deref_mut(),
            &mut summary,
        );
        output::print_location_footer();
    }

    summary
}

/// List one location and classify each immediate child by name.
///
/// An unreadable location gets a single notice and the run continues; a bad
/// directory must not abort the other locations.
pub fn scan_location(
    dir: &Path,
    allowed: &[String],
    mut policy: Option<&mut (dyn DeletePolicy + '_)>,
    summary: &mut ScanSummary,
) {
    summary.locations += 1;

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), %err, "cannot list location");
            output::print_invalid_location();
            summary.unreadable += 1;
            return;
        }
    };

    // read_dir order is platform-dependent; sort so runs are comparable
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    for name in names {
        if classifier::is_known(&name, allowed) {
            summary.known += 1;
            output::print_known(&name);
            continue;
        }

        summary.unexpected += 1;
        match policy.as_deref_mut() {
            None => output::print_unexpected(&name),
            Some(policy) => match cleaner::handle_unexpected(dir, &name, policy) {
                CleanOutcome::Deleted => summary.deleted += 1,
                CleanOutcome::Failed => summary.delete_failed += 1,
                CleanOutcome::Kept => {}
            },
        }
    }
}
