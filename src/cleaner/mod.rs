use std::path::Path;
use tracing::debug;

use crate::cli::output;

/// Decides, per unexpected file, whether it should be removed.
///
/// The scan loop never reads stdin itself; it asks the policy. Tests inject
/// a fixed policy instead of a real terminal.
pub trait DeletePolicy {
    fn confirm_delete(&mut self, name: &str) -> bool;
}

/// Prompt the operator on stdin for each unexpected file.
pub struct Interactive;

impl DeletePolicy for Interactive {
    fn confirm_delete(&mut self, name: &str) -> bool {
        output::print_delete_prompt(name);
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        input.trim().eq_ignore_ascii_case("y")
    }
}

/// Never delete. Useful for rehearsing a cleanup run.
pub struct AlwaysSkip;

impl DeletePolicy for AlwaysSkip {
    fn confirm_delete(&mut self, _name: &str) -> bool {
        false
    }
}

/// Delete every unexpected file without asking.
pub struct AlwaysDelete;

impl DeletePolicy for AlwaysDelete {
    fn confirm_delete(&mut self, _name: &str) -> bool {
        true
    }
}

/// What happened to one unexpected file after consulting the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    Deleted,
    Kept,
    Failed,
}

/// Run the prompt-delete-report sequence for a single unexpected file.
///
/// Deletion failure is recoverable: the file stays in place and the scan
/// moves on. A file that vanished between listing and deletion surfaces
/// here as a failure too.
pub fn handle_unexpected(
    location: &Path,
    name: &str,
    policy: &mut dyn DeletePolicy,
) -> CleanOutcome {
    if !policy.confirm_delete(name) {
        output::print_not_deleted();
        return CleanOutcome::Kept;
    }

    let target = location.join(name);
    match std::fs::remove_file(&target) {
        Ok(()) => {
            debug!(path = %target.display(), "removed daemon file");
            output::print_deleted();
            CleanOutcome::Deleted
        }
        Err(err) => {
            output::print_delete_failed(&err);
            CleanOutcome::Failed
        }
    }
}
