use std::path::PathBuf;
use std::process::ExitCode;

use play_pad::app::infrastructure::logging::init_logging;
use play_pad::app::services::preview::write_preview_file;
use play_pad::app::services::snapshot::{self, WorkspaceSnapshot};
use play_pad::{Playground, PlaygroundSettings};

/// Render a saved workspace to a preview file and open it in the browser.
///
/// Usage: `PlayPad [workspace.json]`. Without an argument the saved
/// workspace is used when `restore_workspace` is enabled, otherwise the
/// default files.
fn main() -> ExitCode {
    let settings = PlaygroundSettings::load();
    init_logging(&settings.log_filter);

    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let saved = match explicit {
        Some(path) => match WorkspaceSnapshot::load_from(&path) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "could not load workspace");
                return ExitCode::FAILURE;
            }
        },
        None if settings.restore_workspace => snapshot::load_snapshot(),
        None => None,
    };

    let mut playground = match saved {
        Some(s) => Playground::from_snapshot(s, settings),
        None => Playground::new(settings),
    };

    let doc = playground.run_preview().to_string();
    let path = match write_preview_file(&doc) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "could not write preview");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(path = %path.display(), "preview written");

    if let Err(e) = open::that(&path) {
        tracing::warn!(error = %e, "could not open browser");
        println!("{}", path.display());
    }
    ExitCode::SUCCESS
}
