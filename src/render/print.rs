/// Hand-off to the host's print facility
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

use crate::error::{CalendarError, Result};

pub const MANUAL_PRINT_MESSAGE: &str =
    "Print function not available. Please use your browser's print function (Ctrl+P or Cmd+P) to save as PDF.";

/// Something that can take a rendered document to the user's printer or PDF export
pub trait PrintFacility {
    fn print(&self, document: &Path) -> Result<()>;
}

/// Opens the document with the platform's default handler (usually a browser)
pub struct SystemPrinter;

impl SystemPrinter {
    fn command(document: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(document);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(document);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(document);
            cmd
        }
    }
}

impl PrintFacility for SystemPrinter {
    fn print(&self, document: &Path) -> Result<()> {
        if !document.exists() {
            return Err(CalendarError::PrintUnavailable(format!(
                "{} does not exist",
                document.display()
            )));
        }

        // Fire and forget: the opener's exit is not awaited
        Self::command(document)
            .spawn()
            .map(|_| ())
            .map_err(|e| CalendarError::PrintUnavailable(format!("Failed to launch opener: {}", e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    Sent,
    Unavailable { message: String },
}

/// Never fails: an unavailable facility becomes a message for the user
pub fn request_print(facility: &dyn PrintFacility, document: &Path) -> PrintOutcome {
    match facility.print(document) {
        Ok(()) => {
            info!("Sent {} to the print facility", document.display());
            PrintOutcome::Sent
        }
        Err(e) => {
            warn!("Print failed: {} ({})", e, e.error_code());
            PrintOutcome::Unavailable {
                message: MANUAL_PRINT_MESSAGE.to_string(),
            }
        }
    }
}
