use crate::error::{DirCountError, Result, UserFriendlyError};
use crate::report::{FolderReport, FolderStatus, FolderSummary};
use console::{style, Emoji, Term};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
}

pub const REPORT_HEADER: &str = "Conteo recursivo por carpeta:";

static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode) -> Self {
        // Only stderr messages are styled; the report itself stays plain text.
        let use_colors = match mode {
            OutputMode::Human => Term::stderr().features().colors_supported(),
            OutputMode::Json => false,
        };

        Self { mode, use_colors }
    }

    /// Prints the report to stdout.
    pub fn print_summary(&self, summary: &FolderSummary) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_summary(&mut handle, summary)?;
        handle.flush()?;
        Ok(())
    }

    pub fn write_summary<W: Write>(&self, out: &mut W, summary: &FolderSummary) -> Result<()> {
        match self.mode {
            OutputMode::Human => write_human_summary(out, summary),
            OutputMode::Json => write_json_summary(out, summary),
        }
    }

    pub fn error(&self, message: &str) {
        if self.use_colors {
            eprintln!("{}{}", CROSS, style(message).red().bold());
        } else {
            eprintln!("ERROR: {}", message);
        }
    }

    pub fn print_user_friendly_error(&self, error: &DirCountError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                eprintln!(
                    "{}{}",
                    INFO,
                    style(&format!("Suggestion: {}", suggestion)).cyan()
                );
            } else {
                eprintln!("SUGGESTION: {}", suggestion);
            }
        }
    }
}

fn write_human_summary<W: Write>(out: &mut W, summary: &FolderSummary) -> Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    writeln!(out)?;

    for folder in &summary.folders {
        write_human_block(out, folder)?;
    }

    Ok(())
}

fn write_human_block<W: Write>(out: &mut W, folder: &FolderReport) -> Result<()> {
    match folder.status {
        FolderStatus::Counted(counts) => {
            writeln!(out, "{}/", folder.name)?;
            writeln!(out, "  - Archivos: {}", counts.files)?;
            writeln!(out, "  - Carpetas: {}", counts.directories)?;
        }
        FolderStatus::Missing => {
            writeln!(out, "{}/ NO EXISTE", folder.name)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    base_directory: String,
    folders: &'a [FolderReport],
}

fn write_json_summary<W: Write>(out: &mut W, summary: &FolderSummary) -> Result<()> {
    let report = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        base_directory: summary.base_directory.display().to_string(),
        folders: &summary.folders,
    };

    // Nothing reaches `out` unless the whole document serialized.
    let mut document = serde_json::to_vec_pretty(&report)?;
    document.push(b'\n');
    out.write_all(&document)?;
    Ok(())
}
