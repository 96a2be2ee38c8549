use colored::Colorize;
use std::io::{self, Write};
use update_notifier_core::{UpdateCandidate, UpdateSeverity};

/// Renders the update report, one line per candidate
pub struct UpdateReporter {
    show_colors: bool,
}

impl UpdateReporter {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    /// Render to stdout
    pub fn render(&self, candidates: &[UpdateCandidate]) {
        let mut stdout = io::stdout().lock();
        // A failed write to stdout has nowhere to be reported
        let _ = self.write_to(&mut stdout, candidates);
    }

    /// Render to any sink: `name: installed -> latest` per candidate, or a
    /// single up-to-date message when there is nothing to report
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        candidates: &[UpdateCandidate],
    ) -> io::Result<()> {
        if candidates.is_empty() {
            writeln!(out, "All dependencies are up to date.")?;
            return Ok(());
        }

        writeln!(out, "Updates available:")?;
        for candidate in candidates {
            writeln!(
                out,
                "{}: {} -> {}",
                candidate.name,
                candidate.installed,
                self.format_latest(candidate)
            )?;
        }

        Ok(())
    }

    fn format_latest(&self, candidate: &UpdateCandidate) -> String {
        let latest = candidate.latest.to_string();
        if !self.show_colors {
            return latest;
        }

        match candidate.severity() {
            UpdateSeverity::Major => latest.red().to_string(),
            UpdateSeverity::Minor => latest.yellow().to_string(),
            UpdateSeverity::Patch => latest.green().to_string(),
        }
    }
}
