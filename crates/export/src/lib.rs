//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Path that selects stdout instead of a file.
pub const STDOUT: &str = "-";

/// Whether `path` selects stdout.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT
}

/// Open an artifact for writing: stdout for `-`, otherwise a file whose
/// missing parent directories are created first.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if is_stdout(path) {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
        _ => {}
    }
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}

pub mod path {
    use std::io::{self, Write};
    use std::path::Path;

    use kepler_orbits::OrbitPath;
    use tracing::info;

    const HEADER: &str = "index,theta_rad,x_m,y_m,r_m";

    /// Write the orbit samples as CSV, one row per point in sample order.
    pub fn write_csv(writer: &mut dyn Write, path: &OrbitPath) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)?;
        for (index, point) in path.points().iter().enumerate() {
            writeln!(
                writer,
                "{},{:.9},{:e},{:e},{:e}",
                index,
                point.theta_rad,
                point.x_m,
                point.y_m,
                point.radius(),
            )?;
        }
        writer.flush()
    }

    /// Write the samples to `output` (or stdout for `-`).
    pub fn export_csv(output: &Path, path: &OrbitPath) -> io::Result<()> {
        let mut writer = super::writer_for_path(output)?;
        write_csv(&mut *writer, path)?;
        info!(rows = path.len(), "wrote orbit samples to {}", output.display());
        Ok(())
    }
}

pub mod summary {
    use std::io::{self, Write};
    use std::path::Path;

    use kepler_core::units::seconds_to_days;
    use kepler_orbits::OrbitSummary;
    use serde::Serialize;
    use tracing::info;

    /// Metadata describing which orbit was plotted.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub name: &'a str,
        pub central_body: &'a str,
        pub title: &'a str,
    }

    #[derive(Serialize)]
    struct SummarySidecar<'a> {
        name: &'a str,
        central_body: &'a str,
        title: &'a str,
        #[serde(flatten)]
        summary: &'a OrbitSummary,
        period_days: f64,
    }

    /// Write a pretty-printed JSON summary of the orbit.
    pub fn write_json(output: &Path, meta: &Metadata<'_>, summary: &OrbitSummary) -> io::Result<()> {
        let sidecar = SummarySidecar {
            name: meta.name,
            central_body: meta.central_body,
            title: meta.title,
            summary,
            period_days: seconds_to_days(summary.period_s),
        };
        let mut writer = super::writer_for_path(output)?;
        serde_json::to_writer_pretty(&mut writer, &sidecar)?;
        writeln!(writer)?;
        writer.flush()?;
        info!("wrote orbit summary to {}", output.display());
        Ok(())
    }
}
