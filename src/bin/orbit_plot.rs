//! Plot a single Keplerian orbit to SVG.
//!
//! Without arguments this draws the Earth's orbit around the Sun
//! (`a = 1 AU`, `e = 0.0167`) to `artifacts/earth_orbit.svg`.

use std::path::PathBuf;

use clap::Parser;
use kepler_orbit::config::{OrbitConfig, find_orbit, load_orbits};
use kepler_orbit::export::{self, path as path_export, summary};
use kepler_orbit::orbits::OrbitSummary;
use kepler_orbit::render::{PlotStyle, render_orbit};
use kepler_orbit::units::{m_to_au, seconds_to_days};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a static Keplerian orbit as an SVG plot")]
struct Cli {
    /// Orbit manifest: YAML list, TOML file, or directory of TOML files
    #[arg(long)]
    config: Option<PathBuf>,

    /// Orbit name to pick from the manifest (case-insensitive, defaults to the first)
    #[arg(long)]
    body: Option<String>,

    /// Override the semi-major axis in metres
    #[arg(long)]
    semi_major_axis_m: Option<f64>,

    /// Override the eccentricity
    #[arg(long)]
    eccentricity: Option<f64>,

    /// Number of samples along the orbit
    #[arg(long)]
    samples: Option<usize>,

    /// Plot title (defaults to "Orbit of the <body> around the <central body>")
    #[arg(long)]
    title: Option<String>,

    /// SVG output path (defaults to artifacts/<body>_orbit.svg)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the sampled points as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write a JSON summary of derived quantities
    #[arg(long)]
    summary: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let orbit = select_orbit(&cli)?;
    let elements = orbit.elements()?;
    let path = elements.orbit_path();
    let title = cli.title.clone().unwrap_or_else(|| orbit.title());

    let style = PlotStyle {
        width: cli.width.unwrap_or(orbit.plot.width),
        height: cli.height.unwrap_or(orbit.plot.height),
        padding_fraction: orbit.plot.padding_fraction,
        star_label: format!("Star ({})", orbit.central_body),
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&orbit.name));
    render_orbit(&path, &title, &output, &style)?;

    if let Some(csv_path) = &cli.csv {
        path_export::export_csv(csv_path, &path)?;
    }

    let derived = OrbitSummary::from_elements(&elements, orbit.mu());
    if let Some(summary_path) = &cli.summary {
        let meta = summary::Metadata {
            name: &orbit.name,
            central_body: &orbit.central_body,
            title: &title,
        };
        summary::write_json(summary_path, &meta, &derived)?;
    }

    // Keep stdout clean when an artifact is streamed there.
    let streamed = [&cli.csv, &cli.summary]
        .into_iter()
        .flatten()
        .any(|p| export::is_stdout(p));
    if !streamed {
        print_summary(&title, &output, &derived);
    }
    Ok(())
}

fn select_orbit(cli: &Cli) -> anyhow::Result<OrbitConfig> {
    let mut orbit = match &cli.config {
        Some(config) => {
            let orbits = load_orbits(config)?;
            match &cli.body {
                Some(name) => find_orbit(&orbits, name)?.clone(),
                None => orbits.into_iter().next().ok_or_else(|| {
                    anyhow::anyhow!("no orbits found in {}", config.display())
                })?,
            }
        }
        None => {
            if let Some(name) = &cli.body {
                if !name.eq_ignore_ascii_case("earth") {
                    anyhow::bail!("--body '{name}' needs --config to look it up");
                }
            }
            OrbitConfig::earth()
        }
    };

    if let Some(a) = cli.semi_major_axis_m {
        orbit.semi_major_axis_m = Some(a);
        orbit.semi_major_axis_au = None;
    }
    if let Some(e) = cli.eccentricity {
        orbit.eccentricity = e;
    }
    if let Some(n) = cli.samples {
        orbit.samples = n;
    }
    Ok(orbit)
}

fn default_output(name: &str) -> PathBuf {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from("artifacts").join(format!("{stem}_orbit.svg"))
}

fn print_summary(title: &str, output: &std::path::Path, s: &OrbitSummary) {
    println!("=== {title} ===");
    println!(
        "Elements  : a = {:.6e} m ({:.4} AU), e = {:.4}, samples = {}",
        s.semi_major_axis_m,
        m_to_au(s.semi_major_axis_m),
        s.eccentricity,
        s.samples
    );
    println!(
        "Periapsis : r = {:.6e} m, v = {:.3} km/s",
        s.periapsis_m,
        s.periapsis_speed_m_s / 1_000.0
    );
    println!(
        "Apoapsis  : r = {:.6e} m, v = {:.3} km/s",
        s.apoapsis_m,
        s.apoapsis_speed_m_s / 1_000.0
    );
    println!("Period    : {:.2} days", seconds_to_days(s.period_s));
    println!("Plot      : {}", output.display());
}
