use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use clap::{Parser, ValueEnum};
use hohmann_calculator::common::angle::{deg_to_rad, rad_to_deg};
use hohmann_calculator::common::time::{seconds_to_days, seconds_to_years};
use hohmann_calculator::common::units::{km_to_m, m_to_au, m_to_km, ms_to_kms};
use hohmann_calculator::export::summary::{self, TransferSummary};
use hohmann_calculator::export::writer_for_path;
use hohmann_calculator::transfer::{DepartureConfig, TransferDirection, catalog as transfer_catalog};
use hohmann_calculator::{
    CalculatorOptions, OrbitTarget, TransferReport, TransferRequest, plan_transfer,
};

#[path = "shared/logging.rs"]
mod logging;

/// Hohmann transfer between circular, coplanar orbits with launch phasing.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hohmann transfer and launch phase-angle calculator"
)]
struct Cli {
    /// Departure body name (case-insensitive, aliases accepted)
    #[arg(long)]
    from: String,

    /// Target body name (case-insensitive, aliases accepted)
    #[arg(long, required_unless_present = "to_radius_au", conflicts_with = "to_radius_au")]
    to: Option<String>,

    /// Custom target orbit radius in AU instead of a catalog body
    #[arg(long)]
    to_radius_au: Option<f64>,

    /// Current heliocentric longitude of the departure body (degrees, default 0)
    #[arg(long, allow_hyphen_values = true)]
    from_longitude_deg: Option<f64>,

    /// Current heliocentric longitude of the target (degrees, default departure + 60)
    #[arg(long, allow_hyphen_values = true)]
    to_longitude_deg: Option<f64>,

    /// Skip the phase-angle and wait-time solver
    #[arg(long, default_value_t = false)]
    no_phasing: bool,

    /// Skip the parking-orbit escape add-on
    #[arg(long, default_value_t = false)]
    no_escape: bool,

    /// Mass of the body escaped from, in kg (defaults to the departure body)
    #[arg(long)]
    escape_mass_kg: Option<f64>,

    /// Radius of the body escaped from, in km (defaults to the departure body; Earth's
    /// radius when only --escape-mass-kg is given)
    #[arg(long)]
    escape_radius_km: Option<f64>,

    /// Parking orbit altitude for the escape add-on, in km (defaults to catalog, then 300)
    #[arg(long)]
    escape_altitude_km: Option<f64>,

    /// Central-body gravitational parameter override (m^3/s^2)
    #[arg(long)]
    mu: Option<f64>,

    /// Body catalog: YAML file, TOML file, or directory of TOML files (defaults to built-in)
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Central-body record (YAML or TOML); defaults to the Sun
    #[arg(long)]
    central: Option<PathBuf>,

    /// Calendar date the longitudes refer to (YYYY-MM-DD or "now"); enables dated output
    #[arg(long)]
    epoch: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Log intermediate quantities to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
    /// Full nested report
    JsonReport,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = transfer_catalog::select(cli.bodies.as_deref(), cli.central.as_deref())
        .context("loading body catalog")?;

    let arrival = match (&cli.to, cli.to_radius_au) {
        (Some(name), _) => OrbitTarget::body(name.as_str()),
        (None, Some(radius_au)) => {
            if !(radius_au.is_finite() && radius_au > 0.0) {
                return Err(anyhow!("--to-radius-au must be positive (got {radius_au})"));
            }
            OrbitTarget::radius_au(radius_au)
        }
        (None, None) => return Err(anyhow!("either --to or --to-radius-au is required")),
    };

    let mut request = TransferRequest::new(OrbitTarget::body(cli.from.as_str()), arrival);
    request.central_mu_m3_s2 = cli.mu;
    request.departure_longitude_rad = cli.from_longitude_deg.map(deg_to_rad);
    request.arrival_longitude_rad = cli.to_longitude_deg.map(deg_to_rad);
    request.escape = DepartureConfig {
        body_mass_kg: cli.escape_mass_kg,
        body_radius_m: cli.escape_radius_km.map(km_to_m),
        parking_altitude_m: cli.escape_altitude_km.map(km_to_m),
    };
    request.options = CalculatorOptions {
        include_phase_timing: !cli.no_phasing,
        include_escape_addon: !cli.no_escape,
        custom_radius_allowed: true,
    };

    let epoch = cli.epoch.as_deref().map(parse_epoch).transpose()?;
    let report = plan_transfer(&request, &catalog)?;

    let mut writer = writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    match cli.format {
        OutputFormat::Text => render_text(&mut *writer, &report, epoch)?,
        OutputFormat::Json => summary::write_json(&mut *writer, &TransferSummary::from(&report))?,
        OutputFormat::JsonReport => summary::write_report_json(&mut *writer, &report)?,
    }
    writer.flush()?;

    Ok(())
}

fn parse_epoch(value: &str) -> anyhow::Result<NaiveDateTime> {
    if value.eq_ignore_ascii_case("now") {
        return Ok(Utc::now().naive_utc());
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("epoch '{value}' is not a YYYY-MM-DD date"))?;
    Ok(date.and_time(NaiveTime::MIN))
}

fn offset_epoch(epoch: NaiveDateTime, seconds: f64) -> Option<NaiveDateTime> {
    TimeDelta::try_seconds(seconds.round() as i64).and_then(|delta| epoch.checked_add_signed(delta))
}

fn render_text(
    w: &mut dyn Write,
    report: &TransferReport,
    epoch: Option<NaiveDateTime>,
) -> anyhow::Result<()> {
    let cruise = &report.cruise;
    let transfer = &cruise.transfer;

    writeln!(w, "=== Hohmann Transfer ===")?;
    writeln!(
        w,
        "Departure      : {} (r1 = {:.6} AU)",
        report.departure.name,
        m_to_au(report.departure.radius_m)
    )?;
    writeln!(
        w,
        "Target         : {} (r2 = {:.6} AU), {}",
        report.arrival.name,
        m_to_au(report.arrival.radius_m),
        match report.direction() {
            TransferDirection::NoTransfer => "same orbit, no transfer",
            TransferDirection::Outward => "outward transfer",
            TransferDirection::Inward => "inward transfer",
        }
    )?;
    writeln!(
        w,
        "Mean motion    : n1 = {:.6e} rad/s (T1 = {:.2} days), n2 = {:.6e} rad/s (T2 = {:.2} days)",
        cruise.departure.mean_motion_rad_s,
        seconds_to_days(cruise.departure.period_s),
        cruise.arrival.mean_motion_rad_s,
        seconds_to_days(cruise.arrival.period_s)
    )?;
    writeln!(
        w,
        "Transfer orbit : a = {:.6} AU, TOF = {:.2} days ({:.4} years)",
        m_to_au(transfer.semi_major_axis_m),
        seconds_to_days(transfer.transfer_time_s),
        seconds_to_years(transfer.transfer_time_s)
    )?;
    writeln!(
        w,
        "Heliocentric   : Δv depart = {:.3} km/s, Δv arrive = {:.3} km/s, total = {:.3} km/s",
        ms_to_kms(transfer.dv_depart_m_s),
        ms_to_kms(transfer.dv_arrive_m_s),
        ms_to_kms(transfer.dv_total_m_s)
    )?;
    if let Some(escape) = &report.escape {
        writeln!(
            w,
            "Escape burn    : Δv = {:.3} km/s from a {:.0} km parking orbit",
            ms_to_kms(escape.delta_v_m_s()),
            m_to_km(escape.parking_altitude_m)
        )?;
        writeln!(
            w,
            "Mission Δv     : {:.3} km/s",
            ms_to_kms(report.mission_delta_v_m_s)
        )?;
    }

    if let Some(phasing) = &report.phasing {
        writeln!(w)?;
        writeln!(w, "--- Phasing and Timing ---")?;
        writeln!(
            w,
            "Required phase : {:.3}° (target should lead by this much)",
            rad_to_deg(phasing.required_phase_rad)
        )?;
        writeln!(
            w,
            "Current phase  : {:.3}°",
            rad_to_deg(phasing.current_phase_rad)
        )?;
        match phasing.wait_time_s {
            None => writeln!(w, "Relative motion too small, phasing undefined.")?,
            Some(wait) => {
                writeln!(
                    w,
                    "Relative rate  : {:.6e} rad/s",
                    phasing.relative_mean_motion_rad_s
                )?;
                writeln!(
                    w,
                    "Wait angle     : {:.3}°",
                    rad_to_deg(phasing.wait_angle_rad)
                )?;
                writeln!(
                    w,
                    "Wait time      : {:.2} days ({:.6} years)",
                    seconds_to_days(wait),
                    seconds_to_years(wait)
                )?;
                writeln!(
                    w,
                    "Departure long.: {:.3}°",
                    rad_to_deg(phasing.departure_longitude_rad)
                )?;
                writeln!(
                    w,
                    "Target long.   : {:.3}° at arrival",
                    rad_to_deg(phasing.arrival_longitude_rad)
                )?;
                writeln!(
                    w,
                    "Arrival time   : {:.2} days from now",
                    seconds_to_days(phasing.arrival_time_s)
                )?;
                if let Some(epoch) = epoch {
                    let fmt = "%Y-%m-%d %H:%M UTC";
                    if let (Some(depart), Some(arrive)) = (
                        offset_epoch(epoch, phasing.departure_time_s),
                        offset_epoch(epoch, phasing.arrival_time_s),
                    ) {
                        writeln!(w, "Departure date : {}", depart.format(fmt))?;
                        writeln!(w, "Arrival date   : {}", arrive.format(fmt))?;
                    }
                }
            }
        }
    }

    writeln!(w)?;
    writeln!(w, "--- Notes ---")?;
    writeln!(w, "1) Orbits are treated as circular and coplanar.")?;
    writeln!(
        w,
        "2) The phase-angle rule φ = π − n_target · t_transfer is an approximation."
    )?;
    writeln!(
        w,
        "3) Gravity assists, inclination, and perturbations are not modelled."
    )?;
    Ok(())
}
