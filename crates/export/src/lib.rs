//! Export helpers for JSON and CSV artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod summary {
    use std::io::{self, Write};

    use hohmann_transfer::TransferReport;
    use serde::Serialize;

    /// Flat result record in SI units (metres, seconds, m/s, radians).
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct TransferSummary {
        pub departure: String,
        pub arrival: String,
        pub direction: &'static str,
        pub r1_m: f64,
        pub r2_m: f64,
        pub n1_rad_s: f64,
        pub n2_rad_s: f64,
        pub period1_s: f64,
        pub period2_s: f64,
        pub a_transfer_m: f64,
        pub t_transfer_s: f64,
        pub dv_depart_m_s: f64,
        pub dv_arrive_m_s: f64,
        pub dv_total_m_s: f64,
        pub dv_escape_m_s: Option<f64>,
        pub mission_dv_m_s: f64,
        pub phi_required_rad: Option<f64>,
        pub phi_current_rad: Option<f64>,
        pub relative_mean_motion_rad_s: Option<f64>,
        /// `null` when phasing was skipped or the wait is undefined.
        pub wait_time_s: Option<f64>,
        pub departure_longitude_rad: Option<f64>,
        pub arrival_longitude_rad: Option<f64>,
        pub arrival_time_s: Option<f64>,
    }

    impl From<&TransferReport> for TransferSummary {
        fn from(report: &TransferReport) -> Self {
            let cruise = &report.cruise;
            let phasing = report.phasing.as_ref();
            Self {
                departure: report.departure.name.clone(),
                arrival: report.arrival.name.clone(),
                direction: report.direction().label(),
                r1_m: cruise.departure.radius_m,
                r2_m: cruise.arrival.radius_m,
                n1_rad_s: cruise.departure.mean_motion_rad_s,
                n2_rad_s: cruise.arrival.mean_motion_rad_s,
                period1_s: cruise.departure.period_s,
                period2_s: cruise.arrival.period_s,
                a_transfer_m: cruise.transfer.semi_major_axis_m,
                t_transfer_s: cruise.transfer.transfer_time_s,
                dv_depart_m_s: cruise.transfer.dv_depart_m_s,
                dv_arrive_m_s: cruise.transfer.dv_arrive_m_s,
                dv_total_m_s: cruise.transfer.dv_total_m_s,
                dv_escape_m_s: report.escape.map(|e| e.delta_v_m_s()),
                mission_dv_m_s: report.mission_delta_v_m_s,
                phi_required_rad: phasing.map(|p| p.required_phase_rad),
                phi_current_rad: phasing.map(|p| p.current_phase_rad),
                relative_mean_motion_rad_s: phasing.map(|p| p.relative_mean_motion_rad_s),
                wait_time_s: phasing.and_then(|p| p.wait_time_s),
                departure_longitude_rad: phasing.map(|p| p.departure_longitude_rad),
                arrival_longitude_rad: phasing.map(|p| p.arrival_longitude_rad),
                arrival_time_s: phasing.map(|p| p.arrival_time_s),
            }
        }
    }

    /// Write the flat summary as pretty JSON.
    pub fn write_json(writer: &mut dyn Write, summary: &TransferSummary) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, summary)?;
        writeln!(writer)
    }

    /// Write the full nested report as pretty JSON.
    pub fn write_report_json(writer: &mut dyn Write, report: &TransferReport) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}

pub mod table {
    use std::io::Write;

    use hohmann_core::angle::rad_to_deg;
    use hohmann_core::time::seconds_to_days;
    use hohmann_core::units::{m_to_au, ms_to_kms};
    use hohmann_transfer::TransferReport;
    use serde::Serialize;

    /// CSV row emitted by the transfer table exporter, in display units.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Row {
        pub origin: String,
        pub destination: String,
        pub direction: &'static str,
        pub r1_au: f64,
        pub r2_au: f64,
        pub a_transfer_au: f64,
        pub tof_days: f64,
        pub dv_depart_km_s: f64,
        pub dv_arrive_km_s: f64,
        pub dv_total_km_s: f64,
        pub phase_angle_deg: Option<f64>,
        pub synodic_period_days: Option<f64>,
    }

    impl From<&TransferReport> for Row {
        fn from(report: &TransferReport) -> Self {
            let transfer = &report.cruise.transfer;
            Self {
                origin: report.departure.name.clone(),
                destination: report.arrival.name.clone(),
                direction: report.direction().label(),
                r1_au: m_to_au(transfer.r1_m),
                r2_au: m_to_au(transfer.r2_m),
                a_transfer_au: m_to_au(transfer.semi_major_axis_m),
                tof_days: seconds_to_days(transfer.transfer_time_s),
                dv_depart_km_s: ms_to_kms(transfer.dv_depart_m_s),
                dv_arrive_km_s: ms_to_kms(transfer.dv_arrive_m_s),
                dv_total_km_s: ms_to_kms(transfer.dv_total_m_s),
                phase_angle_deg: report.phasing.map(|p| rad_to_deg(p.required_phase_rad)),
                synodic_period_days: report
                    .phasing
                    .and_then(|p| p.synodic_period_s)
                    .map(seconds_to_days),
            }
        }
    }

    /// Serialize rows to CSV with a header line.
    pub fn write_rows<W: Write>(writer: W, rows: &[Row]) -> csv::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
