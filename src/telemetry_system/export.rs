use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::errors::ExportError;
use crate::trajectory_system::ascent::SimulationTrace;
use crate::trajectory_system::transfer::{TransferPhase, TransferTrace};

/// Column-oriented view of a trace for plotting and persistence.
pub trait TraceSeries {
    fn times(&self) -> Vec<f64>;
    fn velocities(&self) -> Vec<f64>;
    fn masses(&self) -> Vec<f64>;

    /// Extra columns beyond time, velocity and mass.
    fn extra_headers(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn extra_fields(&self, _index: usize) -> Vec<String> {
        Vec::new()
    }
}

impl TraceSeries for SimulationTrace {
    fn times(&self) -> Vec<f64> {
        self.samples().iter().map(|s| s.time).collect()
    }

    fn velocities(&self) -> Vec<f64> {
        self.samples().iter().map(|s| s.state.velocity).collect()
    }

    fn masses(&self) -> Vec<f64> {
        self.samples().iter().map(|s| s.state.mass).collect()
    }

    fn extra_headers(&self) -> Vec<&'static str> {
        vec!["Altitude (m)", "Stage"]
    }

    fn extra_fields(&self, index: usize) -> Vec<String> {
        let sample = &self.samples()[index];
        vec![
            sample.state.altitude.to_string(),
            sample.stage_index.to_string(),
        ]
    }
}

impl TraceSeries for TransferTrace {
    fn times(&self) -> Vec<f64> {
        self.samples().iter().map(|s| s.time).collect()
    }

    fn velocities(&self) -> Vec<f64> {
        self.samples().iter().map(|s| s.velocity).collect()
    }

    fn masses(&self) -> Vec<f64> {
        self.samples().iter().map(|s| s.mass).collect()
    }

    fn extra_headers(&self) -> Vec<&'static str> {
        vec!["Phase"]
    }

    fn extra_fields(&self, index: usize) -> Vec<String> {
        let phase = match self.samples()[index].phase {
            TransferPhase::Departure => "departure",
            TransferPhase::Capture => "capture",
        };
        vec![phase.to_string()]
    }
}

pub fn write_csv<T: TraceSeries, W: Write>(series: &T, writer: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(writer);

    let mut header = vec!["Time (s)", "Velocity (m/s)", "Mass (kg)"];
    header.extend(series.extra_headers());
    writer.write_record(&header)?;

    let times = series.times();
    let velocities = series.velocities();
    let masses = series.masses();
    for (index, ((time, velocity), mass)) in times.iter().zip(&velocities).zip(&masses).enumerate()
    {
        let mut record = vec![time.to_string(), velocity.to_string(), mass.to_string()];
        record.extend(series.extra_fields(index));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the trace to `path`, creating parent directories as needed.
pub fn write_csv_file<T: TraceSeries>(series: &T, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_csv(series, file)
}
