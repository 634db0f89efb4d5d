use crate::trajectory_system::ascent::{SimulationTrace, StagingEvent, TerminationReason};
use crate::trajectory_system::transfer::{TransferPlan, TransferTrace};

pub struct Telemetry {
    pub log: Vec<String>,
    max_velocity: f64,
    max_altitude: f64,
    min_mass: f64,
    staging_events: Vec<StagingEvent>,
    simulation_time: f64,
    termination: TerminationReason,
}

impl Telemetry {
    /// Collects a log line every `log_interval` seconds of simulated time.
    pub fn from_trace(trace: &SimulationTrace, log_interval: f64) -> Self {
        let mut telemetry = Telemetry {
            log: Vec::new(),
            max_velocity: f64::MIN,
            max_altitude: f64::MIN,
            min_mass: f64::MAX,
            staging_events: trace.staging_events().to_vec(),
            simulation_time: trace.last().time,
            termination: trace.termination(),
        };

        let mut next_log = 0.0;
        for sample in trace.samples() {
            let state = sample.state;
            telemetry.max_velocity = telemetry.max_velocity.max(state.velocity);
            telemetry.max_altitude = telemetry.max_altitude.max(state.altitude);
            telemetry.min_mass = telemetry.min_mass.min(state.mass);

            if sample.time >= next_log {
                telemetry.log.push(format!(
                    "Time: {} | Stage: {} | Altitude: {} | Velocity: {:.2} m/s | Mass: {:.2} kg",
                    Self::format_time(sample.time),
                    sample.stage_index,
                    Self::format_altitude(state.altitude),
                    state.velocity,
                    state.mass
                ));
                next_log += log_interval;
            }
        }

        telemetry
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn min_mass(&self) -> f64 {
        self.min_mass
    }

    pub fn staging_events(&self) -> &[StagingEvent] {
        &self.staging_events
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Flight Time: {}", Self::format_time(self.simulation_time)),
            format!("Max Velocity: {:.2} m/s", self.max_velocity),
            format!("Max Altitude: {}", Self::format_altitude(self.max_altitude)),
            format!("Min Mass: {:.2} kg", self.min_mass),
            match self.termination {
                TerminationReason::CeilingReached => "Stopped: altitude ceiling reached".to_string(),
                TerminationReason::HorizonReached => "Stopped: time horizon reached".to_string(),
            },
        ];
        if self.staging_events.is_empty() {
            lines.push("No staging events".to_string());
        }
        for event in &self.staging_events {
            lines.push(format!(
                "Stage {} -> {} at {}",
                event.from_stage,
                event.to_stage,
                Self::format_time(event.time)
            ));
        }
        lines
    }

    pub fn display_data(&self) {
        println!("--- Ascent Telemetry ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Ascent Summary ---");
        for line in self.summary() {
            println!("{}", line);
        }
    }
}

pub struct TransferReport<'a> {
    plan: &'a TransferPlan,
    trace: &'a TransferTrace,
}

impl<'a> TransferReport<'a> {
    pub fn new(plan: &'a TransferPlan, trace: &'a TransferTrace) -> Self {
        TransferReport { plan, trace }
    }

    pub fn summary(&self) -> Vec<String> {
        let last = self.trace.last();
        vec![
            format!("Δv1 (transfer ellipse injection): {:.2} m/s", self.plan.delta_v_1),
            format!("Δv2 (circular orbit capture): {:.2} m/s", self.plan.delta_v_2),
            format!("Total Δv: {:.2} m/s", self.plan.total_delta_v()),
            format!("Maneuver 1 time: {}", Telemetry::format_time(self.plan.burn_time_1)),
            format!("Maneuver 2 time: {}", Telemetry::format_time(self.plan.burn_time_2)),
            format!("Final velocity: {:.2} m/s", last.velocity),
            format!("Final mass: {:.2} kg", last.mass),
        ]
    }

    pub fn display_data(&self) {
        println!("\n--- Transfer Plan ---");
        for line in self.summary() {
            println!("{}", line);
        }
    }
}
