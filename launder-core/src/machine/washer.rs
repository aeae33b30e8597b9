//! Washing machine cycle controller
//!
//! Sequence for one cycle, each step terminal on failure:
//!
//! 1. Reject batches heavier than the configured capacity
//! 2. Resolve the effective program (consulting the dirt detector for autodetect)
//! 3. Pour water
//! 4. Run the wash
//! 5. Release water
//! 6. Spin, if requested
//!
//! Collaborator faults never escape `start`; they are folded into the
//! returned [`LaundryStatus`].

use crate::config::{ConfigError, MachineConfig};
use crate::laundry::{
    ErrorCode, LaundryBatch, LaundryStatus, Percentage, Program, ProgramChoice,
    ProgramConfiguration,
};
use crate::traits::{DirtDetector, Engine, WaterPump};

/// Map a detected soil degree to a concrete program
///
/// Autodetect only ever chooses between medium and long.
pub fn program_for_soil(degree: Percentage, long_threshold: Percentage) -> Program {
    if degree >= long_threshold {
        Program::Long
    } else {
        Program::Medium
    }
}

/// Wash cycle controller
///
/// Owns the three collaborators it drives. Holds no per-cycle state, so a
/// single instance can run any number of cycles back to back.
pub struct WashingMachine<D, E, P> {
    config: MachineConfig,
    detector: D,
    engine: E,
    pump: P,
}

impl<D, E, P> WashingMachine<D, E, P>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
{
    /// Create a controller with the default machine configuration
    pub fn new(detector: D, engine: E, pump: P) -> Self {
        Self {
            config: MachineConfig::default(),
            detector,
            engine,
            pump,
        }
    }

    /// Create a controller with an explicit machine configuration
    ///
    /// Rejects configurations that fail [`MachineConfig::validate`].
    pub fn with_config(
        config: MachineConfig,
        detector: D,
        engine: E,
        pump: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            detector,
            engine,
            pump,
        })
    }

    /// Run one wash cycle
    pub fn start(
        &mut self,
        batch: &LaundryBatch,
        configuration: &ProgramConfiguration,
    ) -> LaundryStatus {
        let weight_kg = batch.weight_kg();
        debug!(
            "cycle start: {=f32} kg, choice {}",
            weight_kg,
            configuration.program()
        );

        if !self.config.fits(weight_kg) {
            warn!(
                "batch too heavy: {=f32} kg > {=f32} kg",
                weight_kg, self.config.max_load_kg
            );
            return LaundryStatus::failure(ErrorCode::TooHeavy, None);
        }

        let program = self.resolve_program(configuration.program(), batch);

        if let Err(e) = self.pump.pour(weight_kg) {
            warn!("water pump fault: {}", e);
            return LaundryStatus::failure(e.into(), Some(program));
        }

        if let Err(e) = self.engine.run_washing(program.time_in_minutes()) {
            warn!("engine fault: {}", e);
            if self.config.drain_on_engine_fault {
                self.pump.release();
            }
            return LaundryStatus::failure(e.into(), Some(program));
        }

        self.pump.release();

        if configuration.spin() {
            self.engine.spin();
        } else {
            trace!("spin skipped");
        }

        info!("cycle complete: {}", program);
        LaundryStatus::success(program)
    }

    /// Resolve the program a cycle will actually run
    ///
    /// Consults the dirt detector exactly once for autodetect and not at
    /// all for a fixed program.
    pub fn resolve_program(&mut self, choice: ProgramChoice, batch: &LaundryBatch) -> Program {
        match choice {
            ProgramChoice::Fixed(program) => program,
            ProgramChoice::AutoDetect => {
                let degree = self.detector.detect_dirt_degree(batch);
                let program = program_for_soil(degree, self.config.autodetect.long_threshold);
                debug!("autodetect: soil {}% -> {}", degree.value(), program);
                program
            }
        }
    }
}

impl<D, E, P> WashingMachine<D, E, P> {
    /// Machine configuration in use
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn dirt_detector(&self) -> &D {
        &self.detector
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn water_pump(&self) -> &P {
        &self.pump
    }

    /// Consume the controller and return its collaborators
    pub fn free(self) -> (D, E, P) {
        (self.detector, self.engine, self.pump)
    }
}
