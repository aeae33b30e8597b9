//! Recording fakes for the hardware traits
//!
//! Each fake appends to a shared [`Journal`] so tests can assert on the
//! exact order of calls across collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use heapless::Vec;

use crate::laundry::{LaundryBatch, Percentage};
use crate::traits::{DirtDetector, Engine, EngineError, PumpError, WaterPump};

/// Calls kept per journal
pub const JOURNAL_CAPACITY: usize = 16;

/// A recorded collaborator call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Detect(LaundryBatch),
    Pour(f32),
    RunWashing(u16),
    Release,
    Spin,
}

/// Shared call log
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Call, JOURNAL_CAPACITY>>>);

impl Journal {
    fn record(&self, call: Call) {
        self.0.borrow_mut().push(call).expect("journal full");
    }

    /// Snapshot of all calls so far
    pub fn calls(&self) -> Vec<Call, JOURNAL_CAPACITY> {
        self.0.borrow().clone()
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|&c| pred(c)).count()
    }
}

pub struct FakeDetector {
    journal: Journal,
    degree: Percentage,
}

impl FakeDetector {
    pub fn new(journal: &Journal, degree: u8) -> Self {
        Self {
            journal: journal.clone(),
            degree: Percentage::new(degree).unwrap(),
        }
    }

    pub fn detections(&self) -> usize {
        self.journal.count(|c| matches!(c, Call::Detect(_)))
    }
}

impl DirtDetector for FakeDetector {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Percentage {
        self.journal.record(Call::Detect(*batch));
        self.degree
    }
}

pub struct FakeEngine {
    journal: Journal,
    fault: Option<EngineError>,
}

impl FakeEngine {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fault: None,
        }
    }

    /// Engine that faults on every wash
    pub fn failing(journal: &Journal, fault: EngineError) -> Self {
        Self {
            journal: journal.clone(),
            fault: Some(fault),
        }
    }

    pub fn washes(&self) -> usize {
        self.journal.count(|c| matches!(c, Call::RunWashing(_)))
    }

    pub fn spins(&self) -> usize {
        self.journal.count(|c| matches!(c, Call::Spin))
    }
}

impl Engine for FakeEngine {
    fn run_washing(&mut self, minutes: u16) -> Result<(), EngineError> {
        self.journal.record(Call::RunWashing(minutes));
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    fn spin(&mut self) {
        self.journal.record(Call::Spin);
    }
}

pub struct FakePump {
    journal: Journal,
    fault: Option<PumpError>,
}

impl FakePump {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fault: None,
        }
    }

    /// Pump that faults on every pour
    pub fn failing(journal: &Journal, fault: PumpError) -> Self {
        Self {
            journal: journal.clone(),
            fault: Some(fault),
        }
    }

    pub fn pours(&self) -> usize {
        self.journal.count(|c| matches!(c, Call::Pour(_)))
    }

    pub fn releases(&self) -> usize {
        self.journal.count(|c| matches!(c, Call::Release))
    }
}

impl WaterPump for FakePump {
    fn pour(&mut self, weight_kg: f32) -> Result<(), PumpError> {
        self.journal.record(Call::Pour(weight_kg));
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    fn release(&mut self) {
        self.journal.record(Call::Release);
    }
}
