pub mod generator;
pub mod loading;
pub mod scanner;

pub use generator::{MockOrderGenerator, OrderSource, SourceError};
pub use loading::{
    Advance, LoadingSimulation, LoadingStep, ProgressSnapshot, SimulationDriver, SimulationHandle,
};
pub use scanner::{InboxScanner, ScanJob};
