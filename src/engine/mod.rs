pub mod event;
pub mod simulation;
pub mod sink;

pub use event::CommunicationEvent;
pub use simulation::{BodyId, BodyPatch, SimulationEngine, StepError};
