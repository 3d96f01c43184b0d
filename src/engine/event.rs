use std::fmt;

use hifitime::Epoch;

/// One satellite/station contact recorded during a simulation step.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunicationEvent {
    pub timestamp: Epoch,
    pub satellite: String,
    pub station: String,
}

impl fmt::Display for CommunicationEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "At time {}, {} connects with {}",
            self.timestamp, self.satellite, self.station
        )
    }
}
