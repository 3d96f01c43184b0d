use std::{error::Error, fmt, io};

use hifitime::Epoch;

use crate::engine::event::CommunicationEvent;
use crate::engine::sink::EventSink;
use crate::models::body::CelestialBody;
use crate::models::ground_station::GroundStation;
use crate::models::satellite::Satellite;

#[derive(Debug)]
pub enum StepError {
    ClockError(hifitime::errors::Errors),
    SinkError(io::Error),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::ClockError(e) => write!(f, "System clock error: {}", e),
            StepError::SinkError(e) => write!(f, "Event sink write error: {}", e),
        }
    }
}

impl Error for StepError {}

impl From<hifitime::errors::Errors> for StepError {
    fn from(err: hifitime::errors::Errors) -> Self {
        StepError::ClockError(err)
    }
}

impl From<io::Error> for StepError {
    fn from(err: io::Error) -> Self {
        StepError::SinkError(err)
    }
}

/// Stable handle to an entity, handed to editor collaborators instead of
/// a raw reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyId {
    Satellite(usize),
    GroundStation(usize),
}

/// Per-field edit submitted by an editor collaborator. Fields arrive as
/// raw text; a field that does not parse keeps its prior value, the rest
/// of the patch still applies.
#[derive(Debug, Clone, Default)]
pub struct BodyPatch {
    pub name: Option<String>,
    pub mass: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub velocity_x: Option<String>,
    pub velocity_y: Option<String>,
    pub detection_range: Option<String>,
}

/// Owns the satellite and ground-station collections and advances the
/// simulation one synchronous step at a time. Insertion order is
/// preserved for deterministic iteration.
#[derive(Debug, Default)]
pub struct SimulationEngine {
    satellites: Vec<Satellite>,
    ground_stations: Vec<GroundStation>,
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_satellite(&mut self, satellite: Satellite) {
        self.satellites.push(satellite);
    }

    pub fn add_ground_station(&mut self, station: GroundStation) {
        self.ground_stations.push(station);
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn ground_stations(&self) -> &[GroundStation] {
        &self.ground_stations
    }

    /// Drops the current entities and installs the given ones in their
    /// place. Used by snapshot loading, which parses a complete file
    /// before calling this.
    pub fn replace_entities(
        &mut self,
        satellites: Vec<Satellite>,
        ground_stations: Vec<GroundStation>,
    ) {
        self.satellites = satellites;
        self.ground_stations = ground_stations;
    }

    /// Advances every satellite by `dt`, then evaluates every
    /// station/satellite pair against the post-step positions and appends
    /// the detections to `sink` as one batch. Returns the batch. All
    /// events of a step share one timestamp, so stamps never decrease
    /// across steps.
    pub fn step<S: EventSink>(
        &mut self,
        dt: f64,
        sink: &mut S,
    ) -> Result<Vec<CommunicationEvent>, StepError> {
        for satellite in &mut self.satellites {
            satellite.advance(dt);
        }

        let stamp = Epoch::now()?;
        let mut events = Vec::new();
        for satellite in &self.satellites {
            for station in &self.ground_stations {
                if station.can_detect(satellite) {
                    events.push(CommunicationEvent {
                        timestamp: stamp,
                        satellite: satellite.body.name.clone(),
                        station: station.body.name.clone(),
                    });
                }
            }
        }

        sink.append(&events)?;
        Ok(events)
    }

    /// Looks an entity up by name (satellites first, then stations, in
    /// insertion order). Names are unique by caller convention.
    pub fn body_id_by_name(&self, name: &str) -> Option<BodyId> {
        if let Some(index) = self.satellites.iter().position(|s| s.body.name == name) {
            return Some(BodyId::Satellite(index));
        }
        self.ground_stations
            .iter()
            .position(|g| g.body.name == name)
            .map(BodyId::GroundStation)
    }

    pub fn body(&self, id: BodyId) -> Option<&CelestialBody> {
        match id {
            BodyId::Satellite(index) => self.satellites.get(index).map(|s| &s.body),
            BodyId::GroundStation(index) => self.ground_stations.get(index).map(|g| &g.body),
        }
    }

    /// Applies `patch` to the entity behind `id` between steps. Returns
    /// false when the id no longer resolves. Kind-specific fields that do
    /// not apply to the entity are ignored.
    pub fn apply_patch(&mut self, id: BodyId, patch: &BodyPatch) -> bool {
        match id {
            BodyId::Satellite(index) => match self.satellites.get_mut(index) {
                Some(satellite) => {
                    apply_common_fields(&mut satellite.body, patch);
                    apply_numeric_field(&mut satellite.velocity.x, &patch.velocity_x);
                    apply_numeric_field(&mut satellite.velocity.y, &patch.velocity_y);
                    true
                }
                None => false,
            },
            BodyId::GroundStation(index) => match self.ground_stations.get_mut(index) {
                Some(station) => {
                    apply_common_fields(&mut station.body, patch);
                    apply_numeric_field(&mut station.detection_range, &patch.detection_range);
                    true
                }
                None => false,
            },
        }
    }
}

fn apply_common_fields(body: &mut CelestialBody, patch: &BodyPatch) {
    if let Some(name) = &patch.name {
        body.name = name.clone();
    }
    apply_numeric_field(&mut body.mass, &patch.mass);
    apply_numeric_field(&mut body.position.x, &patch.x);
    apply_numeric_field(&mut body.position.y, &patch.y);
}

// Unparseable input keeps the prior value, matching the editor contract.
fn apply_numeric_field(target: &mut f64, raw: &Option<String>) {
    if let Some(raw) = raw {
        if let Ok(value) = raw.trim().parse() {
            *target = value;
        }
    }
}
