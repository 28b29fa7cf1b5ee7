//! Network messages - communication between App and Network layers

use crate::models::{City, FetchKind, Uf};

/// Commands sent from App layer to Network layer.
///
/// Every fetch carries a monotonically increasing request id; the App layer
/// uses it to recognize late responses for superseded selections.
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full list of federative units
    FetchStates { id: u64 },
    /// Fetch the municipalities of one federative unit
    FetchCities { id: u64, uf: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The state list arrived
    States {
        id: u64,
        ufs: Vec<Uf>,
        time_ms: u64,
    },
    /// The city list for one state arrived
    Cities {
        id: u64,
        cities: Vec<City>,
        time_ms: u64,
    },
    /// A fetch failed (transport error or malformed payload)
    Error {
        id: u64,
        kind: FetchKind,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID this response answers
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::States { id, .. } => *id,
            NetworkResponse::Cities { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    /// Which remote list this response belongs to
    pub fn kind(&self) -> FetchKind {
        match self {
            NetworkResponse::States { .. } => FetchKind::States,
            NetworkResponse::Cities { .. } => FetchKind::Cities,
            NetworkResponse::Error { kind, .. } => *kind,
        }
    }
}
