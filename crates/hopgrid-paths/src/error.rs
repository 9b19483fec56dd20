use std::fmt;

use hopgrid_core::Point;

/// Which end of a search a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfBounds,
    Blocked,
}

/// Errors returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal is outside the grid or on a blocked cell.
    InvalidCoordinate {
        endpoint: Endpoint,
        point: Point,
        reason: InvalidReason,
    },
    /// The frontier ran dry before the goal was reached.
    NoPathFound,
    /// The configured expansion budget ran out.
    ExpansionLimit { expanded: usize },
}

impl SearchError {
    pub(crate) fn out_of_bounds(endpoint: Endpoint, point: Point) -> Self {
        Self::InvalidCoordinate {
            endpoint,
            point,
            reason: InvalidReason::OutOfBounds,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate {
                endpoint,
                point,
                reason: InvalidReason::OutOfBounds,
            } => write!(f, "{endpoint} {point} is out of bounds"),
            Self::InvalidCoordinate {
                endpoint,
                point,
                reason: InvalidReason::Blocked,
            } => write!(f, "{endpoint} {point} is on a blocked cell"),
            Self::NoPathFound => f.write_str("no path found"),
            Self::ExpansionLimit { expanded } => {
                write!(f, "search stopped after expanding {expanded} nodes")
            }
        }
    }
}

impl std::error::Error for SearchError {}
