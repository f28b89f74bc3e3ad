//! Three-phase modelling of asynchronous operations.

use super::action::Stage;

/// One phase of an asynchronous request.
///
/// `arg` is the request argument and travels with every phase so a
/// reducer can correlate the outcome with the request that started it.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<A, P> {
    Pending { arg: A },
    Fulfilled { arg: A, payload: P },
    Rejected { arg: A, error: String },
}

impl<A, P> Phase<A, P> {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Pending { .. } => Stage::Pending,
            Self::Fulfilled { .. } => Stage::Fulfilled,
            Self::Rejected { .. } => Stage::Rejected,
        }
    }

    pub fn arg(&self) -> &A {
        match self {
            Self::Pending { arg } | Self::Fulfilled { arg, .. } | Self::Rejected { arg, .. } => {
                arg
            }
        }
    }
}

impl<P> Phase<(), P> {
    pub fn pending() -> Self {
        Self::Pending { arg: () }
    }

    pub fn fulfilled(payload: P) -> Self {
        Self::Fulfilled { arg: (), payload }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self::Rejected {
            arg: (),
            error: error.into(),
        }
    }
}

/// Loading and error bookkeeping carried by every slice.
///
/// Overlapping requests on one slice are counted so that `is_loading`
/// stays true until the last of them settles, whichever order they
/// settle in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStatus {
    pub is_loading: bool,
    pub error: Option<String>,
    in_flight: u32,
}

impl LoadStatus {
    /// Apply the bookkeeping for `stage`.
    pub fn apply(self, stage: Stage, error: Option<&str>) -> Self {
        match stage {
            Stage::Pending => self.begin(),
            Stage::Fulfilled => self.succeed(),
            Stage::Rejected => self.fail(error.unwrap_or_default()),
        }
    }

    pub fn begin(self) -> Self {
        let in_flight = self.in_flight.saturating_add(1);
        Self {
            is_loading: true,
            error: None,
            in_flight,
        }
    }

    /// The latest outcome wins, so a success clears an earlier failure.
    pub fn succeed(self) -> Self {
        let in_flight = self.in_flight.saturating_sub(1);
        Self {
            is_loading: in_flight > 0,
            error: None,
            in_flight,
        }
    }

    pub fn fail(self, message: &str) -> Self {
        let in_flight = self.in_flight.saturating_sub(1);
        Self {
            is_loading: in_flight > 0,
            error: Some(message.to_string()),
            in_flight,
        }
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }
}
