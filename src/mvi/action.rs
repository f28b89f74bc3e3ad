//! Base trait for actions in MVI architecture.

use std::fmt;

/// Lifecycle stage of an I/O-backed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Pending,
    Fulfilled,
    Rejected,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }
}

/// Stable, loggable identity of an action: `slice/op[/stage]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionKind {
    pub slice: &'static str,
    pub op: &'static str,
    pub stage: Option<Stage>,
}

impl ActionKind {
    pub const fn new(slice: &'static str, op: &'static str) -> Self {
        Self {
            slice,
            op,
            stage: None,
        }
    }

    pub const fn staged(slice: &'static str, op: &'static str, stage: Stage) -> Self {
        Self {
            slice,
            op,
            stage: Some(stage),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Some(stage) => write!(f, "{}/{}/{}", self.slice, self.op, stage.as_str()),
            None => write!(f, "{}/{}", self.slice, self.op),
        }
    }
}

/// Trait for action objects.
///
/// Actions represent:
/// - Phases of asynchronous operations (pending, fulfilled, rejected)
/// - Synchronous session events (sign-out, rehydration)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: fmt::Debug + Send + 'static {
    /// Identity used for logging and diagnostics.
    fn kind(&self) -> ActionKind;
}
