//! State machine trait for lifecycle enums.
//!
//! Gives lifecycle enums (such as the roster session phase) one way to
//! describe their legal moves and to perform a checked move.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal transitions and get a checked
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SessionPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Closed => vec![Opened],
///             Opened => vec![Interacting, Confirmed, Cancelled],
///             // ... etc
///         }
///     }
/// }
///
/// let next = phase.transition_to(SessionPhase::Interacting)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
