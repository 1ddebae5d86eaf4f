pub mod flight;
pub mod recall;

pub use flight::FlightController;
pub use recall::RecallController;

use crate::disc::DiscState;

/// Returned by a controller's per-frame update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerStatus {
    Continue,
    /// The controller reached its exit condition and must be removed this frame.
    Detach,
}

/// The per-frame controller currently driving the disc. Holding it in one enum means
/// flight and recall can never run together.
#[derive(Clone, Debug)]
pub enum DiscController {
    Idle,
    Flight(FlightController),
    Recall(RecallController),
}

impl DiscController {
    pub fn state(&self) -> DiscState {
        match self {
            DiscController::Idle => DiscState::Idle,
            DiscController::Flight(_) => DiscState::Flying,
            DiscController::Recall(_) => DiscState::Recalling,
        }
    }

    pub fn is_flight_attached(&self) -> bool {
        matches!(self, DiscController::Flight(_))
    }

    pub fn is_recall_attached(&self) -> bool {
        matches!(self, DiscController::Recall(_))
    }
}
