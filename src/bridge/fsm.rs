use crate::{Error, Result};
use tracing::{debug, info, warn};

// Bridge lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Loading,
    Ready,
    Terminated,
}

// Bridge lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeEvent {
    ModelLoaded,
    InputClosed,
    ProcessingFailed,
}

/// Lifecycle of one bridge session: `Loading` until the model is up, `Ready`
/// while serving, `Terminated` once input closes or a request fails.
/// `Terminated` is absorbing; a fresh process is the only way back.
pub struct BridgeStateMachine {
    state: BridgeState,
}

impl BridgeStateMachine {
    pub fn new() -> Self {
        Self {
            state: BridgeState::Loading,
        }
    }

    pub fn current_state(&self) -> BridgeState {
        self.state
    }

    pub fn transition(&mut self, event: BridgeEvent) -> Result<()> {
        let old_state = self.state;
        debug!(
            "🔄 Bridge processing event {:?} in state {:?}",
            event, old_state
        );

        let new_state = match (self.state, event) {
            (BridgeState::Loading, BridgeEvent::ModelLoaded) => BridgeState::Ready,
            (BridgeState::Ready, BridgeEvent::InputClosed) => BridgeState::Terminated,
            (BridgeState::Ready, BridgeEvent::ProcessingFailed) => BridgeState::Terminated,
            _ => {
                warn!(
                    "❌ Invalid bridge transition from {:?} with event {:?}",
                    self.state, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.state),
                    requested: format!("{:?}", event),
                });
            }
        };

        info!(
            "Bridge state transition: {:?} -> {:?} (event: {:?})",
            old_state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, BridgeState::Terminated)
    }
}

impl Default for BridgeStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
