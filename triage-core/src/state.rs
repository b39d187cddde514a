//! Display state for the dashboard page.
//!
//! The page is always in exactly one of three modes. [`DashboardState::apply`]
//! is a pure reducer: feeding the outcome of a load protocol run into the
//! current state yields the next state, with no rendering runtime or I/O
//! involved.

use crate::models::{Alert, TriageRule};

/// Result of one complete load protocol run (both fetches settled).
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Both fetches succeeded.
    Loaded {
        alerts: Vec<Alert>,
        rules: Vec<TriageRule>,
    },
    /// At least one fetch failed; carries the first-observed failure's
    /// message. Any data the other fetch produced has been discarded.
    Failed(String),
}

/// The three mutually exclusive display modes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    /// Initial mode: fetches are in flight, nothing has settled.
    #[default]
    Loading,
    /// Either fetch failed. No partial data is retained.
    Failed(String),
    /// Both collections are in hand.
    Loaded {
        alerts: Vec<Alert>,
        rules: Vec<TriageRule>,
    },
}

impl DashboardState {
    /// Pure reducer. Only a loading page reacts to an outcome; a settled
    /// page ignores late results. Restarting the protocol means starting
    /// over from a fresh `Loading`.
    pub fn apply(self, outcome: LoadOutcome) -> DashboardState {
        match self {
            DashboardState::Loading => match outcome {
                LoadOutcome::Loaded { alerts, rules } => DashboardState::Loaded { alerts, rules },
                LoadOutcome::Failed(message) => DashboardState::Failed(message),
            },
            settled => settled,
        }
    }

    /// True until the load protocol has settled.
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> LoadOutcome {
        LoadOutcome::Loaded {
            alerts: vec![],
            rules: vec![],
        }
    }

    #[test]
    fn test_loading_moves_to_loaded() {
        let next = DashboardState::Loading.apply(sample_outcome());
        assert!(matches!(next, DashboardState::Loaded { .. }));
    }

    #[test]
    fn test_loading_moves_to_failed() {
        let next = DashboardState::Loading.apply(LoadOutcome::Failed("API Error".into()));
        assert_eq!(next, DashboardState::Failed("API Error".into()));
    }

    #[test]
    fn test_settled_state_ignores_late_outcomes() {
        let failed = DashboardState::Failed("Failed to fetch alerts".into());
        let next = failed.clone().apply(sample_outcome());
        assert_eq!(next, failed);

        let loaded = DashboardState::Loading.apply(sample_outcome());
        let still_loaded = loaded.clone().apply(LoadOutcome::Failed("late".into()));
        assert_eq!(still_loaded, loaded);
    }

    #[test]
    fn test_initial_state_is_loading() {
        assert!(DashboardState::default().is_loading());
    }
}
