use tessera_types::Amount;

/// Configuration for the governance engine.
///
/// Set once at construction; there is no runtime reconfiguration. All
/// durations are in timing units (block heights or logical clock ticks,
/// whatever the environment supplies as `now`).
#[derive(Debug, Clone)]
pub struct GovernanceConfig {
    /// How long a proposal accepts votes after creation
    pub voting_window: u64,
    /// How long after creation a proposal becomes executable
    pub execution_delay: u64,
    /// Minimum balance required to create a proposal
    pub min_balance_to_propose: Amount,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            voting_window: 45_000,
            execution_delay: 300,
            min_balance_to_propose: Amount::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GovernanceConfig::default();
        assert_eq!(config.voting_window, 45_000);
        assert_eq!(config.execution_delay, 300);
        assert_eq!(config.min_balance_to_propose, Amount::ONE);
        // The delay elapses well inside the voting window
        assert!(config.execution_delay < config.voting_window);
    }
}
