use std::{fs, path::Path};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// simulator config
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    /// milliseconds a node is held in the pending state, defaults to 600
    pub pending_hold_ms: u64,
    /// milliseconds a node is held in the running state, defaults to 900
    pub running_hold_ms: u64,
    /// probability of the simulated true branch for condition nodes,
    /// range [0.0, 1.0], defaults to 0.7
    pub true_branch_weight: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            pending_hold_ms: 600,
            running_hold_ms: 900,
            true_branch_weight: 0.7,
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Self {
        let data = fs::read_to_string(path.as_ref()).expect(&format!("failed to load config file {:?}", path.as_ref()));

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Self {
        let config = toml::from_str::<Config>(toml_str).expect("failed to parse the toml str");
        config
    }
}

#[cfg(test)]
mod test {
    use crate::Config;

    #[test]
    fn test_config_deserialize() {
        let toml_str = r#"
        [simulator]
        pending_hold_ms = 100
        running_hold_ms = 250
        true_branch_weight = 0.5
        "#;
        let config = Config::load_from_str(toml_str);
        assert_eq!(config.simulator.pending_hold_ms, 100);
        assert_eq!(config.simulator.running_hold_ms, 250);
        assert_eq!(config.simulator.true_branch_weight, 0.5);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::load_from_str("");
        assert_eq!(config.simulator.pending_hold_ms, 600);
        assert_eq!(config.simulator.running_hold_ms, 900);
        assert_eq!(config.simulator.true_branch_weight, 0.7);
    }
}
