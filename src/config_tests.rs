//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use std::io::Write;

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();
        assert_eq!(config.max_sets, 33);
        assert_eq!(config.price_per_set, 3000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_simulation_config_empty_toml() {
        let config: SimulationConfig = toml::from_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_simulation_config_partial_toml() {
        let toml_str = r#"
max_sets = 50
seed = 42
"#;
        let config: SimulationConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_sets, 50);
        assert_eq!(config.price_per_set, 3000);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_config_without_simulation_table() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.simulation.max_sets, 33);
    }

    #[test]
    fn test_config_validate_rejects_zero_max_sets() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.simulation.max_sets = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.simulation.price_per_set, 3000);
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[simulation]
max_sets = 10
price_per_set = 2500
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.simulation.max_sets, 10);
        assert_eq!(config.simulation.price_per_set, 2500);
    }

    #[test]
    fn test_config_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[simulation]\nmax_sets = 0").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
