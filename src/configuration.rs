use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::risk::vulnerabilitymodel::{
    NamedFunctionJsonProp,
    VulnerabilityModel
};

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    vulnerability_model: Vec<NamedFunctionJsonProp>
}

/// Everything loaded from a configuration document:
///
/// ```json
/// {
///     "vulnerability_model": [
///         {"name": "RC/DMRF-D/LR", "function": {"0.1": [0.05, 0.3], "0.2": [0.2, 0.2]}}
///     ]
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    vulnerability_model: VulnerabilityModel
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { vulnerability_model: VulnerabilityModel::new() }
    }

    pub fn vulnerability_model(&self) -> &VulnerabilityModel {
        &self.vulnerability_model
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let config = Self::from_json_prop(json_prop)?;
        tracing::info!(
            path = %file_path.display(),
            functions = config.vulnerability_model.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Self::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ConfigurationError> {
        let mut vulnerability_model = VulnerabilityModel::new();
        vulnerability_model.insert_obj_from_json_vec(json_prop.vulnerability_model)?;
        Ok(Configuration { vulnerability_model })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let config = Configuration::from_json_str(
            r#"{"vulnerability_model": [{"name": "W/LR", "function": {"0.2": [0.4, 0.1], "0.1": [0.2, 0.1]}}]}"#,
        ).unwrap();

        let function = config.vulnerability_model().get("W/LR").unwrap();
        assert_eq!(&[0.1, 0.2], function.imls());
    }

    #[test]
    fn test_missing_model_is_empty() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert!(config.vulnerability_model().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = Configuration::from_reader("/nonexistent/quakeshapes/config.json");
        assert!(matches!(result, Err(ConfigurationError::Io(_))));
    }
}
