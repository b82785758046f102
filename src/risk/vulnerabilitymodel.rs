use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::risk::vulnerabilityfunction::{
    ImlEntries,
    VulnerabilityFunction
};

/// One entry of a serialized model: `{"name": ..., "function": {...}}`.
#[derive(Deserialize)]
pub struct NamedFunctionJsonProp {
    name: String,
    function: ImlEntries,
}

/// Vulnerability functions keyed by their identifier.
///
/// Functions are handed out as `Arc`s; the model is read-only once loaded
/// and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct VulnerabilityModel {
    map: HashMap<String, Arc<VulnerabilityFunction>>,
}

impl VulnerabilityModel {
    pub fn new() -> VulnerabilityModel {
        VulnerabilityModel { map: HashMap::new() }
    }

    pub fn insert(&mut self,
                  name: String,
                  function: VulnerabilityFunction) -> Result<(), ConfigurationError> {
        if self.map.contains_key(&name) {
            return Err(ConfigurationError::DuplicateName(name));
        }
        self.map.insert(name, Arc::new(function));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<VulnerabilityFunction>, ConfigurationError> {
        self.map.get(name).map_or_else(
            || Err(ConfigurationError::NameNotFound(name.to_owned())),
            |function| Ok(Arc::clone(function))
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Identifiers in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn insert_obj_from_json(&mut self,
                                prop: NamedFunctionJsonProp) -> Result<(), ConfigurationError> {
        let NamedFunctionJsonProp { name, function } = prop;
        let function = VulnerabilityFunction::from_dict(function).map_err(|source| {
            ConfigurationError::InvalidFunction { name: name.clone(), source }
        })?;
        tracing::debug!(name = %name, imls = function.len(), "loaded vulnerability function");
        self.insert(name, function)
    }

    pub fn insert_obj_from_json_vec(&mut self,
                                    props: Vec<NamedFunctionJsonProp>) -> Result<(), ConfigurationError> {
        for prop in props {
            self.insert_obj_from_json(prop)?;
        }
        Ok(())
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<VulnerabilityModel, ConfigurationError> {
        let props: Vec<NamedFunctionJsonProp> = serde_json::from_value(json_value)?;
        let mut model = VulnerabilityModel::new();
        model.insert_obj_from_json_vec(props)?;
        Ok(model)
    }
}
