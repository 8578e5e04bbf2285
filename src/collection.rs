//! # Collection
//!
//! Immutable, ordered groupings of value objects. Uniqueness of keys and names is checked
//! when a collection is built and again on every `add`, which returns a new collection and
//! leaves the receiver untouched.

use super::error::{Error, Result};
use super::value::{DimensionValue, MetricDefinition, MetricValue};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Every key that appears more than once, each reported once in order of first repeat
pub(crate) fn duplicate_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for key in keys {
        if !seen.insert(key) && !duplicates.iter().any(|d| d == key) {
            duplicates.push(key.to_string());
        }
    }
    duplicates
}

fn ensure_unique<'a>(keys: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let keys = duplicate_keys(keys);
    match keys.is_empty() {
        true => Ok(()),
        false => Err(Error::KeyCollision { keys }),
    }
}

/// Ordered dimension key names, the single dimension set of a payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionKeys(Vec<String>);

impl DimensionKeys {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionValueCollection {
    dimensions: Vec<DimensionValue>,
}

impl DimensionValueCollection {
    /// Fails with [Error::KeyCollision] naming every repeated key
    pub fn new(dimensions: Vec<DimensionValue>) -> Result<Self> {
        ensure_unique(dimensions.iter().map(DimensionValue::key))?;
        Ok(Self { dimensions })
    }

    pub fn add(&self, dimension: DimensionValue) -> Result<Self> {
        let mut dimensions = self.dimensions.clone();
        dimensions.push(dimension);
        Self::new(dimensions)
    }

    pub fn keys(&self) -> DimensionKeys {
        DimensionKeys(self.dimensions.iter().map(|d| d.key().to_string()).collect())
    }

    /// Flatten into `key => value`, in insertion order; these are the payload's top level
    /// dimension entries
    pub fn to_map(&self) -> Map<String, Value> {
        self.dimensions
            .iter()
            .map(|d| (d.key().to_string(), Value::from(d.value())))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionValue> {
        self.dimensions.iter()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricValueCollection {
    metrics: Vec<MetricValue>,
}

impl MetricValueCollection {
    /// Fails with [Error::KeyCollision] naming every repeated metric name
    pub fn new(metrics: Vec<MetricValue>) -> Result<Self> {
        ensure_unique(metrics.iter().map(MetricValue::name))?;
        Ok(Self { metrics })
    }

    pub fn add(&self, metric: MetricValue) -> Result<Self> {
        let mut metrics = self.metrics.clone();
        metrics.push(metric);
        Self::new(metrics)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(MetricValue::name)
    }

    /// Flatten into `name => value`, in insertion order; these are the payload's top level
    /// metric entries
    pub fn to_map(&self) -> Map<String, Value> {
        self.metrics
            .iter()
            .map(|m| (m.name().to_string(), Value::from(m.value())))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricValue> {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricDefinitionCollection {
    definitions: Vec<MetricDefinition>,
}

impl MetricDefinitionCollection {
    pub fn new(definitions: Vec<MetricDefinition>) -> Result<Self> {
        ensure_unique(definitions.iter().map(MetricDefinition::name))?;
        Ok(Self { definitions })
    }

    pub fn add(&self, definition: MetricDefinition) -> Result<Self> {
        let mut definitions = self.definitions.clone();
        definitions.push(definition);
        Self::new(definitions)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
