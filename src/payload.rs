//! # Payload
//!
//! The embedded metrics document: `_aws` metadata plus flattened dimension and metric values.
//! Serialization lives in [emf](crate::emf).

use super::collection::{DimensionKeys, DimensionValueCollection, MetricDefinitionCollection, MetricValueCollection};
use super::emf::AWS_KEY;
use super::error::{Error, Result};
use super::validator::{DimensionValueValidator, MetricValueValidator, NamespaceValidator};
use super::value::{MetricDefinition, NamespaceValue};
use std::collections::HashSet;

/// The Embedded Metric Format supports a maximum of 30 dimensions per dimension set
pub const MAX_DIMENSIONS: usize = 30;

/// The Embedded Metric Format supports a maximum of 100 metrics per directive
pub const MAX_METRICS: usize = 100;

/// One `CloudWatchMetrics` directive: namespace, dimension set and metric definitions
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWatchMetricConfig {
    namespace: NamespaceValue,
    dimension_keys: DimensionKeys,
    metrics: MetricDefinitionCollection,
}

impl CloudWatchMetricConfig {
    pub fn new(namespace: NamespaceValue, dimension_keys: DimensionKeys, metrics: MetricDefinitionCollection) -> Self {
        Self {
            namespace,
            dimension_keys,
            metrics,
        }
    }

    /// New config with `definition` appended, `self` is left as is
    pub fn with_added_metric(&self, definition: MetricDefinition) -> Result<Self> {
        Ok(Self {
            namespace: self.namespace.clone(),
            dimension_keys: self.dimension_keys.clone(),
            metrics: self.metrics.add(definition)?,
        })
    }

    pub fn namespace(&self) -> &NamespaceValue {
        &self.namespace
    }

    pub fn dimension_keys(&self) -> &DimensionKeys {
        &self.dimension_keys
    }

    pub fn metrics(&self) -> &MetricDefinitionCollection {
        &self.metrics
    }
}

/// Contents of the `_aws` key
#[derive(Debug, Clone, PartialEq)]
pub struct AwsMetadata {
    timestamp: u64,
    metric_config: CloudWatchMetricConfig,
}

impl AwsMetadata {
    /// `timestamp` is epoch milliseconds
    pub fn new(timestamp: u64, metric_config: CloudWatchMetricConfig) -> Self {
        Self {
            timestamp,
            metric_config,
        }
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn metric_config(&self) -> &CloudWatchMetricConfig {
        &self.metric_config
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    aws_metadata: AwsMetadata,
    dimension_values: DimensionValueCollection,
    metric_values: MetricValueCollection,
}

impl Payload {
    /// Assemble a payload, running [PayloadValidator] over the result
    pub fn new(
        aws_metadata: AwsMetadata,
        dimension_values: DimensionValueCollection,
        metric_values: MetricValueCollection,
    ) -> Result<Self> {
        let payload = Self {
            aws_metadata,
            dimension_values,
            metric_values,
        };
        PayloadValidator::validate(&payload)?;
        Ok(payload)
    }

    pub fn aws_metadata(&self) -> &AwsMetadata {
        &self.aws_metadata
    }

    pub fn dimension_values(&self) -> &DimensionValueCollection {
        &self.dimension_values
    }

    pub fn metric_values(&self) -> &MetricValueCollection {
        &self.metric_values
    }

    /// Serialize to a single line of JSON, or an empty string when there are no metric values
    pub fn to_json_line(&self) -> Result<String> {
        if self.metric_values.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(self)?)
    }
}

/// Checks a whole payload: limits, per-value AWS rules, `_aws` metadata agreeing with the
/// top level values, then key collisions
pub struct PayloadValidator;

impl PayloadValidator {
    pub fn validate(payload: &Payload) -> Result<()> {
        let config = payload.aws_metadata().metric_config();
        let dimensions = payload.dimension_values();
        let metrics = payload.metric_values();

        if dimensions.len() > MAX_DIMENSIONS {
            return Err(Error::TooManyDimensions {
                count: dimensions.len(),
                max: MAX_DIMENSIONS,
            });
        }
        if metrics.len() > MAX_METRICS {
            return Err(Error::TooManyMetrics {
                count: metrics.len(),
                max: MAX_METRICS,
            });
        }

        NamespaceValidator::validate(config.namespace())?;
        for dimension in dimensions.iter() {
            DimensionValueValidator::validate(dimension)?;
        }
        for metric in metrics.iter() {
            MetricValueValidator::validate(metric)?;
        }

        if !config.dimension_keys().iter().eq(dimensions.iter().map(|d| d.key())) {
            return Err(Error::InconsistentMetadata("dimensions"));
        }
        if !config.metrics().iter().map(MetricDefinition::name).eq(metrics.names()) {
            return Err(Error::InconsistentMetadata("metrics"));
        }

        let dimension_keys: HashSet<&str> = dimensions.iter().map(|d| d.key()).collect();
        let shared: Vec<String> = metrics
            .names()
            .filter(|name| dimension_keys.contains(name))
            .map(str::to_string)
            .collect();
        if !shared.is_empty() {
            return Err(Error::KeyCollision { keys: shared });
        }

        let reserved = dimensions.iter().map(|d| d.key()).chain(metrics.names()).any(|key| key == AWS_KEY);
        if reserved {
            return Err(Error::KeyCollision {
                keys: vec![AWS_KEY.to_string()],
            });
        }

        Ok(())
    }
}
