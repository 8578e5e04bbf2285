//! # Factory
//!
//! Builds validated [Payload]s from [BusinessMetric]s. The factory is strict: every failure is
//! returned to the caller, containment is the [emitter](crate::BusinessMetricsEmitter)'s job.

use super::clock::TimestampProvider;
use super::collection::{DimensionValueCollection, MetricDefinitionCollection, MetricValueCollection};
use super::error::{Error, Result};
use super::metric::BusinessMetric;
use super::payload::{AwsMetadata, CloudWatchMetricConfig, Payload};
use super::validator::{DimensionValueValidator, MetricValueValidator, NamespaceValidator};
use super::value::{DimensionValue, MetricDefinition, MetricValue, NamespaceValue};

pub struct PayloadFactory {
    namespace: NamespaceValue,
    default_dimensions: Vec<DimensionValue>,
    clock: Box<dyn TimestampProvider>,
}

impl PayloadFactory {
    /// The namespace is validated here, once, rather than on every payload
    pub fn new(namespace: NamespaceValue, clock: impl TimestampProvider + 'static) -> Result<Self> {
        NamespaceValidator::validate(&namespace)?;
        Ok(Self {
            namespace,
            default_dimensions: Vec::new(),
            clock: Box::new(clock),
        })
    }

    /// Dimensions placed ahead of each metric's own dimensions in every payload
    pub fn with_default_dimensions(self, default_dimensions: Vec<DimensionValue>) -> Self {
        Self {
            default_dimensions,
            ..self
        }
    }

    pub fn namespace(&self) -> &NamespaceValue {
        &self.namespace
    }

    pub fn create_from_metric(&self, metric: &(impl BusinessMetric + ?Sized)) -> Result<Payload> {
        let dimensions = self.dimensions_for(metric)?;
        let (value, definition) = Self::metric_parts(metric)?;

        let config = CloudWatchMetricConfig::new(
            self.namespace.clone(),
            dimensions.keys(),
            MetricDefinitionCollection::new(vec![definition])?,
        );
        Payload::new(
            AwsMetadata::new(self.clock.current_timestamp_millis(), config),
            dimensions,
            MetricValueCollection::new(vec![value])?,
        )
    }

    /// One payload for several metrics, all reported under the *first* metric's dimensions
    ///
    /// The remaining metrics' dimensions are not consulted; callers must only batch metrics
    /// that share a dimension set.
    pub fn create_from_collection<M: BusinessMetric>(&self, metrics: &[M]) -> Result<Payload> {
        let (first, rest) = metrics.split_first().ok_or(Error::EmptyCollection)?;

        let dimensions = self.dimensions_for(first)?;
        let (value, definition) = Self::metric_parts(first)?;
        let mut config = CloudWatchMetricConfig::new(
            self.namespace.clone(),
            dimensions.keys(),
            MetricDefinitionCollection::new(vec![definition])?,
        );
        let mut values = MetricValueCollection::new(vec![value])?;

        for metric in rest {
            let (value, definition) = Self::metric_parts(metric)?;
            values = values.add(value)?;
            config = config.with_added_metric(definition)?;
        }

        Payload::new(
            AwsMetadata::new(self.clock.current_timestamp_millis(), config),
            dimensions,
            values,
        )
    }

    /// Default dimensions followed by the metric's own, each checked against the AWS rules
    fn dimensions_for(&self, metric: &(impl BusinessMetric + ?Sized)) -> Result<DimensionValueCollection> {
        let dimensions: Vec<DimensionValue> = self
            .default_dimensions
            .iter()
            .cloned()
            .chain(metric.dimensions())
            .collect();
        for dimension in &dimensions {
            DimensionValueValidator::validate(dimension)?;
        }
        DimensionValueCollection::new(dimensions)
    }

    fn metric_parts(metric: &(impl BusinessMetric + ?Sized)) -> Result<(MetricValue, MetricDefinition)> {
        let value = MetricValue::new(metric.name().to_string(), metric.value());
        MetricValueValidator::validate(&value)?;
        let definition = MetricDefinition::new(metric.name().to_string(), metric.unit().to_string());
        Ok((value, definition))
    }
}
