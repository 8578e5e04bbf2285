pub use {
    builder::Builder,
    clock::{FixedClock, SystemClock, TimestampProvider},
    collection::{DimensionKeys, DimensionValueCollection, MetricDefinitionCollection, MetricValueCollection},
    emitter::BusinessMetricsEmitter,
    error::{Error, Result, Violation},
    factory::PayloadFactory,
    logger::{MetricsLogger, StdoutLogger, TracingLogger},
    metric::{BusinessMetric, Metric},
    payload::{AwsMetadata, CloudWatchMetricConfig, Payload, PayloadValidator, MAX_DIMENSIONS, MAX_METRICS},
    validator::{DimensionValueValidator, MetricValueValidator, NamespaceValidator},
    value::{DimensionValue, MetricDefinition, MetricNumber, MetricValue, NamespaceValue},
};

mod builder;
mod clock;
mod collection;
mod emf;
mod emitter;
mod error;
mod factory;
mod logger;
mod metric;
mod payload;
mod validator;
mod value;
#[cfg(test)]
mod test;
