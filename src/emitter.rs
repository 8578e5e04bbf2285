//! # Emitter
//!
//! Turns business metrics into EMF log lines. Nothing here returns an error: metrics are a side
//! channel, a broken metric is logged and dropped.

use super::error::Result;
use super::factory::PayloadFactory;
use super::logger::MetricsLogger;
use super::metric::BusinessMetric;
use super::payload::Payload;
use tracing::debug;

const EMIT_METRIC_FAILED: &str = "Failed to emit EMF metric";
const EMIT_COLLECTION_FAILED: &str = "Failed to emit EMF metric collection";

/// Public entry point for business metrics
///
/// Use [Builder](super::Builder) to construct
///
/// # Example
/// ```
/// use business_metrics_emf::{Builder, Metric};
///
/// let emitter = Builder::new()
///     .cloudwatch_namespace("UserService/BusinessMetrics")
///     .build()
///     .unwrap();
///
/// emitter.emit(
///     &Metric::new("EndpointInvocations", 1)
///         .with_unit(metrics::Unit::Count)
///         .with_dimension("Endpoint", "Customer")
///         .with_dimension("Operation", "create"),
/// );
/// ```
pub struct BusinessMetricsEmitter {
    factory: PayloadFactory,
    logger: Box<dyn MetricsLogger>,
}

impl BusinessMetricsEmitter {
    pub fn new(factory: PayloadFactory, logger: impl MetricsLogger + 'static) -> Self {
        Self {
            factory,
            logger: Box::new(logger),
        }
    }

    pub fn factory(&self) -> &PayloadFactory {
        &self.factory
    }

    /// Write one EMF line for `metric`, or one error line if it cannot be built
    pub fn emit(&self, metric: &(impl BusinessMetric + ?Sized)) {
        self.write(self.factory.create_from_metric(metric), EMIT_METRIC_FAILED)
    }

    /// Write one EMF line holding every metric in `metrics`
    ///
    /// All metrics are reported under the first metric's dimensions. An empty slice writes
    /// nothing at all.
    pub fn emit_collection<M: BusinessMetric>(&self, metrics: &[M]) {
        if metrics.is_empty() {
            return;
        }
        self.write(self.factory.create_from_collection(metrics), EMIT_COLLECTION_FAILED)
    }

    /// Write an already built payload
    pub fn emit_payload(&self, payload: &Payload) {
        match payload.to_json_line() {
            Ok(line) => self.log_line(line),
            Err(err) => self.logger.error(EMIT_METRIC_FAILED, err.kind()),
        }
    }

    fn write(&self, payload: Result<Payload>, failure: &'static str) {
        match payload.and_then(|payload| payload.to_json_line()) {
            Ok(line) => self.log_line(line),
            Err(err) => self.logger.error(failure, err.kind()),
        }
    }

    fn log_line(&self, line: String) {
        if line.is_empty() {
            debug!("EMF payload has no metric values, skipping");
            return;
        }
        self.logger.info(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::collection::{DimensionValueCollection, MetricDefinitionCollection, MetricValueCollection};
    use crate::logger::tests::RecordingLogger;
    use crate::metric::Metric;
    use crate::payload::{AwsMetadata, CloudWatchMetricConfig};
    use crate::value::{DimensionValue, MetricNumber, NamespaceValue};
    use std::sync::Arc;

    fn emitter() -> (BusinessMetricsEmitter, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::default());
        let factory =
            PayloadFactory::new(NamespaceValue::new("UserService/BusinessMetrics"), FixedClock(1702425600000)).unwrap();
        (BusinessMetricsEmitter::new(factory, logger.clone()), logger)
    }

    /// Panics whenever the factory asks for anything
    struct Exploding;

    impl BusinessMetric for Exploding {
        fn name(&self) -> &str {
            panic!("factory should not be reached")
        }
        fn value(&self) -> MetricNumber {
            panic!("factory should not be reached")
        }
        fn unit(&self) -> &str {
            panic!("factory should not be reached")
        }
        fn dimensions(&self) -> Vec<DimensionValue> {
            panic!("factory should not be reached")
        }
    }

    #[test]
    fn emit_logs_one_line() {
        let (emitter, logger) = emitter();
        emitter.emit(&Metric::new("EndpointInvocations", 1).with_unit(metrics::Unit::Count));

        assert_eq!(
            logger.infos(),
            vec![r#"{"_aws":{"Timestamp":1702425600000,"CloudWatchMetrics":[{"Namespace":"UserService/BusinessMetrics","Dimensions":[[]],"Metrics":[{"Name":"EndpointInvocations","Unit":"Count"}]}]},"EndpointInvocations":1}"#]
        );
        assert!(logger.errors().is_empty());
    }

    #[test]
    fn emit_contains_failures() {
        let (emitter, logger) = emitter();
        emitter.emit(&Metric::new("Count", 1).with_dimension("Count", "secret-value"));

        assert!(logger.infos().is_empty());
        assert_eq!(logger.errors(), vec![(EMIT_METRIC_FAILED.to_string(), "key_collision")]);
    }

    #[test]
    fn emit_collection_contains_failures() {
        let (emitter, logger) = emitter();
        emitter.emit_collection(&[Metric::new("Latency", f64::INFINITY)]);

        assert!(logger.infos().is_empty());
        assert_eq!(logger.errors(), vec![(EMIT_COLLECTION_FAILED.to_string(), "invalid_metric_value")]);
    }

    #[test]
    fn empty_collection_is_a_no_op() {
        let (emitter, logger) = emitter();
        let metrics: [Exploding; 0] = [];
        emitter.emit_collection(&metrics);

        assert!(logger.infos().is_empty());
        assert!(logger.errors().is_empty());
    }

    #[test]
    fn payload_without_metrics_is_skipped() {
        let (emitter, logger) = emitter();
        let dimensions = DimensionValueCollection::new(vec![DimensionValue::new("Endpoint", "Customer")]).unwrap();
        let config = CloudWatchMetricConfig::new(
            NamespaceValue::new("UserService/BusinessMetrics"),
            dimensions.keys(),
            MetricDefinitionCollection::default(),
        );
        let payload = Payload::new(AwsMetadata::new(0, config), dimensions, MetricValueCollection::default()).unwrap();

        emitter.emit_payload(&payload);

        assert!(logger.infos().is_empty());
        assert!(logger.errors().is_empty());
    }
}
