use super::clock::{FixedClock, SystemClock, TimestampProvider};
use super::emitter::BusinessMetricsEmitter;
use super::error::{Error, Result};
use super::factory::PayloadFactory;
use super::logger::{MetricsLogger, StdoutLogger};
use super::value::{DimensionValue, NamespaceValue};
use metrics::SharedString;

/// Builder for the [BusinessMetricsEmitter]
///
/// # Example
/// ```
///  let emitter = business_metrics_emf::Builder::new()
///      .cloudwatch_namespace("UserService/BusinessMetrics")
///      .with_dimension("Service", "UserService")
///      .build()
///      .unwrap();
/// ```
pub struct Builder {
    cloudwatch_namespace: Option<SharedString>,
    default_dimensions: Vec<DimensionValue>,
    clock: Box<dyn TimestampProvider>,
    logger: Box<dyn MetricsLogger>,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            cloudwatch_namespace: None,
            default_dimensions: Vec::new(),
            clock: Box::new(SystemClock),
            logger: Box::new(StdoutLogger),
        }
    }

    /// Sets the CloudWatch namespace for all metrics
    /// * Must be set or build() will return Err(Error::MissingNamespace)
    /// * Validated once, in build()
    pub fn cloudwatch_namespace(self, namespace: impl Into<SharedString>) -> Self {
        Self {
            cloudwatch_namespace: Some(namespace.into()),
            ..self
        }
    }

    /// Adds a static dimension (name, value), that will be sent with each metric.
    /// * This method can be called multiple times with distinct names
    /// * Dimension names may not overlap with a metric's own dimensions or any metric name
    /// * Payloads can have no more than 30 dimensions in total
    pub fn with_dimension(mut self, name: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        self.default_dimensions.push(DimensionValue::new(name, value));
        self
    }

    /// Stamps every payload with a fixed timestamp, mostly useful for tests
    pub fn with_timestamp(self, timestamp: u64) -> Self {
        self.with_clock(FixedClock(timestamp))
    }

    /// Replaces the system clock as the source of `_aws.Timestamp`
    pub fn with_clock(self, clock: impl TimestampProvider + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            ..self
        }
    }

    /// Replaces stdout as the destination for EMF lines
    pub fn with_logger(self, logger: impl MetricsLogger + 'static) -> Self {
        Self {
            logger: Box::new(logger),
            ..self
        }
    }

    /// Validate the namespace and build the emitter
    pub fn build(self) -> Result<BusinessMetricsEmitter> {
        let namespace = self.cloudwatch_namespace.ok_or(Error::MissingNamespace)?;
        let factory = PayloadFactory::new(NamespaceValue::new(namespace), self.clock)?
            .with_default_dimensions(self.default_dimensions);
        Ok(BusinessMetricsEmitter::new(factory, self.logger))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
