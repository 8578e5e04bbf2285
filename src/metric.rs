//! # Metric
//!
//! What the payload factory needs from a business metric, and a general purpose implementation

use super::emf;
use super::value::{DimensionValue, MetricDefinition, MetricNumber};
use metrics::SharedString;

/// A business event worth counting, e.g. `UsersRegistered`
///
/// Concrete metric types decide how they store their data, the factory only relies on these
/// accessors.
pub trait BusinessMetric {
    fn name(&self) -> &str;
    fn value(&self) -> MetricNumber;
    /// CloudWatch unit, `"None"` for unitless metrics
    fn unit(&self) -> &str;
    fn dimensions(&self) -> Vec<DimensionValue>;
}

impl<T: BusinessMetric + ?Sized> BusinessMetric for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value(&self) -> MetricNumber {
        (**self).value()
    }

    fn unit(&self) -> &str {
        (**self).unit()
    }

    fn dimensions(&self) -> Vec<DimensionValue> {
        (**self).dimensions()
    }
}

impl<T: BusinessMetric + ?Sized> BusinessMetric for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn value(&self) -> MetricNumber {
        (**self).value()
    }

    fn unit(&self) -> &str {
        (**self).unit()
    }

    fn dimensions(&self) -> Vec<DimensionValue> {
        (**self).dimensions()
    }
}

/// Metric assembled at the call site
///
/// # Example
/// ```
/// use business_metrics_emf::Metric;
///
/// let metric = Metric::new("EndpointInvocations", 1)
///     .with_unit(metrics::Unit::Count)
///     .with_dimension("Endpoint", "Customer")
///     .with_dimension("Operation", "create");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    name: SharedString,
    value: MetricNumber,
    unit: SharedString,
    dimensions: Vec<DimensionValue>,
}

impl Metric {
    pub fn new(name: impl Into<SharedString>, value: impl Into<MetricNumber>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            unit: SharedString::from(MetricDefinition::NO_UNIT),
            dimensions: Vec::new(),
        }
    }

    pub fn with_unit(self, unit: metrics::Unit) -> Self {
        Self {
            unit: SharedString::from(emf::unit_to_str(&unit)),
            ..self
        }
    }

    /// Set a unit string directly, for CloudWatch units [metrics::Unit] lacks (e.g. `Bytes/Second`)
    pub fn with_unit_name(self, unit: impl Into<SharedString>) -> Self {
        Self {
            unit: unit.into(),
            ..self
        }
    }

    /// Adds a dimension, order is kept in the emitted dimension set
    pub fn with_dimension(mut self, key: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        self.dimensions.push(DimensionValue::new(key, value));
        self
    }
}

impl BusinessMetric for Metric {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> MetricNumber {
        self.value
    }

    fn unit(&self) -> &str {
        &self.unit
    }

    fn dimensions(&self) -> Vec<DimensionValue> {
        self.dimensions.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_unit() {
        let metric = Metric::new("UsersRegistered", 1);
        assert_eq!(metric.unit(), "None");
        assert!(metric.dimensions().is_empty());
    }

    #[test]
    fn units() {
        assert_eq!(Metric::new("Latency", 3.5).with_unit(metrics::Unit::Milliseconds).unit(), "Milliseconds");
        assert_eq!(Metric::new("Throughput", 10).with_unit_name("Bytes/Second").unit(), "Bytes/Second");
    }

    #[test]
    fn trait_objects() {
        let metric = Metric::new("EndpointInvocations", 1).with_dimension("Endpoint", "Customer");
        let boxed: Box<dyn BusinessMetric> = Box::new(metric.clone());
        let borrowed: &dyn BusinessMetric = &metric;

        assert_eq!(boxed.name(), "EndpointInvocations");
        assert_eq!(borrowed.value(), MetricNumber::Int(1));
        assert_eq!(boxed.dimensions(), vec![DimensionValue::new("Endpoint", "Customer")]);
    }
}
