//! # Value
//!
//! Scalar value objects that make up an embedded metrics payload. None of these validate
//! themselves, see [validator](crate::validator) for the AWS rules.

use super::emf;
use metrics::SharedString;
use serde::Serialize;

/// A single CloudWatch dimension, e.g. `Endpoint=Customer`
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionValue {
    key: SharedString,
    value: SharedString,
}

impl DimensionValue {
    pub fn new(key: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Numeric value of a metric, integers are kept integral on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricNumber {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl MetricNumber {
    pub fn is_finite(&self) -> bool {
        match self {
            MetricNumber::Float(f) => f.is_finite(),
            _ => true,
        }
    }
}

macro_rules! metric_number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for MetricNumber {
                fn from(value: $source) -> Self {
                    MetricNumber::$variant(value as $target)
                }
            }
        )*
    };
}

metric_number_from!(Int as i64: i8, i16, i32, i64);
metric_number_from!(UInt as u64: u8, u16, u32, u64, usize);
metric_number_from!(Float as f64: f32, f64);

impl From<MetricNumber> for serde_json::Value {
    fn from(value: MetricNumber) -> Self {
        match value {
            MetricNumber::Int(i) => i.into(),
            MetricNumber::UInt(u) => u.into(),
            MetricNumber::Float(f) => f.into(),
        }
    }
}

/// The measured quantity for a metric, e.g. `EndpointInvocations=1`
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    name: SharedString,
    value: MetricNumber,
}

impl MetricValue {
    pub fn new(name: impl Into<SharedString>, value: impl Into<MetricNumber>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> MetricNumber {
        self.value
    }
}

/// How CloudWatch interprets a metric: its name and unit
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDefinition {
    name: SharedString,
    unit: SharedString,
}

impl MetricDefinition {
    /// CloudWatch's unit for unitless metrics
    pub const NO_UNIT: &'static str = "None";

    pub fn new(name: impl Into<SharedString>, unit: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
        }
    }

    /// Define a metric from a [metrics::Unit]
    pub fn from_unit(name: impl Into<SharedString>, unit: metrics::Unit) -> Self {
        Self::new(name, emf::unit_to_str(&unit))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// CloudWatch namespace, e.g. `UserService/BusinessMetrics`
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceValue {
    value: SharedString,
}

impl NamespaceValue {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
