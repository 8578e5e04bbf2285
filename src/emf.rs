//! # EMF
//!
//! Helpers for serializing CloudWatch Embedded Metrics via serde_json
//!
//! <https://docs.aws.amazon.com/AmazonCloudWatch/latest/monitoring/CloudWatch_Embedded_Metric_Format_Specification.html>

use super::payload::{AwsMetadata, Payload};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// CloudWatch's own top level key, never available to dimensions or metrics
pub const AWS_KEY: &str = "_aws";

#[derive(serde::Serialize)]
pub struct EmbeddedMetricsAws<'a> {
    #[serde(rename = "Timestamp")]
    pub timestamp: u64,
    // A payload never carries more than one namespace
    #[serde(rename = "CloudWatchMetrics")]
    pub cloudwatch_metrics: [EmbeddedNamespace<'a>; 1],
}

#[derive(serde::Serialize)]
pub struct EmbeddedNamespace<'a> {
    #[serde(rename = "Namespace")]
    pub namespace: &'a str,
    // A single dimension set with all dimensions
    #[serde(rename = "Dimensions")]
    pub dimensions: [Vec<&'a str>; 1],
    #[serde(rename = "Metrics")]
    pub metrics: Vec<EmbeddedMetric<'a>>,
}

#[derive(serde::Serialize)]
pub struct EmbeddedMetric<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Unit")]
    pub unit: &'a str,
}

impl<'a> From<&'a AwsMetadata> for EmbeddedMetricsAws<'a> {
    fn from(metadata: &'a AwsMetadata) -> Self {
        let config = metadata.metric_config();
        EmbeddedMetricsAws {
            timestamp: metadata.timestamp(),
            cloudwatch_metrics: [EmbeddedNamespace {
                namespace: config.namespace().value(),
                dimensions: [config.dimension_keys().iter().collect()],
                metrics: config
                    .metrics()
                    .iter()
                    .map(|definition| EmbeddedMetric {
                        name: definition.name(),
                        unit: definition.unit(),
                    })
                    .collect(),
            }],
        }
    }
}

/// `_aws` first, then dimensions, then metric values, each in insertion order
impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer
            .serialize_map(Some(1 + self.dimension_values().len() + self.metric_values().len()))?;
        map.serialize_entry(AWS_KEY, &EmbeddedMetricsAws::from(self.aws_metadata()))?;
        let dimensions = self.dimension_values().to_map();
        let values = self.metric_values().to_map();
        for (key, value) in dimensions.iter().chain(values.iter()) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Convert a metrics::Unit into the cloudwatch string
///
/// <https://docs.aws.amazon.com/AmazonCloudWatch/latest/APIReference/API_MetricDatum.html>
pub fn unit_to_str(unit: &metrics::Unit) -> &'static str {
    match unit {
        metrics::Unit::Count => "Count",
        metrics::Unit::Percent => "Percent",
        metrics::Unit::Seconds => "Seconds",
        metrics::Unit::Milliseconds => "Milliseconds",
        metrics::Unit::Microseconds => "Microseconds",
        metrics::Unit::Nanoseconds => "Nanoseconds",
        metrics::Unit::Tebibytes => "Terabytes",
        metrics::Unit::Gibibytes => "Gigabytes",
        metrics::Unit::Mebibytes => "Megabytes",
        metrics::Unit::Kibibytes => "Kilobytes",
        metrics::Unit::Bytes => "Bytes",
        metrics::Unit::TerabitsPerSecond => "Terabits/Second",
        metrics::Unit::GigabitsPerSecond => "Gigabits/Second",
        metrics::Unit::MegabitsPerSecond => "Megabits/Second",
        metrics::Unit::KilobitsPerSecond => "Kilobits/Second",
        metrics::Unit::BitsPerSecond => "Bits/Second",
        metrics::Unit::CountPerSecond => "Count/Second",
    }
}
