//! # Validator
//!
//! AWS CloudWatch character-set and length rules applied to one value at a time
//!
//! <https://docs.aws.amazon.com/AmazonCloudWatch/latest/APIReference/API_Dimension.html>

use super::error::{Error, Result, Violation};
use super::value::{DimensionValue, MetricValue, NamespaceValue};

pub const MAX_DIMENSION_KEY_LEN: usize = 255;
pub const MAX_DIMENSION_VALUE_LEN: usize = 1024;
pub const MAX_NAMESPACE_LEN: usize = 256;

/// Rules shared by dimension keys and values
fn check_dimension_text(text: &str, max: usize) -> Result<(), Violation> {
    if text.is_empty() {
        return Err(Violation::Empty);
    }
    if !text.is_ascii() {
        return Err(Violation::NonAscii);
    }
    // ASCII only from here, so bytes are characters
    if text.len() > max {
        return Err(Violation::TooLong { len: text.len(), max });
    }
    if text.trim().is_empty() {
        return Err(Violation::Blank);
    }
    Ok(())
}

fn check_control(text: &str) -> Result<(), Violation> {
    match text.chars().any(|c| c.is_ascii_control()) {
        true => Err(Violation::ControlCharacter),
        false => Ok(()),
    }
}

pub struct DimensionValueValidator;

impl DimensionValueValidator {
    /// Validate both the key and the value of a dimension
    pub fn validate(dimension: &DimensionValue) -> Result<()> {
        Self::validate_key(dimension.key())?;
        Self::validate_value(dimension.value())
    }

    /// 1-255 ASCII characters, not blank, no leading `:`, no control characters
    pub fn validate_key(key: &str) -> Result<()> {
        check_dimension_text(key, MAX_DIMENSION_KEY_LEN)
            .and_then(|_| match key.starts_with(':') {
                true => Err(Violation::LeadingColon),
                false => Ok(()),
            })
            .and_then(|_| check_control(key))
            .map_err(Error::InvalidDimensionKey)
    }

    /// 1-1024 ASCII characters, not blank, no control characters
    pub fn validate_value(value: &str) -> Result<()> {
        check_dimension_text(value, MAX_DIMENSION_VALUE_LEN)
            .and_then(|_| check_control(value))
            .map_err(Error::InvalidDimensionValue)
    }
}

pub struct NamespaceValidator;

impl NamespaceValidator {
    /// 1-256 characters drawn from `[A-Za-z0-9._\-/#:]`
    pub fn validate(namespace: &NamespaceValue) -> Result<()> {
        let value = namespace.value();

        if value.is_empty() {
            return Err(Error::InvalidNamespace(Violation::Empty));
        }
        if let Some(c) = value.chars().find(|c| !is_namespace_char(*c)) {
            return Err(Error::InvalidNamespace(Violation::DisallowedCharacter(c)));
        }
        if value.len() > MAX_NAMESPACE_LEN {
            return Err(Error::InvalidNamespace(Violation::TooLong {
                len: value.len(),
                max: MAX_NAMESPACE_LEN,
            }));
        }
        Ok(())
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/' | '#' | ':')
}

pub struct MetricValueValidator;

impl MetricValueValidator {
    /// NaN and infinities have no JSON representation
    pub fn validate(metric: &MetricValue) -> Result<()> {
        match metric.value().is_finite() {
            true => Ok(()),
            false => Err(Error::InvalidMetricValue {
                name: metric.name().to_string(),
            }),
        }
    }
}
