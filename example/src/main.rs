use business_metrics_emf::{BusinessMetric, Builder, DimensionValue, Error, Metric, MetricNumber};

/// A business metric with its own shape, reported through the same emitter
struct UsersRegistered {
    count: u64,
    channel: &'static str,
}

impl BusinessMetric for UsersRegistered {
    fn name(&self) -> &str {
        "UsersRegistered"
    }

    fn value(&self) -> MetricNumber {
        self.count.into()
    }

    fn unit(&self) -> &str {
        "Count"
    }

    fn dimensions(&self) -> Vec<DimensionValue> {
        vec![DimensionValue::new("Channel", self.channel)]
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .compact()
        .init();

    let namespace = std::env::var("EMF_NAMESPACE").unwrap_or_else(|_| "UserService/BusinessMetrics".to_string());
    let emitter = Builder::new()
        .cloudwatch_namespace(namespace)
        .with_dimension("Service", "UserService")
        .build()?;

    emitter.emit(
        &Metric::new("EndpointInvocations", 1)
            .with_unit(metrics::Unit::Count)
            .with_dimension("Endpoint", "Customer")
            .with_dimension("Operation", "create"),
    );

    emitter.emit(&UsersRegistered { count: 2, channel: "web" });

    // Invalid dimension value, logged as an error and otherwise ignored
    emitter.emit(&Metric::new("EndpointInvocations", 1).with_dimension("Endpoint", "\u{7}"));

    Ok(())
}
