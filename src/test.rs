use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::tests::RecordingLogger;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn emitter() -> (BusinessMetricsEmitter, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::default());
        let emitter = Builder::new()
            .cloudwatch_namespace("UserService/BusinessMetrics")
            .with_timestamp(1702425600000)
            .with_logger(logger.clone())
            .build()
            .unwrap();
        (emitter, logger)
    }

    fn endpoint_invocations() -> Metric {
        Metric::new("EndpointInvocations", 1)
            .with_unit(metrics::Unit::Count)
            .with_dimension("Endpoint", "Customer")
            .with_dimension("Operation", "create")
    }

    #[test]
    fn endpoint_invocation() {
        let (emitter, logger) = emitter();
        emitter.emit(&endpoint_invocations());

        let infos = logger.infos();
        assert_eq!(infos.len(), 1);
        assert!(logger.errors().is_empty());
        assert_eq!(
            infos[0],
            r#"{"_aws":{"Timestamp":1702425600000,"CloudWatchMetrics":[{"Namespace":"UserService/BusinessMetrics","Dimensions":[["Endpoint","Operation"]],"Metrics":[{"Name":"EndpointInvocations","Unit":"Count"}]}]},"Endpoint":"Customer","Operation":"create","EndpointInvocations":1}"#
        );

        let parsed: Value = serde_json::from_str(&infos[0]).unwrap();
        assert_eq!(
            parsed,
            json!({
                "_aws": {
                    "Timestamp": 1702425600000u64,
                    "CloudWatchMetrics": [{
                        "Namespace": "UserService/BusinessMetrics",
                        "Dimensions": [["Endpoint", "Operation"]],
                        "Metrics": [{"Name": "EndpointInvocations", "Unit": "Count"}]
                    }]
                },
                "Endpoint": "Customer",
                "Operation": "create",
                "EndpointInvocations": 1
            })
        );
    }

    #[test]
    fn control_characters_never_escape_emit() {
        let (emitter, logger) = emitter();
        emitter.emit(&Metric::new("EndpointInvocations", 1).with_dimension("Endpoint", "Cust\u{0}omer\u{1b}"));

        assert!(logger.infos().is_empty());
        let errors = logger.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "Failed to emit EMF metric");
        assert_eq!(errors[0].1, "invalid_dimension_value");
        assert!(!errors[0].0.contains("Cust"));
    }

    #[test]
    fn c1_control_characters_never_escape_emit() {
        let (emitter, logger) = emitter();
        emitter.emit(&Metric::new("EndpointInvocations", 1).with_dimension("Endpoint", "Cust\u{85}omer\u{9b}"));

        assert!(logger.infos().is_empty());
        assert_eq!(
            logger.errors(),
            vec![("Failed to emit EMF metric".to_string(), "invalid_dimension_value")]
        );
    }

    #[test]
    fn empty_collection_logs_nothing() {
        let (emitter, logger) = emitter();
        emitter.emit_collection::<Metric>(&[]);

        assert!(logger.infos().is_empty());
        assert!(logger.errors().is_empty());
    }

    #[test]
    fn collection_shares_one_line() {
        let (emitter, logger) = emitter();
        emitter.emit_collection(&[
            endpoint_invocations(),
            Metric::new("UsersRegistered", 3u32)
                .with_dimension("Endpoint", "Customer")
                .with_dimension("Operation", "create"),
        ]);

        let infos = logger.infos();
        assert_eq!(infos.len(), 1);
        let parsed: Value = serde_json::from_str(&infos[0]).unwrap();
        assert_eq!(
            parsed["_aws"]["CloudWatchMetrics"][0]["Metrics"],
            json!([
                {"Name": "EndpointInvocations", "Unit": "Count"},
                {"Name": "UsersRegistered", "Unit": "None"}
            ])
        );
        assert_eq!(parsed["UsersRegistered"], 3);
        assert_eq!(parsed["Endpoint"], "Customer");
    }

    #[test]
    fn collection_failure_uses_collection_message() {
        let (emitter, logger) = emitter();
        emitter.emit_collection(&[endpoint_invocations(), endpoint_invocations()]);

        assert!(logger.infos().is_empty());
        assert_eq!(
            logger.errors(),
            vec![("Failed to emit EMF metric collection".to_string(), "key_collision")]
        );
    }

    #[test]
    fn emitter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BusinessMetricsEmitter>();

        let (emitter, logger) = emitter();
        let emitter = Arc::new(emitter);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let emitter = emitter.clone();
                std::thread::spawn(move || emitter.emit(&endpoint_invocations()))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(logger.infos().len(), 4);
    }
}
