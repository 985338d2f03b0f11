//! Use case for rewriting a text source line by line

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::{
    ApplicationError, ConvertRequest, ConvertResponse, LineSink, LineSource,
};
use crate::conversion::Converter;

/// Reads every line from a source, converts it and hands the result to a sink
pub struct ConvertFileUseCase {
    source: Arc<dyn LineSource>,
    sink: Arc<dyn LineSink>,
}

impl ConvertFileUseCase {
    pub fn new(source: Arc<dyn LineSource>, sink: Arc<dyn LineSink>) -> Self {
        Self { source, sink }
    }

    pub async fn execute(
        &self,
        request: ConvertRequest,
    ) -> Result<ConvertResponse, ApplicationError> {
        request.validate()?;

        let source = self.source.describe();
        let destination = self.sink.describe();
        info!(%source, %destination, policy = %request.policy, "Converting");

        let lines = self.source.read_lines().await?;
        debug!(lines = lines.len(), "Read input");

        let converter = Converter::new(request.policy);
        let (converted, stats) = converter.convert_lines(&lines);

        self.sink.write_lines(&converted).await?;
        info!(
            lines = stats.lines,
            matches = stats.matches,
            changed_lines = stats.changed_lines,
            "Conversion finished"
        );

        Ok(ConvertResponse {
            source,
            destination,
            policy: request.policy,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ValidationError;
    use crate::conversion::CasePolicy;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    struct MemorySource(Vec<String>);

    #[async_trait]
    impl LineSource for MemorySource {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        async fn read_lines(&self) -> Result<Vec<String>, ApplicationError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct MemorySink(Mutex<Vec<String>>);

    #[async_trait]
    impl LineSink for MemorySink {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        async fn write_lines(&self, lines: &[String]) -> Result<(), ApplicationError> {
            self.0.lock().unwrap().extend_from_slice(lines);
            Ok(())
        }
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_convert_preserves_order_and_terminators() {
        let source = Arc::new(MemorySource(lines(&[
            "int some_value;\n",
            "\n",
            "trailing_\n",
            "last_line",
        ])));
        let sink = Arc::new(MemorySink::default());
        let use_case = ConvertFileUseCase::new(source, sink.clone());

        let response = use_case.execute(ConvertRequest::default()).await.unwrap();

        assert_eq!(
            *sink.0.lock().unwrap(),
            lines(&["int someValue;\n", "\n", "trailing_\n", "lastLine"])
        );
        assert_eq!(response.stats.lines, 4);
        assert_eq!(response.stats.matches, 2);
        assert_eq!(response.stats.changed_lines, 2);
        assert_eq!(response.policy, CasePolicy::Camel);
    }

    #[tokio::test]
    async fn test_convert_with_pascal_policy() {
        let source = Arc::new(MemorySource(lines(&["foo_bar\n"])));
        let sink = Arc::new(MemorySink::default());
        let use_case = ConvertFileUseCase::new(source, sink.clone());

        let request = ConvertRequest {
            policy: CasePolicy::Pascal,
            ..Default::default()
        };
        use_case.execute(request).await.unwrap();

        assert_eq!(*sink.0.lock().unwrap(), lines(&["FooBar\n"]));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_conversion_is_logged() {
        let source = Arc::new(MemorySource(lines(&["a_b\n"])));
        let sink = Arc::new(MemorySink::default());
        let use_case = ConvertFileUseCase::new(source, sink);

        use_case.execute(ConvertRequest::default()).await.unwrap();

        assert!(logs_contain("Converting"));
        assert!(logs_contain("Conversion finished"));
        assert!(logs_contain("matches=1"));
    }

    #[tokio::test]
    async fn test_invalid_request_writes_nothing() {
        let source = Arc::new(MemorySource(lines(&["foo_bar\n"])));
        let sink = Arc::new(MemorySink::default());
        let use_case = ConvertFileUseCase::new(source, sink.clone());

        let request = ConvertRequest {
            input: Some(PathBuf::from("x.h")),
            output: Some(PathBuf::from("x.h")),
            ..Default::default()
        };
        let result = use_case.execute(request).await;

        assert!(matches!(
            result,
            Err(ApplicationError::ValidationError(
                ValidationError::OutputOverwritesInput(_)
            ))
        ));
        assert!(sink.0.lock().unwrap().is_empty());
    }
}
