#[path = "../common/mod.rs"]
mod common;
use common::{names, CollectingSink, ScriptedResolver, ScriptedSource, TestDomains};

use std::sync::Arc;
use std::time::Duration;
use subwatch_application::ports::{BaselineStore, NotificationSink, SummaryReporter};
use subwatch_application::services::{BatchResolver, Dispatcher};
use subwatch_application::use_cases::{CheckDomainUseCase, WatchDomainsUseCase};
use subwatch_domain::DomainOutcome;
use subwatch_infrastructure::sinks::FileSummaryReporter;
use subwatch_infrastructure::storage::FileBaselineStore;
use tempfile::TempDir;

struct Pipeline {
    dir: TempDir,
    source: Arc<ScriptedSource>,
    baseline: Arc<FileBaselineStore>,
    sink: Arc<CollectingSink>,
    watch: WatchDomainsUseCase,
}

impl Pipeline {
    fn build(source: ScriptedSource, resolver: ScriptedResolver) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let source = Arc::new(source);
        let baseline = Arc::new(FileBaselineStore::new(dir.path()));
        let sink = Arc::new(CollectingSink::new());

        let dispatcher = Arc::new(Dispatcher::new(vec![
            sink.clone() as Arc<dyn NotificationSink>
        ]));
        let check = Arc::new(CheckDomainUseCase::new(
            source.clone(),
            baseline.clone(),
            Arc::new(BatchResolver::new(
                Arc::new(resolver),
                Duration::from_millis(500),
            )),
            Arc::clone(&dispatcher),
        ));
        let reporter: Arc<dyn SummaryReporter> =
            Arc::new(FileSummaryReporter::new(dir.path().join("results.txt")));
        let watch = WatchDomainsUseCase::new(check, dispatcher, vec![reporter]);

        Self {
            dir,
            source,
            baseline,
            sink,
            watch,
        }
    }

    fn summary(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("results.txt")).unwrap_or_default()
    }
}

// ============================================================================
// End-to-end flows against the file-backed baseline
// ============================================================================

#[tokio::test]
async fn test_first_run_notifies_resolved_and_records_everything() {
    // Arrange
    let pipeline = Pipeline::build(
        ScriptedSource::new().with(TestDomains::example(), &["a.example.com", "b.example.com"]),
        ScriptedResolver::new().with("a.example.com", &[[1, 2, 3, 4]]),
    );

    // Act
    let report = pipeline
        .watch
        .execute(&[TestDomains::example().to_string()])
        .await;

    // Assert
    assert_eq!(report.total_new(), 2);
    assert_eq!(
        pipeline.sink.messages(),
        vec![r#"{"subdomain":"a.example.com","ip_addresses":["1.2.3.4"]}"#]
    );
    assert_eq!(
        pipeline.baseline.load(TestDomains::example()).await.unwrap(),
        names(&["a.example.com", "b.example.com"])
    );
    assert_eq!(pipeline.summary(), "Found 2 new subdomains for example.com\n");
}

#[tokio::test]
async fn test_second_run_is_quiet() {
    let pipeline = Pipeline::build(
        ScriptedSource::new().with(TestDomains::example(), &["a.example.com", "b.example.com"]),
        ScriptedResolver::new().with("a.example.com", &[[1, 2, 3, 4]]),
    );
    let domains = [TestDomains::example().to_string()];

    pipeline.watch.execute(&domains).await;
    let file = pipeline.baseline.path_for(TestDomains::example());
    let after_first = std::fs::read_to_string(&file).unwrap();
    let second = pipeline.watch.execute(&domains).await;

    assert_eq!(second.total_new(), 0);
    assert_eq!(pipeline.sink.messages().len(), 1);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), after_first);
    assert_eq!(
        pipeline.summary(),
        "Found 2 new subdomains for example.com\nFound 0 new subdomains for example.com\n"
    );
}

#[tokio::test]
async fn test_only_new_names_are_appended_on_growth() {
    let pipeline = Pipeline::build(
        ScriptedSource::new().with(TestDomains::example(), &["a.example.com"]),
        ScriptedResolver::new().with("c.example.com", &[[10, 0, 0, 3], [10, 0, 0, 4]]),
    );
    let domains = [TestDomains::example().to_string()];
    pipeline.watch.execute(&domains).await;

    pipeline.source.set(
        TestDomains::example(),
        &["a.example.com", "C.Example.com", "d.example.com"],
    );
    let report = pipeline.watch.execute(&domains).await;

    assert_eq!(report.total_new(), 2);
    assert_eq!(
        pipeline.sink.messages(),
        vec![r#"{"subdomain":"c.example.com","ip_addresses":["10.0.0.3","10.0.0.4"]}"#]
    );
    let content = std::fs::read_to_string(pipeline.baseline.path_for(TestDomains::example())).unwrap();
    assert_eq!(content, "a.example.com\nc.example.com\nd.example.com\n");
}

#[tokio::test]
async fn test_failed_domain_does_not_stop_the_next() {
    // Arrange - broken.test has no scripted answer so its fetch fails
    let pipeline = Pipeline::build(
        ScriptedSource::new().with(TestDomains::other(), &["x.other.test"]),
        ScriptedResolver::new().with("x.other.test", &[[192, 0, 2, 1]]),
    );

    // Act
    let report = pipeline
        .watch
        .execute(&[
            TestDomains::broken().to_string(),
            TestDomains::other().to_string(),
        ])
        .await;

    // Assert
    assert!(matches!(
        &report.outcomes[0],
        DomainOutcome::Failed { domain, .. } if domain == "broken.test"
    ));
    assert_eq!(report.outcomes[1].new_subdomains(), Some(1));
    assert!(!pipeline.baseline.path_for(TestDomains::broken()).exists());
    assert_eq!(pipeline.sink.messages().len(), 1);

    let summary = pipeline.summary();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Failed to check broken.test: "));
    assert_eq!(lines[1], "Found 1 new subdomains for other.test");
}
