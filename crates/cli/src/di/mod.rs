use std::sync::Arc;
use std::time::Duration;
use subwatch_application::ports::{NotificationSink, SummaryReporter};
use subwatch_application::services::{BatchResolver, Dispatcher};
use subwatch_application::use_cases::{CheckDomainUseCase, WatchDomainsUseCase};
use subwatch_domain::config::OutputsConfig;
use subwatch_domain::Config;
use subwatch_infrastructure::dns::HickoryARecordResolver;
#[cfg(feature = "rabbitmq")]
use subwatch_infrastructure::sinks::RabbitMqSink;
use subwatch_infrastructure::sinks::{
    ConsoleSink, ConsoleSummaryReporter, FileSummaryReporter, TelegramSink,
};
use subwatch_infrastructure::sources::CrtShSource;
use subwatch_infrastructure::storage::FileBaselineStore;
use tracing::info;

/// Wires adapters into the use cases from one validated `Config`.
pub struct UseCases {
    pub watch: Arc<WatchDomainsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let source = Arc::new(CrtShSource::new(
            config.source.base_url.clone(),
            Duration::from_secs(config.source.timeout_secs),
        )?);
        let baseline = Arc::new(FileBaselineStore::new(&config.storage.baseline_dir));

        let resolver = Arc::new(BatchResolver::new(
            Arc::new(HickoryARecordResolver::new(&config.resolver)?),
            Duration::from_millis(config.resolver.lookup_budget_ms()),
        ));

        let dispatcher = Arc::new(Dispatcher::new(build_sinks(&config.outputs)?));
        let reporters = build_reporters(&config.outputs);

        info!(
            sinks = dispatcher.sink_count(),
            reporters = reporters.len(),
            baseline_dir = %config.storage.baseline_dir,
            "Pipeline wired"
        );

        let check = Arc::new(CheckDomainUseCase::new(
            source,
            baseline,
            resolver,
            Arc::clone(&dispatcher),
        ));

        Ok(Self {
            watch: Arc::new(WatchDomainsUseCase::new(check, dispatcher, reporters)),
        })
    }
}

fn build_sinks(outputs: &OutputsConfig) -> anyhow::Result<Vec<Arc<dyn NotificationSink>>> {
    let mut sinks: Vec<Arc<dyn NotificationSink>> = Vec::new();

    if outputs.stdout {
        sinks.push(Arc::new(ConsoleSink::new()));
    }
    if outputs.telegram.enabled {
        sinks.push(Arc::new(TelegramSink::from_config(&outputs.telegram)?));
    }
    if outputs.rabbitmq.enabled {
        #[cfg(feature = "rabbitmq")]
        sinks.push(Arc::new(RabbitMqSink::from_config(&outputs.rabbitmq)?));

        #[cfg(not(feature = "rabbitmq"))]
        anyhow::bail!("RabbitMQ output requested but subwatch was built without the `rabbitmq` feature");
    }

    Ok(sinks)
}

fn build_reporters(outputs: &OutputsConfig) -> Vec<Arc<dyn SummaryReporter>> {
    let mut reporters: Vec<Arc<dyn SummaryReporter>> = vec![Arc::new(ConsoleSummaryReporter::new())];

    if let Some(path) = &outputs.summary_file {
        reporters.push(Arc::new(FileSummaryReporter::new(path)));
    }

    reporters
}
