pub mod baseline_store;
pub mod name_source;
pub mod notification_sink;
pub mod subdomain_resolver;
pub mod summary_reporter;

pub use baseline_store::BaselineStore;
pub use name_source::NameSource;
pub use notification_sink::NotificationSink;
pub use subdomain_resolver::SubdomainResolver;
pub use summary_reporter::SummaryReporter;
