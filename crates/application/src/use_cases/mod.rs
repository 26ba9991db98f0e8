pub mod check_domain;
pub mod watch_domains;

// Re-export use cases
pub use check_domain::CheckDomainUseCase;
pub use watch_domains::WatchDomainsUseCase;
