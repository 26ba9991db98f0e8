pub mod watch;

pub use watch::WatchJob;
