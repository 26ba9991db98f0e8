pub mod file_baseline;

pub use file_baseline::FileBaselineStore;
