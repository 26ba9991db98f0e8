pub mod a_record_resolver;

pub use a_record_resolver::HickoryARecordResolver;
