pub mod batch_resolver;
pub mod dispatcher;

pub use batch_resolver::BatchResolver;
pub use dispatcher::Dispatcher;
