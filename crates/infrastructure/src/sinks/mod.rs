pub mod console;
#[cfg(feature = "rabbitmq")]
pub mod rabbitmq;
pub mod summary_file;
pub mod telegram;

pub use console::{ConsoleSink, ConsoleSummaryReporter};
#[cfg(feature = "rabbitmq")]
pub use rabbitmq::RabbitMqSink;
pub use summary_file::FileSummaryReporter;
pub use telegram::TelegramSink;
