pub mod query_logger;
pub mod record_type_map;
pub mod server;

pub use query_logger::TracingQueryLogger;
pub use server::StubDnsHandler;
