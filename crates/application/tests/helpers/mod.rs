mod mock_query_log;

pub use mock_query_log::MockQueryLogSink;
