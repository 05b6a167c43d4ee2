mod fake_completion_client;

pub use fake_completion_client::FakeCompletionClient;
