mod check_client;

pub use check_client::CheckClient;
