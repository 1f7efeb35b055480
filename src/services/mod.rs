pub mod answer_cache;
pub mod backend;

pub use answer_cache::DailyAnswerCache;
pub use backend::CredentialBackend;
