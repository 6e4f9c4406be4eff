// Matching pipeline: vocabulary -> normalizer -> extractor -> similarity ->
// scoring engine -> recommendations. Everything below handlers.rs is pure and
// synchronous; the handlers are the only async surface.

pub mod engine;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod recommend;
pub mod similarity;
pub mod vocabulary;
