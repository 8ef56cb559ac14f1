pub mod config;
pub use config::AnalyserConfig;

pub mod document_analyser;
pub use document_analyser::DocumentAnalyser;

pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
