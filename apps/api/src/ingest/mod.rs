pub mod assembler;
pub mod handlers;
pub mod text_source;

pub use text_source::{build_text_source, TextSource, TextSourceKind};
