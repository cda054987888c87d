mod loader;
mod questions;

pub use loader::{LoadError, load_questions_from_json, parse_questions};
pub use questions::{BUILTIN_TITLE, builtin_questions};
