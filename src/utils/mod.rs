pub mod code_generator;
pub mod extract_host;
