pub mod message;
pub mod persona;
pub mod transcript;
pub mod llm_decode;
