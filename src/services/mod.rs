pub mod chatbot;
pub mod gemini;
pub mod generator;
pub mod prompt;
