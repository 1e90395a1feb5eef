pub mod chatbot;
pub mod persona;
pub mod provider;
