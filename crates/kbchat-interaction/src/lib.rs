//! Answer-provider implementations.
//!
//! Implementations of the [`kbchat_core::answer::AnswerProvider`] contract.
//! The only shipped provider is the keyword-lookup stub over the built-in
//! knowledge-base table; a real retrieval backend would live here as well.

pub mod knowledge_base;

pub use knowledge_base::KeywordAnswerProvider;
