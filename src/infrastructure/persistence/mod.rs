//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits backed by
//! `DashMap`. State lives for the lifetime of the process.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Link storage with atomic create-or-fail
//! - [`InMemoryClickRepository`] - Append-only click log per code

pub mod memory_click_repository;
pub mod memory_link_repository;

pub use memory_click_repository::InMemoryClickRepository;
pub use memory_link_repository::InMemoryLinkRepository;
