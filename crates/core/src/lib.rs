//! Domain logic for the Pulse feedback platform.
//!
//! Pure, synchronous, I/O-free: error taxonomy, shared type aliases,
//! the feedback field catalogue with its validation helpers, and the
//! keyword sentiment classifier. Storage and HTTP concerns live in
//! `pulse-store` and `pulse-api`.

pub mod error;
pub mod feedback;
pub mod sentiment;
pub mod types;
