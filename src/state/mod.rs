//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `cart`) so individual pages can
//! depend on small focused models. Each store is a plain struct held in an
//! `RwSignal` provided via context from `app.rs`; the structs themselves
//! are side-effect free and unit tested on the native target.

pub mod cart;
pub mod session;
