//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the computation and domain logic live. The model module
//! re-exports the value types callers need to build inputs, and its
//! [`twine_core::Model`] implementations are thin adapters that delegate to
//! the core API.

pub mod thermal;
