//! Proof module: canonical hashing and replay verification of solution paths.
//!
//! Depends on `board` and `moves`. Nothing depends on `proof` within the kernel.

pub mod hash;
pub mod replay;
