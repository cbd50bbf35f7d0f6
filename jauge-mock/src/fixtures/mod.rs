//! Deterministic readings for the default fixture store.

pub mod readings;
