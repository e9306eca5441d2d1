//! Build-time generation of the perfect-hash rank maps used by `vega_poker`.
//!
//! The [`CactusLookup`] builder assigns every 5-card rank profile its
//! evaluation rank and the [`phf`] module turns the finished maps into
//! `MiniPhf` constructor expressions written into `OUT_DIR`.

mod cactus;
pub mod phf;

pub use cactus::CactusLookup;
