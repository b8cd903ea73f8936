//! Explosion Synthesizers
//!
//! Higher-level algorithms built from the DSP primitives:
//! - layered explosions
//! - pre-explosion bursts
//! - the synthetic reverb tail
//!
//! Every stochastic step draws from the random stream passed in by the
//! caller, so a seeded stream gives a reproducible explosion.

mod layer;
mod pre_explosion;
mod reverb;

pub use layer::{layer_chain, synthesize_explosion};
pub use pre_explosion::synthesize_pre_explosions;
pub use reverb::synthesize_reverb;
