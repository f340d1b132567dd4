//! Declarative pool blueprints.
//!
//! A config is a validated, immutable description of a pool at genesis.
//! Pools are constructed from configs and re-validate them on
//! construction, so an invalid pool can never come into existence.

mod tiered;

pub use tiered::TieredPoolConfig;
