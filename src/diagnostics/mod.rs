//! Rule-based diagnosis of weak dimensions.
//!
//! Sector and practice knowledge lives in closed lookup tables
//! ([`sector`], [`rules`]); [`diagnose`] combines them into
//! [`CriticalPoint`](crate::model::CriticalPoint)s.

mod engine;
pub mod rules;
pub mod sector;

pub(crate) use engine::extend_unique;
pub use engine::{diagnose, MAX_ITEMS_PER_POINT};
pub use sector::{Sector, SectorKind, SECTOR_KEYWORDS};
