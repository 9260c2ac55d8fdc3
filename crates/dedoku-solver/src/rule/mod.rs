//! The deduction rules, one module per rule.
//!
//! Each rule is a free function taking the grid and a cell id. Rules are
//! deliberately narrow: they encode a single inference and report whether
//! they changed anything, leaving scheduling entirely to the
//! [`engine`](crate::engine).

pub mod band_force;
pub mod exclusion;
pub mod singles;

pub use self::{
    band_force::forced_placement, exclusion::refine_exclusions, singles::attempt_resolve,
};
