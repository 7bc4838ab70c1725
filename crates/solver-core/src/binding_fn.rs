use std::fmt;

use solver_common::{BindingResult, Desire};

use crate::context::InjectionContext;

/// A pluggable policy mapping a desire (within a context) to another desire,
/// or declining to have an opinion. Implementations must be pure with
/// respect to the solver: no side effects, and idempotent for a given
/// `(context, desire)` pair.
pub trait BindingFunction: fmt::Debug {
    /// Returns `None` if this function has no opinion about `desire`.
    fn bind(&self, context: &InjectionContext, desire: &Desire) -> Option<BindingResult>;
}
