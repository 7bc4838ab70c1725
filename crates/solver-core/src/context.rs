use std::collections::BTreeMap;

use solver_common::{Desire, Satisfaction, TypeKey};

/// One frame of the injection context: the satisfaction a dependency is
/// being injected into, plus the attributes of the injection point that led
/// here.
#[derive(Debug, Clone)]
pub struct ContextFrame {
    pub satisfaction: Satisfaction,
    pub attributes: BTreeMap<String, String>,
}

/// The contextual stack of `(satisfaction, attributes)` pairs from root to
/// the current parent, plus the desires already followed while resolving
/// the current injection point. Immutable under [`InjectionContext::push`];
/// [`InjectionContext::record_desire`] mutates the current frame's
/// prior-desires list in place.
#[derive(Debug, Clone, Default)]
pub struct InjectionContext {
    frames: Vec<ContextFrame>,
    prior_desires: Vec<Desire>,
}

impl InjectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context with one more frame and a freshly reset
    /// prior-desires list.
    pub fn push(&self, satisfaction: Satisfaction, attributes: BTreeMap<String, String>) -> Self {
        let mut frames = self.frames.clone();
        frames.push(ContextFrame {
            satisfaction,
            attributes,
        });
        Self {
            frames,
            prior_desires: Vec::new(),
        }
    }

    /// Appends to the prior-desires list of the current context.
    pub fn record_desire(&mut self, desire: Desire) {
        self.prior_desires.push(desire);
    }

    pub fn prior_desires(&self) -> &[Desire] {
        &self.prior_desires
    }

    pub fn frames(&self) -> &[ContextFrame] {
        &self.frames
    }

    /// Number of ancestor frames (root to current parent). The root call has
    /// depth 0.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Erased types of the satisfactions in context, root to current parent.
    pub fn type_path(&self) -> Vec<&TypeKey> {
        self.frames.iter().map(|f| f.satisfaction.erased_type()).collect()
    }

    /// true iff a desire with the same request identity (type, qualifier,
    /// injection point — ignoring any attached satisfaction) has already
    /// been visited in the current fixpoint branch.
    pub fn has_visited(&self, desire: &Desire) -> bool {
        self.prior_desires
            .iter()
            .any(|d| d.request_key() == desire.request_key())
    }
}
