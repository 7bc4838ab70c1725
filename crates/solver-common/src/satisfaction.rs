use crate::desire::{Desire, TypeKey};

/// Opaque identity of a pre-made instance bound into the container. Supplied
/// by the (out-of-scope) binding-configuration collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceKey(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSatisfaction {
    pub erased_type: TypeKey,
    /// Identity of the constructor this binds to — usually `erased_type`
    /// itself, but may differ when a subtype is bound to an interface.
    pub constructor: TypeKey,
    pub dependencies: Vec<Desire>,
    pub skip_if_unusable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSatisfaction {
    pub erased_type: TypeKey,
    pub instance_id: InstanceKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSatisfaction {
    pub erased_type: TypeKey,
    pub provider_type: TypeKey,
    pub dependencies: Vec<Desire>,
    pub skip_if_unusable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullSatisfaction {
    pub erased_type: TypeKey,
}

/// A resolved choice of how to produce a value for a desire. Equality is
/// structural: two satisfactions are equal iff they would instantiate
/// identically given identical dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Satisfaction {
    Class(ClassSatisfaction),
    Instance(InstanceSatisfaction),
    Provider(ProviderSatisfaction),
    Null(NullSatisfaction),
}

impl Satisfaction {
    pub fn erased_type(&self) -> &TypeKey {
        match self {
            Satisfaction::Class(c) => &c.erased_type,
            Satisfaction::Instance(i) => &i.erased_type,
            Satisfaction::Provider(p) => &p.erased_type,
            Satisfaction::Null(n) => &n.erased_type,
        }
    }

    pub fn dependencies(&self) -> &[Desire] {
        match self {
            Satisfaction::Class(c) => &c.dependencies,
            Satisfaction::Provider(p) => &p.dependencies,
            Satisfaction::Instance(_) | Satisfaction::Null(_) => &[],
        }
    }

    /// Every built-in variant is a concrete, ready-to-use choice. The method
    /// is kept (rather than inlined as `true`) because it is a capability
    /// every `Satisfaction` variant must answer, per the "sum types over
    /// inheritance" design note — a future variant could legitimately answer
    /// `false` (a choice that still needs further binding).
    pub fn instantiable(&self) -> bool {
        true
    }

    /// true if this satisfaction should be silently discarded (rather than
    /// surfaced as an error) when its own dependencies can't be resolved.
    pub fn skip_if_unusable(&self) -> bool {
        match self {
            Satisfaction::Class(c) => c.skip_if_unusable,
            Satisfaction::Provider(p) => p.skip_if_unusable,
            Satisfaction::Instance(_) | Satisfaction::Null(_) => false,
        }
    }
}
