//! Value types for the dependency solver: qualifiers, injection points,
//! desires, satisfactions, and the binding-function result tuple. Pure data
//! — no resolution logic lives here, see `solver-core`.

pub use binding::BindingResult;
pub use desire::{Desire, TypeKey};
pub use injection_point::{InjectionPoint, InjectionPointKind};
pub use qualifier::{distance, inherits, is_qualifier, Qualifier, QualifierRegistry};
pub use satisfaction::{
    ClassSatisfaction, InstanceKey, InstanceSatisfaction, NullSatisfaction, ProviderSatisfaction,
    Satisfaction,
};

mod binding;
mod desire;
mod injection_point;
mod qualifier;
mod satisfaction;
