use std::fmt;

use crate::injection_point::InjectionPoint;
use crate::qualifier::Qualifier;
use crate::satisfaction::Satisfaction;

/// An erased, possibly-generic type token produced by the (out-of-scope)
/// reflection collaborator. Generic types are flattened to their rendered
/// name, e.g. `"Vec<Widget>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(pub String);

impl TypeKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed, possibly-qualified request for a value to be injected at a
/// specific injection point. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Desire {
    type_key: TypeKey,
    qualifier: Option<Qualifier>,
    injection_point: InjectionPoint,
    satisfaction: Option<Satisfaction>,
}

impl Desire {
    pub fn new(type_key: TypeKey, qualifier: Option<Qualifier>, injection_point: InjectionPoint) -> Self {
        Self {
            type_key,
            qualifier,
            injection_point,
            satisfaction: None,
        }
    }

    /// Attaches a concrete satisfaction, making this desire instantiable.
    pub fn with_satisfaction(mut self, satisfaction: Satisfaction) -> Self {
        self.satisfaction = Some(satisfaction);
        self
    }

    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    pub fn injection_point(&self) -> &InjectionPoint {
        &self.injection_point
    }

    pub fn satisfaction(&self) -> Option<&Satisfaction> {
        self.satisfaction.as_ref()
    }

    /// true when a concrete satisfaction has already been chosen.
    pub fn instantiable(&self) -> bool {
        self.satisfaction.as_ref().map(Satisfaction::instantiable).unwrap_or(false)
    }

    /// Identity of the *request*, ignoring any attached satisfaction. This is
    /// what the resolver's prior-desires membership check compares on — a
    /// binding function proposing the same request with a different
    /// satisfaction is still proposing an already-visited desire.
    pub fn request_key(&self) -> (&TypeKey, Option<&Qualifier>, &InjectionPoint) {
        (&self.type_key, self.qualifier.as_ref(), &self.injection_point)
    }

    /// `[qualifier:]type`, the format spec.md §7 requires for failure messages.
    pub fn display_point(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{q}:{}", self.type_key),
            None => self.type_key.to_string(),
        }
    }
}

impl fmt::Display for Desire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_point())
    }
}
