use std::collections::BTreeMap;

use crate::desire::TypeKey;
use crate::qualifier::Qualifier;

/// Where in a satisfaction's construction a dependency value is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionPointKind {
    Field,
    ConstructorParameter,
    SetterParameter,
    NoArgument,
}

/// A location a value must be supplied to. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionPoint {
    type_key: TypeKey,
    qualifier: Option<Qualifier>,
    kind: InjectionPointKind,
    nullable: bool,
    attributes: BTreeMap<String, String>,
}

impl InjectionPoint {
    pub fn new(type_key: TypeKey, kind: InjectionPointKind) -> Self {
        Self {
            type_key,
            qualifier: None,
            kind,
            nullable: false,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = Some(qualifier);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    pub fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    pub fn kind(&self) -> InjectionPointKind {
        self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}
