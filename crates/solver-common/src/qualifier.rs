use std::collections::HashSet;
use std::fmt;

/// An opaque tag refining a type-based request (e.g. a binding annotation).
///
/// Qualifiers form a shallow parent chain: [`Qualifier::with_ancestors`]
/// records every tag `self` can stand in for, nearest first. The chain is
/// supplied at construction time by whatever reflects on the caller's
/// annotations — this module never inspects real Rust types, it only
/// compares the tags it's handed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    tag: String,
    identity: Option<String>,
    ancestors: Vec<String>,
    inherits_default: bool,
}

impl Qualifier {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            identity: None,
            ancestors: Vec::new(),
            inherits_default: false,
        }
    }

    /// Attaches parameter identity, e.g. the `"foo"` in `@Named("foo")`.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Declares the parent tags this qualifier transitively stands in for,
    /// nearest ancestor first.
    pub fn with_ancestors(mut self, ancestors: Vec<String>) -> Self {
        self.ancestors = ancestors;
        self
    }

    /// Marks this qualifier type as matching an absent (`None`) request.
    pub fn inheriting_default(mut self) -> Self {
        self.inherits_default = true;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn inherits_default(&self) -> bool {
        self.inherits_default
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identity {
            Some(id) => write!(f, "{}({})", self.tag, id),
            None => write!(f, "{}", self.tag),
        }
    }
}

/// Registry of tags that are legal to use as qualifiers. Populated by the
/// binding-configuration collaborator (out of scope here); consulted by
/// binding functions before treating an arbitrary tag as a qualifier.
#[derive(Debug, Default, Clone)]
pub struct QualifierRegistry {
    tags: HashSet<String>,
}

impl QualifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.insert(tag.into());
        self
    }
}

/// true iff `tag` has been marked as usable as a qualifier.
pub fn is_qualifier(registry: &QualifierRegistry, tag: &str) -> bool {
    registry.tags.contains(tag)
}

/// true iff qualifier `a` can satisfy a request for `b`.
pub fn inherits(a: Option<&Qualifier>, b: Option<&Qualifier>) -> bool {
    match (a, b) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(a), None) => a.inherits_default,
        (Some(a), Some(b)) => {
            a == b || (b.identity.is_none() && a.ancestors.iter().any(|t| t == &b.tag))
        }
    }
}

/// Number of parent hops from `a` to `b`, or -1 if `a` does not inherit `b`.
pub fn distance(a: Option<&Qualifier>, b: Option<&Qualifier>) -> i32 {
    match (a, b) {
        (None, None) => 0,
        (None, Some(_)) => -1,
        (Some(a), None) => {
            if a.inherits_default {
                1
            } else {
                -1
            }
        }
        (Some(a), Some(b)) => {
            if a == b {
                return 0;
            }
            if b.identity.is_none() {
                if let Some(pos) = a.ancestors.iter().position(|t| t == &b.tag) {
                    return (pos + 1) as i32;
                }
            }
            -1
        }
    }
}
