//! End-to-end resolution scenarios exercising the resolver, tree builder,
//! and merger together through the `Solver` facade.

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use solver_common::{
    BindingResult, ClassSatisfaction, Desire, InjectionPoint, InjectionPointKind, Satisfaction, TypeKey,
};
use solver_core::{BindingFunction, InjectionContext, Solver, SolverError};

fn desire(type_name: &str, kind: InjectionPointKind) -> Desire {
    let point = InjectionPoint::new(TypeKey::new(type_name), kind);
    Desire::new(TypeKey::new(type_name), None, point)
}

fn nullable_desire(type_name: &str) -> Desire {
    let point = InjectionPoint::new(TypeKey::new(type_name), InjectionPointKind::Field).nullable();
    Desire::new(TypeKey::new(type_name), None, point)
}

fn class(erased_type: &str, dependencies: Vec<Desire>) -> Satisfaction {
    Satisfaction::Class(ClassSatisfaction {
        erased_type: TypeKey::new(erased_type),
        constructor: TypeKey::new(erased_type),
        dependencies,
        skip_if_unusable: false,
    })
}

fn skippable_class(erased_type: &str, dependencies: Vec<Desire>) -> Satisfaction {
    Satisfaction::Class(ClassSatisfaction {
        erased_type: TypeKey::new(erased_type),
        constructor: TypeKey::new(erased_type),
        dependencies,
        skip_if_unusable: true,
    })
}

/// Binds requested types to fixed satisfactions by type-key, ignoring context.
#[derive(Debug)]
struct MapBinding(HashMap<String, Satisfaction>);

impl BindingFunction for MapBinding {
    fn bind(&self, _context: &InjectionContext, desire: &Desire) -> Option<BindingResult> {
        if desire.instantiable() {
            return None;
        }
        let satisfaction = self.0.get(&desire.type_key().0)?.clone();
        Some(BindingResult::new(desire.clone().with_satisfaction(satisfaction), true))
    }
}

/// Binds `Q` to a different satisfaction depending on which satisfaction is
/// asking for it, so the same requested type is not shared across contexts.
#[derive(Debug)]
struct ContextSensitiveQ;

impl BindingFunction for ContextSensitiveQ {
    fn bind(&self, context: &InjectionContext, desire: &Desire) -> Option<BindingResult> {
        if desire.instantiable() || desire.type_key().0 != "Q" {
            return None;
        }
        let parent = context.frames().last()?.satisfaction.erased_type().0.clone();
        let erased = format!("QFor{parent}");
        Some(BindingResult::new(
            desire.clone().with_satisfaction(class(&erased, vec![])),
            true,
        ))
    }
}

#[test]
fn trivial_resolution_has_no_dependencies() {
    let mut bindings = HashMap::new();
    bindings.insert("I".to_string(), class("Impl", vec![]));
    let fns: Vec<Box<dyn BindingFunction>> = vec![Box::new(MapBinding(bindings))];
    let mut solver = Solver::new(fns, 10).unwrap();

    solver.resolve(desire("I", InjectionPointKind::NoArgument)).unwrap();

    let graph = solver.graph();
    assert_eq!(graph.nodes().count(), 2);
    assert_eq!(graph.outgoing_edges(solver.root_node()).count(), 1);
}

#[test]
fn shared_dependency_collapses_to_one_output_node() {
    let mut bindings = HashMap::new();
    bindings.insert(
        "A".to_string(),
        class(
            "A",
            vec![
                desire("X", InjectionPointKind::ConstructorParameter),
                desire("Y", InjectionPointKind::ConstructorParameter),
            ],
        ),
    );
    bindings.insert(
        "X".to_string(),
        class("X", vec![desire("Z", InjectionPointKind::ConstructorParameter)]),
    );
    bindings.insert(
        "Y".to_string(),
        class("Y", vec![desire("Z", InjectionPointKind::ConstructorParameter)]),
    );
    bindings.insert("Z".to_string(), class("Z", vec![]));
    let fns: Vec<Box<dyn BindingFunction>> = vec![Box::new(MapBinding(bindings))];
    let mut solver = Solver::new(fns, 10).unwrap();

    solver.resolve(desire("A", InjectionPointKind::NoArgument)).unwrap();

    let graph = solver.graph();
    // root, A, X, Y, Z -- Z is shared between X and Y, not duplicated.
    assert_eq!(graph.nodes().count(), 5);
    let z_nodes = graph
        .nodes()
        .filter(|&n| graph.node(n).satisfaction().map(|s| s.erased_type().0 == "Z").unwrap_or(false))
        .count();
    assert_eq!(z_nodes, 1);
}

#[test]
fn context_sensitive_binding_does_not_share_across_parents() {
    let mut bindings = HashMap::new();
    bindings.insert(
        "Root".to_string(),
        class(
            "Root",
            vec![
                desire("X", InjectionPointKind::ConstructorParameter),
                desire("Y", InjectionPointKind::ConstructorParameter),
            ],
        ),
    );
    bindings.insert(
        "X".to_string(),
        class("X", vec![desire("Q", InjectionPointKind::ConstructorParameter)]),
    );
    bindings.insert(
        "Y".to_string(),
        class("Y", vec![desire("Q", InjectionPointKind::ConstructorParameter)]),
    );
    let fns: Vec<Box<dyn BindingFunction>> = vec![Box::new(ContextSensitiveQ), Box::new(MapBinding(bindings))];
    let mut solver = Solver::new(fns, 10).unwrap();

    solver.resolve(desire("Root", InjectionPointKind::NoArgument)).unwrap();

    let graph = solver.graph();
    let q_variants: std::collections::BTreeSet<String> = graph
        .nodes()
        .filter_map(|n| graph.node(n).satisfaction())
        .map(|s| s.erased_type().0.clone())
        .filter(|t| t.starts_with("QFor"))
        .collect();
    assert_eq!(q_variants.len(), 2);
    assert!(q_variants.contains("QForX"));
    assert!(q_variants.contains("QForY"));
}

#[test]
fn skippable_default_satisfied_when_its_dependency_resolves() {
    let mut bindings = HashMap::new();
    bindings.insert(
        "S".to_string(),
        skippable_class("SImpl", vec![desire("Inner", InjectionPointKind::ConstructorParameter)]),
    );
    bindings.insert("Inner".to_string(), class("InnerObj", vec![]));
    let fns: Vec<Box<dyn BindingFunction>> = vec![Box::new(MapBinding(bindings))];
    let mut solver = Solver::new(fns, 10).unwrap();

    solver.resolve(desire("S", InjectionPointKind::NoArgument)).unwrap();

    let graph = solver.graph();
    assert_eq!(graph.nodes().count(), 3); // root, SImpl, InnerObj
}

#[test]
fn skippable_default_skipped_when_its_dependency_is_unresolvable() {
    let mut bindings = HashMap::new();
    bindings.insert(
        "S".to_string(),
        skippable_class("SImpl", vec![desire("Inner", InjectionPointKind::ConstructorParameter)]),
    );
    // No binding for "Inner" at all.
    let fns: Vec<Box<dyn BindingFunction>> = vec![Box::new(MapBinding(bindings))];
    let mut solver = Solver::new(fns, 10).unwrap();

    let err = solver.resolve(desire("S", InjectionPointKind::NoArgument)).unwrap_err();
    assert!(matches!(err, SolverError::Unresolvable { .. }));
}

#[test]
fn skippable_default_skipped_substitutes_null_when_nullable() {
    let mut bindings = HashMap::new();
    bindings.insert(
        "S".to_string(),
        skippable_class("SImpl", vec![desire("Inner", InjectionPointKind::ConstructorParameter)]),
    );
    let fns: Vec<Box<dyn BindingFunction>> = vec![Box::new(MapBinding(bindings))];
    let mut solver = Solver::new(fns, 10).unwrap();

    solver.resolve(nullable_desire("S")).unwrap();

    let graph = solver.graph();
    let has_null = graph
        .nodes()
        .filter_map(|n| graph.node(n).satisfaction())
        .any(|s| matches!(s, Satisfaction::Null(_)));
    assert!(has_null);
}

#[test]
fn cyclic_dependency_fails_once_max_depth_is_exceeded() {
    let mut bindings = HashMap::new();
    bindings.insert(
        "A".to_string(),
        class("A", vec![desire("B", InjectionPointKind::ConstructorParameter)]),
    );
    bindings.insert(
        "B".to_string(),
        class("B", vec![desire("A", InjectionPointKind::ConstructorParameter)]),
    );
    let fns: Vec<Box<dyn BindingFunction>> = vec![Box::new(MapBinding(bindings))];
    let mut solver = Solver::new(fns, 10).unwrap();

    let err = solver.resolve(desire("A", InjectionPointKind::NoArgument)).unwrap_err();
    match err {
        SolverError::Cyclic { depth, .. } => assert_eq!(depth, 11),
        other => panic!("expected Cyclic, got {other:?}"),
    }
}
