use super::*;
use kx_eval::{DocumentResolver, InstanceResolver, NullResolver, Parameter, ParameterScope, ScopeKind};
use pretty_assertions::assert_eq;

fn document() -> DocumentResolver {
    DocumentResolver::from_scopes([ParameterScope::new(
        ScopeKind::Component,
        vec![
            Parameter::new("uuid_1", "WIDTH", "8"),
            Parameter::new("uuid_2", "DEPTH", "16"),
            Parameter::new("uuid_3", "", "1"),
        ],
    )])
}

#[test]
fn replaces_ids_with_names() {
    let doc = document();
    let formatter = ExpressionFormatter::new(&doc);
    assert_eq!(formatter.format_referring_expression("uuid_1 + 2"), "WIDTH + 2");
    assert_eq!(
        formatter.format_referring_expression("$clog2(uuid_2)*uuid_1"),
        "$clog2(DEPTH)*WIDTH"
    );
}

#[test]
fn keeps_everything_else_verbatim() {
    let doc = document();
    let formatter = ExpressionFormatter::new(&doc);
    assert_eq!(
        formatter.format_referring_expression("  other  +  8'hFF ?\"uuid_1\": #"),
        "  other  +  8'hFF ?\"uuid_1\": #"
    );
}

#[test]
fn unnamed_parameter_keeps_its_id() {
    let doc = document();
    let formatter = ExpressionFormatter::new(&doc);
    assert_eq!(formatter.format_referring_expression("uuid_3"), "uuid_3");
}

#[test]
fn null_resolver_changes_nothing() {
    let formatter = ExpressionFormatter::new(&NullResolver);
    assert_eq!(formatter.format_referring_expression("uuid_1 + 2"), "uuid_1 + 2");
    assert!(formatter.referenced_ids("uuid_1 + 2").is_empty());
}

#[test]
fn instance_names_come_from_the_document() {
    let doc = document();
    let instance = InstanceResolver::new(&doc).with_override("uuid_1", "32");
    let formatter = ExpressionFormatter::new(&instance);
    assert_eq!(formatter.format_referring_expression("uuid_1"), "WIDTH");
}

#[test]
fn referenced_ids_are_distinct_and_ordered() {
    let doc = document();
    let formatter = ExpressionFormatter::new(&doc);
    assert_eq!(
        formatter.referenced_ids("uuid_2 * uuid_1 + uuid_2 + unknown"),
        vec!["uuid_2".to_owned(), "uuid_1".to_owned()]
    );
}
