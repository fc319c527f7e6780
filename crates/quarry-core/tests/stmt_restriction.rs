use quarry_core::schema::{Field, Index, Layout};
use quarry_core::stmt::{Condition, GroupType, Operator, Query, RestrictionGroup, Value};

use std::sync::Arc;

fn users() -> Arc<Layout> {
    let mut layout = Layout::new("users");
    layout
        .put_field(Field::new("_id", "long:unsigned").auto_increment())
        .unwrap();
    layout.put_field(Field::new("email", "string:255")).unwrap();
    layout.put_field(Field::new("age", "int")).unwrap();
    layout.put_index(Index::primary("_id")).unwrap();
    Arc::new(layout)
}

fn operators(group: &RestrictionGroup) -> Vec<Operator> {
    group
        .children()
        .iter()
        .map(|child| match child {
            Condition::Restriction(restriction) => restriction.operator(),
            Condition::Group(_) => panic!("expected a restriction"),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Operator promotion
// ---------------------------------------------------------------------------

#[test]
fn scalar_value_keeps_equality() {
    let mut query = Query::new(&users());
    query.where_eq("email", "a@b.com").unwrap();

    assert_eq!(operators(query.restrictions()), [Operator::Eq]);
}

#[test]
fn sequence_value_is_promoted_to_in() {
    let mut query = Query::new(&users());
    query.where_eq("age", vec![18, 21]).unwrap();
    query.where_op("age", Operator::Gt, vec![30]).unwrap();

    assert_eq!(operators(query.restrictions()), [Operator::In, Operator::In]);
}

#[test]
fn sequence_value_with_not_equal_becomes_not_in() {
    let mut query = Query::new(&users());
    query.where_op("age", Operator::Ne, vec![18]).unwrap();

    assert_eq!(operators(query.restrictions()), [Operator::NotIn]);
}

#[test]
fn explicit_membership_operator_is_kept() {
    let mut query = Query::new(&users());
    query.where_op("age", Operator::NotIn, vec![1, 2]).unwrap();

    assert_eq!(operators(query.restrictions()), [Operator::NotIn]);
}

#[test]
fn restriction_on_unknown_field_fails() {
    let mut query = Query::new(&users());
    let err = query.where_eq("nickname", "bob").unwrap_err();

    assert!(err.is_unknown_field());
    assert!(query.restrictions().is_empty());
}

// ---------------------------------------------------------------------------
// Negation
// ---------------------------------------------------------------------------

#[test]
fn negation_table_is_an_involution() {
    use Operator::*;

    for op in [Eq, Ne, Gt, Lt, Is, IsNot, Like, NotLike] {
        assert_eq!(op.negate().unwrap().negate().unwrap(), op);
    }
}

#[test]
fn operators_outside_the_table_cannot_be_negated() {
    for op in [Operator::Ge, Operator::Le, Operator::In, Operator::NotIn] {
        assert!(op.negate().unwrap_err().is_unsupported_negation());
    }
}

#[test]
fn negating_or_group_yields_and_with_negated_leaves() {
    let users = users();
    let from = users.table_reference();

    let mut group = RestrictionGroup::or();
    group
        .restrict(from.output("email").unwrap(), Operator::Eq, "a@b.com")
        .restrict(from.output("age").unwrap(), Operator::Gt, 18)
        .restrict(from.output("email").unwrap(), Operator::Like, "%@b.com");

    let mut negated = group.negate().unwrap();
    negated.normalize();

    assert_eq!(negated.ty(), GroupType::And);
    assert_eq!(
        operators(&negated),
        [Operator::Ne, Operator::Lt, Operator::NotLike]
    );
}

#[test]
fn double_negation_round_trips() {
    let users = users();
    let from = users.table_reference();

    let mut group = RestrictionGroup::and();
    group.restrict(from.output("age").unwrap(), Operator::Lt, 65);
    group
        .group(GroupType::Or)
        .restrict(from.output("email").unwrap(), Operator::Is, Value::Null)
        .restrict(from.output("email").unwrap(), Operator::NotLike, "%spam%");

    let back = group.negate().unwrap().negate().unwrap();

    assert_eq!(back, group);
}

#[test]
fn negating_a_nested_group_flips_it_too() {
    let users = users();
    let from = users.table_reference();

    let mut group = RestrictionGroup::and();
    group
        .group(GroupType::Or)
        .restrict(from.output("age").unwrap(), Operator::Eq, 1)
        .restrict(from.output("age").unwrap(), Operator::Eq, 2);

    let negated = group.negate().unwrap();

    match &negated.children()[0] {
        Condition::Group(nested) => {
            assert_eq!(nested.ty(), GroupType::And);
            assert_eq!(operators(nested), [Operator::Ne, Operator::Ne]);
        }
        Condition::Restriction(_) => panic!("expected a group"),
    }
}

#[test]
fn negation_fails_on_first_unsupported_leaf() {
    let users = users();
    let from = users.table_reference();

    let mut group = RestrictionGroup::and();
    group
        .restrict(from.output("age").unwrap(), Operator::Eq, 1)
        .restrict(from.output("age").unwrap(), Operator::Ge, 2);

    assert!(group.negate().unwrap_err().is_unsupported_negation());
}

#[test]
fn group_type_parses_case_insensitively() {
    assert_eq!("and".parse::<GroupType>().unwrap(), GroupType::And);
    assert_eq!(" OR ".parse::<GroupType>().unwrap(), GroupType::Or);
    assert!("XOR"
        .parse::<GroupType>()
        .unwrap_err()
        .is_invalid_group_type());
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_removes_empty_groups_and_lifts_singletons() {
    let users = users();
    let from = users.table_reference();

    let mut group = RestrictionGroup::and();
    group.restrict(from.output("age").unwrap(), Operator::Gt, 18);
    group.group(GroupType::Or);
    group
        .group(GroupType::Or)
        .restrict(from.output("email").unwrap(), Operator::Eq, "x");

    group.normalize();

    assert_eq!(group.len(), 2);
    assert_eq!(operators(&group), [Operator::Gt, Operator::Eq]);
}

#[test]
fn normalize_splices_groups_of_the_same_type() {
    let users = users();
    let from = users.table_reference();

    let mut group = RestrictionGroup::or();
    group.restrict(from.output("age").unwrap(), Operator::Eq, 1);
    group
        .group(GroupType::Or)
        .restrict(from.output("age").unwrap(), Operator::Eq, 2)
        .restrict(from.output("age").unwrap(), Operator::Eq, 3);

    group.normalize();

    assert_eq!(group.ty(), GroupType::Or);
    assert_eq!(group.len(), 3);
}

#[test]
fn normalize_adopts_a_lone_child_group() {
    let users = users();
    let from = users.table_reference();

    let mut group = RestrictionGroup::and();
    group
        .group(GroupType::Or)
        .restrict(from.output("age").unwrap(), Operator::Eq, 1)
        .restrict(from.output("age").unwrap(), Operator::Eq, 2);

    group.normalize();

    assert_eq!(group.ty(), GroupType::Or);
    assert_eq!(group.len(), 2);
}
