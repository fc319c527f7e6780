use quarry_core::schema::{Field, Index, Layout};
use quarry_core::stmt::{
    Aggregate, Condition, Direction, JoinDirection, Operator, OrderBy, OrderTarget, Query,
    SelectExpression, COUNT_ALIAS,
};

use std::sync::Arc;

fn users() -> Arc<Layout> {
    let mut layout = Layout::new("users");
    layout
        .put_field(Field::new("_id", "long:unsigned").auto_increment())
        .unwrap();
    layout.put_field(Field::new("email", "string:255")).unwrap();
    layout.put_index(Index::primary("_id")).unwrap();
    Arc::new(layout)
}

fn orders() -> Arc<Layout> {
    let mut layout = Layout::new("orders");
    layout
        .put_field(Field::new("_id", "long:unsigned").auto_increment())
        .unwrap();
    layout.put_field(Field::new("user", "long:unsigned")).unwrap();
    layout.put_field(Field::new("total", "double")).unwrap();
    layout.put_index(Index::primary("_id")).unwrap();
    Arc::new(layout)
}

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

#[test]
fn queries_over_one_layout_get_distinct_aliases() {
    let users = users();
    let a = Query::new(&users);
    let b = Query::new(&users);

    assert_eq!(a.from().name(), b.from().name());
    assert_ne!(a.from().raw().1, b.from().raw().1);
}

#[test]
fn alias_is_table_name_with_numeric_suffix() {
    let query = Query::new(&users());
    let (name, alias) = query.from().raw();

    assert_eq!(name, "users");
    let suffix = alias.strip_prefix("users_").unwrap();
    assert!(suffix.parse::<usize>().is_ok());
}

#[test]
fn self_join_sides_do_not_collide() {
    let users = users();
    let mut query = Query::new(&users);
    let outer = query.from().clone();

    query
        .join_table(&users, |join, _| {
            join.on(join.output("_id")?, Operator::Eq, outer.output("_id")?);
            Ok(())
        })
        .unwrap();

    assert_ne!(query.joins()[0].table().raw().1, query.from().raw().1);
}

#[test]
fn field_reference_exposes_alias_and_name() {
    let query = Query::new(&users());
    let field = query.output("email").unwrap();

    assert_eq!(field.raw(), (query.from().raw().1, "email"));
}

// ---------------------------------------------------------------------------
// Selects
// ---------------------------------------------------------------------------

#[test]
fn select_all_follows_layout_order() {
    let mut query = Query::new(&users());
    query.select_all();

    let names: Vec<_> = query.selects().iter().map(|s| s.output_name()).collect();
    assert_eq!(names, ["_id", "email"]);
}

#[test]
fn select_unknown_field_fails() {
    let mut query = Query::new(&users());

    assert!(query.select("password").unwrap_err().is_unknown_field());
}

#[test]
fn aggregate_requires_an_alias() {
    let query = Query::new(&orders());
    let total = query.output("total").unwrap();

    let err = SelectExpression::aggregate(total, Aggregate::Sum, "").unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn aggregate_output_name_is_its_alias() {
    let mut query = Query::new(&orders());
    let total = query.output("total").unwrap();
    query.aggregate(total, Aggregate::Sum, "spent").unwrap();

    let select = &query.selects()[0];
    assert!(select.is_aggregate());
    assert_eq!(select.output_name(), "spent");
}

// ---------------------------------------------------------------------------
// Restrictions, joins, ordering
// ---------------------------------------------------------------------------

#[test]
fn where_exists_passes_the_outer_table() {
    let users = users();
    let orders = orders();
    let mut query = Query::new(&users);

    query
        .where_exists(|outer| {
            let mut sub = Query::new(&orders);
            sub.where_eq("user", outer.output("_id")?)?;
            Ok(sub)
        })
        .unwrap();

    let Condition::Restriction(restriction) = &query.restrictions().children()[0] else {
        panic!("expected a restriction");
    };

    assert!(restriction.is_exists());
    assert_eq!(restriction.operator(), Operator::Eq);
    let sub = restriction.value().as_query().unwrap();
    assert_eq!(sub.from().name(), "orders");
}

#[test]
fn where_not_exists_uses_not_equal() {
    let users = users();
    let orders = orders();
    let mut query = Query::new(&users);

    query
        .where_not_exists(|_| Ok(Query::new(&orders)))
        .unwrap();

    let Condition::Restriction(restriction) = &query.restrictions().children()[0] else {
        panic!("expected a restriction");
    };
    assert_eq!(restriction.operator(), Operator::Ne);
}

#[test]
fn join_callback_can_restrict_the_parent() {
    let users = users();
    let orders = orders();
    let mut query = Query::new(&users);
    let outer = query.from().clone();

    query
        .join_table(&orders, |join, parent| {
            join.set_direction(JoinDirection::Inner);
            join.on(join.output("user")?, Operator::Eq, outer.output("_id")?);
            parent.where_field(join.output("total")?, Operator::Gt, 100);
            Ok(())
        })
        .unwrap();

    assert_eq!(query.joins().len(), 1);
    assert_eq!(query.joins()[0].direction(), JoinDirection::Inner);
    assert_eq!(query.joins()[0].restrictions().len(), 1);
    assert_eq!(query.restrictions().len(), 1);
}

#[test]
fn failed_join_callback_adds_no_join() {
    let users = users();
    let orders = orders();
    let mut query = Query::new(&users);

    let err = query
        .join_table(&orders, |join, _| {
            join.output("missing")?;
            Ok(())
        })
        .unwrap_err();

    assert!(err.is_unknown_field());
    assert!(query.joins().is_empty());
}

#[test]
fn order_by_select_expression_uses_its_alias() {
    let mut query = Query::new(&orders());
    let total = query.output("total").unwrap();
    let spent = SelectExpression::aggregate(total, Aggregate::Sum, "spent").unwrap();

    query.put_order(OrderBy::desc(&spent));
    query.push_select(spent);

    assert_eq!(
        query.order()[0].target,
        OrderTarget::Output("spent".to_string())
    );
    assert_eq!(query.order()[0].direction, Direction::Desc);
}

// ---------------------------------------------------------------------------
// Pagination and counting
// ---------------------------------------------------------------------------

#[test]
fn paginate_is_one_based() {
    let mut query = Query::new(&users());
    assert_eq!(query.limit(), None);

    query.paginate(1, 20);
    assert_eq!(query.limit(), Some((0, 20)));

    query.paginate(3, 20);
    assert_eq!(query.limit(), Some((40, 20)));
}

#[test]
fn count_query_counts_the_primary_field() {
    let mut query = Query::new(&users());
    query.select_all();
    query.where_eq("email", "a@b.com").unwrap();
    query.order_by("email", Direction::Asc).unwrap();
    query.paginate(2, 10);

    let count = query.count_query().unwrap();

    assert_eq!(count.selects().len(), 1);
    assert_eq!(count.selects()[0].output_name(), COUNT_ALIAS);
    assert_eq!(count.selects()[0].input().name(), "_id");
    assert_eq!(count.restrictions(), query.restrictions());
    assert!(count.order().is_empty());
    assert_eq!(count.limit(), None);
}

#[test]
fn count_query_over_one_grouping_counts_distinct_values() {
    let mut query = Query::new(&orders());
    let user = query.output("user").unwrap();
    let total = query.output("total").unwrap();
    query.aggregate(total, Aggregate::Sum, "spent").unwrap();
    query.group_by(user);

    let count = query.count_query().unwrap();

    let select = &count.selects()[0];
    assert_eq!(select.output_name(), COUNT_ALIAS);
    assert_eq!(select.input().name(), "user");
    assert_eq!(select.aggregate_op(), Some(Aggregate::CountDistinct));
    assert!(count.groupings().is_empty());
    assert_eq!(query.groupings().len(), 1);
}

#[test]
fn count_query_rejects_several_groupings() {
    let mut query = Query::new(&orders());
    let user = query.output("user").unwrap();
    let total = query.output("total").unwrap();
    query.group_by(user).group_by(total);

    let err = query.count_query().unwrap_err();
    assert!(err.is_invalid_statement());
}
