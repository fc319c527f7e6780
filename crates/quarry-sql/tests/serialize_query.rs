use quarry_core::schema::{Field, Index, Layout};
use quarry_core::stmt::{
    Aggregate, Direction, GroupType, JoinDirection, Operator, OrderBy, Query, SelectExpression,
    Value,
};
use quarry_sql::Serializer;

use pretty_assertions::assert_eq;
use std::sync::Arc;

fn users() -> Arc<Layout> {
    let mut layout = Layout::new("users");
    layout
        .put_field(Field::new("_id", "long:unsigned").auto_increment())
        .unwrap();
    layout
        .put_field(Field::new("email", "string:255").not_null())
        .unwrap();
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

fn alias(query: &Query) -> String {
    query.from().raw().1.to_string()
}

#[test]
fn where_equals_renders_qualified_column() {
    let mut query = Query::new(&users());
    query.where_eq("email", "a@b.com").unwrap();
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`_id`, `{u}`.`email` FROM `users` AS `{u}` WHERE `{u}`.`email` = 'a@b.com'"
        )
    );
}

#[test]
fn empty_restrictions_omit_where() {
    let query = Query::new(&users());
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!("SELECT `{u}`.`_id`, `{u}`.`email` FROM `users` AS `{u}`")
    );
}

#[test]
fn empty_nested_groups_render_nothing() {
    let mut query = Query::new(&users());
    query.group(GroupType::Or);
    query.select("_id").unwrap();
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!("SELECT `{u}`.`_id` FROM `users` AS `{u}`")
    );
}

#[test]
fn nested_groups_are_parenthesized() {
    let mut query = Query::new(&users());
    query.select("_id").unwrap();
    query.where_op("_id", Operator::Gt, 10).unwrap();

    let email = query.output("email").unwrap();
    query
        .group(GroupType::Or)
        .restrict(email.clone(), Operator::Like, "%@a.com")
        .restrict(email, Operator::Is, Value::Null);
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`_id` FROM `users` AS `{u}` WHERE `{u}`.`_id` > 10 \
             AND (`{u}`.`email` LIKE '%@a.com' OR `{u}`.`email` IS null)"
        )
    );
}

#[test]
fn sequences_render_as_membership_tests() {
    let mut query = Query::new(&users());
    query.select("_id").unwrap();
    query.where_eq("_id", vec![1, 2, 3]).unwrap();
    query.where_op("email", Operator::Ne, vec!["a", "b"]).unwrap();
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`_id` FROM `users` AS `{u}` WHERE `{u}`.`_id` IN (1, 2, 3) \
             AND `{u}`.`email` NOT IN ('a', 'b')"
        )
    );
}

#[test]
fn empty_sequences_render_constant_predicates() {
    let mut query = Query::new(&users());
    query.select("_id").unwrap();
    query.where_eq("_id", Vec::<i64>::new()).unwrap();
    query
        .where_op("_id", Operator::NotIn, Vec::<i64>::new())
        .unwrap();
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!("SELECT `{u}`.`_id` FROM `users` AS `{u}` WHERE 0 = 1 AND 1 = 1")
    );
}

#[test]
fn equality_with_null_renders_is() {
    let mut query = Query::new(&users());
    query.select("_id").unwrap();
    query.where_eq("email", Value::Null).unwrap();
    query.where_op("email", Operator::Ne, Value::Null).unwrap();
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`_id` FROM `users` AS `{u}` WHERE `{u}`.`email` IS null \
             AND `{u}`.`email` IS NOT null"
        )
    );
}

#[test]
fn comparing_null_with_greater_than_fails() {
    let mut query = Query::new(&users());
    query.where_op("email", Operator::Gt, Value::Null).unwrap();

    let err = Serializer::mysql().query(&query).unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn aggregates_render_with_alias_and_order_by_alias() {
    let orders = orders();
    let mut query = Query::new(&orders);
    let user = query.output("user").unwrap();
    let total = query.output("total").unwrap();

    let spent = SelectExpression::aggregate(total, Aggregate::Sum, "spent").unwrap();
    query.push_select(SelectExpression::new(user.clone()));
    query.put_order(OrderBy::desc(&spent));
    query.push_select(spent);
    query.group_by(user);
    let o = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{o}`.`user`, SUM(`{o}`.`total`) AS `spent` FROM `orders` AS `{o}` \
             GROUP BY `{o}`.`user` ORDER BY `spent` DESC"
        )
    );
}

#[test]
fn order_by_unknown_alias_fails() {
    let mut query = Query::new(&orders());
    query.put_order(OrderBy::asc(quarry_core::stmt::OrderTarget::Output(
        "spent".to_string(),
    )));

    let err = Serializer::mysql().query(&query).unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn select_alias_and_pagination() {
    let mut query = Query::new(&users());
    query.select_as("email", "login").unwrap();
    query.order_by("_id", Direction::Asc).unwrap();
    query.paginate(3, 25);
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`email` AS `login` FROM `users` AS `{u}` \
             ORDER BY `{u}`.`_id` ASC LIMIT 50, 25"
        )
    );
}

#[test]
fn join_renders_direction_alias_and_on_clause() {
    let users = users();
    let orders = orders();
    let mut query = Query::new(&users);
    query.select("email").unwrap();
    let outer = query.from().clone();

    query
        .join_table(&orders, |join, parent| {
            join.set_direction(JoinDirection::Inner);
            join.on(join.output("user")?, Operator::Eq, outer.output("_id")?);
            parent.where_field(join.output("total")?, Operator::Gt, 100);
            Ok(())
        })
        .unwrap();

    let u = alias(&query);
    let o = query.joins()[0].table().raw().1.to_string();

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`email` FROM `users` AS `{u}` \
             INNER JOIN `orders` AS `{o}` ON (`{o}`.`user` = `{u}`.`_id`) \
             WHERE `{o}`.`total` > 100"
        )
    );
}

#[test]
fn join_without_on_restrictions_fails() {
    let users = users();
    let orders = orders();
    let mut query = Query::new(&users);
    query.join_table(&orders, |_, _| Ok(())).unwrap();

    assert!(Serializer::mysql()
        .query(&query)
        .unwrap_err()
        .is_invalid_statement());
}

#[test]
fn subquery_operand_is_parenthesized() {
    let users = users();
    let orders = orders();

    let mut buyers = Query::new(&orders);
    buyers.select("user").unwrap();
    let o = alias(&buyers);

    let mut query = Query::new(&users);
    query.select("email").unwrap();
    query.where_op("_id", Operator::In, buyers).unwrap();
    let u = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`email` FROM `users` AS `{u}` WHERE `{u}`.`_id` IN \
             (SELECT `{o}`.`user` FROM `orders` AS `{o}`)"
        )
    );
}

#[test]
fn count_query_renders_count_aggregate() {
    let mut query = Query::new(&users());
    query.where_eq("email", "a@b.com").unwrap();
    query.paginate(2, 10);
    let u = alias(&query);

    let count = query.count_query().unwrap();

    assert_eq!(
        Serializer::mysql().query(&count).unwrap(),
        format!(
            "SELECT COUNT(`{u}`.`_id`) AS `__count` FROM `users` AS `{u}` \
             WHERE `{u}`.`email` = 'a@b.com'"
        )
    );
}

#[test]
fn grouped_count_query_counts_the_groups() {
    let orders = orders();
    let mut query = Query::new(&orders);
    let user = query.output("user").unwrap();
    query.push_select(SelectExpression::new(user.clone()));
    query.group_by(user);
    query.where_op("total", Operator::Gt, 10u64).unwrap();
    let o = alias(&query);

    let count = query.count_query().unwrap();

    assert_eq!(
        Serializer::mysql().query(&count).unwrap(),
        format!(
            "SELECT COUNT(DISTINCT `{o}`.`user`) AS `__count` FROM `orders` AS `{o}` \
             WHERE `{o}`.`total` > 10"
        )
    );
}

#[test]
fn literals_follow_the_quoting_policy() {
    let mut query = Query::new(&orders());
    query.select("_id").unwrap();
    query.where_op("total", Operator::Ge, 1.5).unwrap();
    query.where_op("user", Operator::Le, 7u64).unwrap();
    query.where_eq("total", "o'neil").unwrap();
    let o = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{o}`.`_id` FROM `orders` AS `{o}` WHERE `{o}`.`total` >= '1.5' \
             AND `{o}`.`user` <= 7 AND `{o}`.`total` = 'o\\'neil'"
        )
    );
}

#[test]
fn signed_integers_render_unquoted() {
    let mut query = Query::new(&orders());
    query.select("_id").unwrap();
    query.where_op("total", Operator::Gt, -3i64).unwrap();
    query
        .where_eq("user", vec![Value::I64(-1), Value::U64(2)])
        .unwrap();
    let o = alias(&query);

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{o}`.`_id` FROM `orders` AS `{o}` WHERE `{o}`.`total` > -3 \
             AND `{o}`.`user` IN (-1, 2)"
        )
    );
}
