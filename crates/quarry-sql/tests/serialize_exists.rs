use quarry_core::schema::{Field, Index, Layout};
use quarry_core::stmt::{GroupType, Operator, Query};
use quarry_sql::{Serializer, Statement};

use pretty_assertions::assert_eq;
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

#[test]
fn where_exists_renders_correlated_subquery() {
    let users = users();
    let orders = orders();

    let mut query = Query::new(&users);
    query.select("email").unwrap();

    let mut inner = None;
    query
        .where_exists(|outer| {
            let mut sub = Query::new(&orders);
            sub.select("_id")?;
            sub.where_eq("user", outer.output("_id")?)?;
            inner = Some(sub.from().raw().1.to_string());
            Ok(sub)
        })
        .unwrap();

    let u = query.from().raw().1.to_string();
    let o = inner.unwrap();

    assert_eq!(
        Serializer::mysql().query(&query).unwrap(),
        format!(
            "SELECT `{u}`.`email` FROM `users` AS `{u}` WHERE EXISTS \
             (SELECT `{o}`.`_id` FROM `orders` AS `{o}` WHERE `{o}`.`user` = `{u}`.`_id`)"
        )
    );
}

#[test]
fn where_not_exists_renders_not_exists() {
    let users = users();
    let orders = orders();

    let mut query = Query::new(&users);
    query.select("email").unwrap();
    query
        .where_not_exists(|outer| {
            let mut sub = Query::new(&orders);
            sub.select("_id")?;
            sub.where_eq("user", outer.output("_id")?)?;
            Ok(sub)
        })
        .unwrap();

    let sql = Serializer::mysql().query(&query).unwrap();
    assert!(sql.contains(" WHERE NOT EXISTS (SELECT "));
}

#[test]
fn self_referencing_subquery_uses_a_distinct_alias() {
    let users = users();

    let mut query = Query::new(&users);
    query.select("_id").unwrap();
    query
        .where_exists(|outer| {
            let mut sub = Query::new(&users);
            sub.select("_id")?;
            sub.where_op("_id", Operator::Gt, outer.output("_id")?)?;
            Ok(sub)
        })
        .unwrap();

    let sql = Serializer::mysql().query(&query).unwrap();
    let u = query.from().raw().1;

    assert_eq!(sql.matches("FROM `users` AS").count(), 2);
    assert_eq!(sql.matches(&format!("AS `{u}`")).count(), 1);
}

#[test]
fn negated_group_renders_flipped_operators() {
    let users = users();
    let mut query = Query::new(&users);
    query.select("_id").unwrap();

    let id = query.output("_id").unwrap();
    let email = query.output("email").unwrap();

    let mut group = quarry_core::stmt::RestrictionGroup::or();
    group
        .restrict(id, Operator::Gt, 10)
        .restrict(email, Operator::Like, "%@spam.com");

    let mut negated = group.negate().unwrap();
    negated.normalize();
    assert_eq!(negated.ty(), GroupType::And);
    *query.restrictions_mut() = negated;

    let u = query.from().raw().1.to_string();

    assert_eq!(
        Serializer::mysql()
            .serialize(&Statement::from(query))
            .unwrap(),
        format!(
            "SELECT `{u}`.`_id` FROM `users` AS `{u}` WHERE `{u}`.`_id` < 10 \
             AND `{u}`.`email` NOT LIKE '%@spam.com'"
        )
    );
}
