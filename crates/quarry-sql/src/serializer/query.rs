use super::{restriction::is_vacuous, Comma, Formatter, Ident, ToSql};
use crate::{
    quoter::Quoter,
    stmt::{Join, OrderBy, OrderTarget, Query, SelectExpression},
};

use quarry_core::{Error, Result};

/// The select list. An empty list selects every column of the `FROM` table.
struct SelectList<'a>(&'a Query);

/// One `ORDER BY` entry, checked against the query's select list.
struct OrderEntry<'a>(&'a Query, &'a OrderBy);

impl ToSql for &Query {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let (table, alias) = self.from().raw();
        let selects = SelectList(self);

        fmt!(f, "SELECT " selects " FROM " Ident(table) " AS " Ident(alias));

        for join in self.joins() {
            fmt!(f, join);
        }

        if !is_vacuous(self.restrictions()) {
            fmt!(f, " WHERE " self.restrictions());
        }

        if !self.groupings().is_empty() {
            fmt!(f, " GROUP BY " Comma(self.groupings()));
        }

        if !self.order().is_empty() {
            let order = Comma(self.order().iter().map(|order| OrderEntry(self, order)));
            fmt!(f, " ORDER BY " order);
        }

        if let Some((offset, count)) = self.limit() {
            fmt!(f, " LIMIT " offset ", " count);
        }

        Ok(())
    }
}

impl ToSql for SelectList<'_> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        if self.0.selects().is_empty() {
            let all: Vec<_> = self.0.from().outputs().collect();
            fmt!(f, Comma(&all));
        } else {
            fmt!(f, Comma(self.0.selects()));
        }

        Ok(())
    }
}

impl ToSql for &SelectExpression {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let input = self.input();

        match (self.aggregate_op(), self.alias()) {
            (Some(aggregate), Some(alias)) => {
                let distinct = if aggregate.is_distinct() { "DISTINCT " } else { "" };
                fmt!(f, aggregate.as_str() "(" distinct input ") AS " Ident(alias));
            }
            (Some(aggregate), None) => {
                return Err(Error::invalid_statement(format!(
                    "{aggregate} over `{}` requires an alias",
                    input.name()
                )));
            }
            (None, Some(alias)) => fmt!(f, input " AS " Ident(alias)),
            (None, None) => fmt!(f, input),
        }

        Ok(())
    }
}

impl ToSql for &Join {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let (table, alias) = self.table().raw();

        if is_vacuous(self.restrictions()) {
            return Err(Error::invalid_statement(format!(
                "join on `{table}` has no ON restrictions"
            )));
        }

        fmt!(
            f, " " self.direction().as_str() " JOIN " Ident(table) " AS " Ident(alias)
            " ON (" self.restrictions() ")"
        );

        Ok(())
    }
}

impl ToSql for OrderEntry<'_> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let OrderEntry(query, order) = self;

        match &order.target {
            OrderTarget::Field(field) => fmt!(f, field),
            OrderTarget::Output(name) => {
                let known = query
                    .selects()
                    .iter()
                    .any(|select| select.alias() == Some(name.as_str()));

                if !known {
                    return Err(Error::invalid_statement(format!(
                        "cannot order by `{name}`: no select expression has that alias"
                    )));
                }

                fmt!(f, Ident(name));
            }
        }

        fmt!(f, " " order.direction.as_str());
        Ok(())
    }
}
