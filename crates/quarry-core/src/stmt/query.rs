use super::{
    Aggregate, Direction, FieldReference, GroupType, Join, Operand, Operator, OrderBy,
    Restriction, RestrictionGroup, SelectExpression, TableReference,
};
use crate::{schema::Layout, Error, Result};

use std::sync::Arc;

/// Output alias of the aggregate produced by [`Query::count_query`].
pub const COUNT_ALIAS: &str = "__count";

/// A `SELECT` statement under construction.
///
/// Restrictions added through the `where_*` methods land in an implicit root
/// `AND` group. Nested groups are created with [`Query::group`].
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    from: TableReference,
    selects: Vec<SelectExpression>,
    joins: Vec<Join>,
    restrictions: RestrictionGroup,
    order: Vec<OrderBy>,
    group_by: Vec<FieldReference>,
    page: Option<u64>,
    per_page: Option<u64>,
}

impl Query {
    /// Starts a query over a fresh reference to `layout`.
    pub fn new(layout: &Arc<Layout>) -> Query {
        Query::from_table(layout.table_reference())
    }

    pub fn from_table(from: TableReference) -> Query {
        Query {
            from,
            selects: vec![],
            joins: vec![],
            restrictions: RestrictionGroup::and(),
            order: vec![],
            group_by: vec![],
            page: None,
            per_page: None,
        }
    }

    pub fn from(&self) -> &TableReference {
        &self.from
    }

    /// References a column of the `FROM` table.
    pub fn output(&self, name: &str) -> Result<FieldReference> {
        self.from.output(name)
    }

    pub fn selects(&self) -> &[SelectExpression] {
        &self.selects
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn restrictions(&self) -> &RestrictionGroup {
        &self.restrictions
    }

    pub fn restrictions_mut(&mut self) -> &mut RestrictionGroup {
        &mut self.restrictions
    }

    pub fn order(&self) -> &[OrderBy] {
        &self.order
    }

    pub fn groupings(&self) -> &[FieldReference] {
        &self.group_by
    }

    /// Returns `(offset, count)` when the query is paginated.
    pub fn limit(&self) -> Option<(u64, u64)> {
        let per_page = self.per_page?;
        let page = self.page.unwrap_or(1).max(1);
        Some(((page - 1) * per_page, per_page))
    }

    pub fn select(&mut self, name: &str) -> Result<&mut Self> {
        let field = self.output(name)?;
        Ok(self.push_select(SelectExpression::new(field)))
    }

    pub fn select_as(&mut self, name: &str, alias: impl Into<String>) -> Result<&mut Self> {
        let field = self.output(name)?;
        Ok(self.push_select(SelectExpression::new(field).with_alias(alias)))
    }

    pub fn push_select(&mut self, select: SelectExpression) -> &mut Self {
        self.selects.push(select);
        self
    }

    /// Selects every column of the `FROM` table, in layout order.
    pub fn select_all(&mut self) -> &mut Self {
        let from = self.from.clone();
        self.selects
            .extend(from.outputs().map(SelectExpression::new));
        self
    }

    pub fn aggregate(
        &mut self,
        field: FieldReference,
        aggregate: Aggregate,
        alias: impl Into<String>,
    ) -> Result<&mut Self> {
        let select = SelectExpression::aggregate(field, aggregate, alias)?;
        Ok(self.push_select(select))
    }

    /// Restricts `name = value` on the `FROM` table.
    pub fn where_eq(&mut self, name: &str, value: impl Into<Operand>) -> Result<&mut Self> {
        self.where_op(name, Operator::Eq, value)
    }

    pub fn where_op(
        &mut self,
        name: &str,
        operator: Operator,
        value: impl Into<Operand>,
    ) -> Result<&mut Self> {
        let field = self.output(name)?;
        Ok(self.where_field(field, operator, value))
    }

    /// Restricts a column of any table taking part in the query.
    pub fn where_field(
        &mut self,
        field: FieldReference,
        operator: Operator,
        value: impl Into<Operand>,
    ) -> &mut Self {
        self.restrictions.restrict(field, operator, value);
        self
    }

    /// Opens a nested group under the root restriction group.
    pub fn group(&mut self, ty: GroupType) -> &mut RestrictionGroup {
        self.restrictions.group(ty)
    }

    /// Adds an `EXISTS` test. `build` receives this query's `FROM` table so
    /// the subquery can correlate with it.
    pub fn where_exists<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&TableReference) -> Result<Query>,
    {
        let subquery = build(&self.from)?;
        self.restrictions.push(Restriction::exists(subquery));
        Ok(self)
    }

    pub fn where_not_exists<F>(&mut self, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&TableReference) -> Result<Query>,
    {
        let subquery = build(&self.from)?;
        self.restrictions.push(Restriction::not_exists(subquery));
        Ok(self)
    }

    /// Joins a fresh reference to `layout`.
    ///
    /// `build` receives the join, to add `ON` predicates, and this query, to
    /// push restrictions on the joined table into the `WHERE` clause.
    pub fn join_table<F>(&mut self, layout: &Arc<Layout>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Join, &mut Query) -> Result<()>,
    {
        let mut join = Join::new(layout.table_reference());
        build(&mut join, self)?;
        self.joins.push(join);
        Ok(self)
    }

    pub fn put_order(&mut self, order: OrderBy) -> &mut Self {
        self.order.push(order);
        self
    }

    /// Orders by a column of the `FROM` table.
    pub fn order_by(&mut self, name: &str, direction: Direction) -> Result<&mut Self> {
        let field = self.output(name)?;
        Ok(self.put_order(OrderBy {
            target: field.into(),
            direction,
        }))
    }

    pub fn group_by(&mut self, field: FieldReference) -> &mut Self {
        self.group_by.push(field);
        self
    }

    /// Restricts the result to one page. Pages are numbered from 1.
    pub fn paginate(&mut self, page: u64, per_page: u64) -> &mut Self {
        self.page = Some(page.max(1));
        self.per_page = Some(per_page);
        self
    }

    /// The same query reduced to a row count.
    ///
    /// Counts the primary field, or the first field when the table has no
    /// primary key. Ordering and pagination are dropped.
    ///
    /// A query grouped by one field counts its distinct values instead, so
    /// the result is the number of groups. Rows where that field is `NULL`
    /// form no group. Grouping by more than one field is rejected.
    pub fn count_query(&self) -> Result<Query> {
        let (input, aggregate) = match &self.group_by[..] {
            [] => (self.count_input()?, Aggregate::Count),
            [grouping] => (grouping.clone(), Aggregate::CountDistinct),
            groupings => {
                return Err(Error::invalid_statement(format!(
                    "cannot count a query grouped by {} fields",
                    groupings.len()
                )))
            }
        };

        let mut query = self.clone();
        query.selects = vec![SelectExpression::aggregate(input, aggregate, COUNT_ALIAS)?];
        query.group_by.clear();
        query.order.clear();
        query.page = None;
        query.per_page = None;
        Ok(query)
    }

    fn count_input(&self) -> Result<FieldReference> {
        let layout = self.from.layout();
        let field = layout
            .primary_field()
            .or_else(|| layout.fields().next())
            .ok_or_else(|| {
                Error::invalid_statement(format!("table `{}` has no fields", layout.name()))
            })?;

        self.from.output(&field.name)
    }
}
