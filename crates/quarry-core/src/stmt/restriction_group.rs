use super::{FieldReference, Operand, Operator, Restriction};
use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// How the children of a [`RestrictionGroup`] combine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GroupType {
    And,
    Or,
}

impl GroupType {
    pub fn flip(self) -> GroupType {
        match self {
            GroupType::And => GroupType::Or,
            GroupType::Or => GroupType::And,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupType::And => "AND",
            GroupType::Or => "OR",
        }
    }
}

impl FromStr for GroupType {
    type Err = Error;

    fn from_str(s: &str) -> Result<GroupType> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(GroupType::And),
            "OR" => Ok(GroupType::Or),
            _ => Err(Error::invalid_group_type(s)),
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child of a [`RestrictionGroup`].
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Restriction(Restriction),
    Group(RestrictionGroup),
}

impl Condition {
    pub fn negate(&self) -> Result<Condition> {
        match self {
            Condition::Restriction(restriction) => restriction.negate().map(Condition::Restriction),
            Condition::Group(group) => group.negate().map(Condition::Group),
        }
    }

    fn is_empty_group(&self) -> bool {
        matches!(self, Condition::Group(group) if group.is_empty())
    }
}

impl From<Restriction> for Condition {
    fn from(value: Restriction) -> Self {
        Condition::Restriction(value)
    }
}

impl From<RestrictionGroup> for Condition {
    fn from(value: RestrictionGroup) -> Self {
        Condition::Group(value)
    }
}

/// An AND/OR tree of restrictions.
#[derive(Debug, Clone, PartialEq)]
pub struct RestrictionGroup {
    ty: GroupType,
    children: Vec<Condition>,
}

impl RestrictionGroup {
    pub fn new(ty: GroupType) -> RestrictionGroup {
        RestrictionGroup {
            ty,
            children: vec![],
        }
    }

    pub fn and() -> RestrictionGroup {
        RestrictionGroup::new(GroupType::And)
    }

    pub fn or() -> RestrictionGroup {
        RestrictionGroup::new(GroupType::Or)
    }

    pub fn ty(&self) -> GroupType {
        self.ty
    }

    pub fn children(&self) -> &[Condition] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn push(&mut self, condition: impl Into<Condition>) -> &mut Self {
        self.children.push(condition.into());
        self
    }

    /// Appends `field <operator> value`.
    pub fn restrict(
        &mut self,
        field: FieldReference,
        operator: Operator,
        value: impl Into<Operand>,
    ) -> &mut Self {
        self.push(Restriction::new(field, operator, value))
    }

    /// Appends a nested group and returns it for further restriction.
    pub fn group(&mut self, ty: GroupType) -> &mut RestrictionGroup {
        self.children
            .push(Condition::Group(RestrictionGroup::new(ty)));

        match self.children.last_mut() {
            Some(Condition::Group(group)) => group,
            _ => unreachable!(),
        }
    }

    /// Negates the whole tree using De Morgan's law: the group type flips
    /// and every child is negated.
    ///
    /// The result is already normalized with respect to negation: every
    /// negation lands on a leaf operator, so the grammar never sees a
    /// negated group. Fails on the first leaf whose operator has no
    /// negation.
    pub fn negate(&self) -> Result<RestrictionGroup> {
        Ok(RestrictionGroup {
            ty: self.ty.flip(),
            children: self
                .children
                .iter()
                .map(Condition::negate)
                .collect::<Result<_>>()?,
        })
    }

    /// Simplifies the tree without changing its meaning.
    ///
    /// * empty nested groups are removed
    /// * a nested group with one child is replaced by that child
    /// * a nested group of the same type as its parent is spliced into it
    /// * a group whose only child is a group becomes that group
    pub fn normalize(&mut self) {
        let children = std::mem::take(&mut self.children);

        for mut child in children {
            if let Condition::Group(group) = &mut child {
                group.normalize();
            }

            if child.is_empty_group() {
                continue;
            }

            match child {
                Condition::Group(mut group) if group.children.len() == 1 => {
                    self.children.extend(group.children.pop());
                }
                Condition::Group(group) if group.ty == self.ty => {
                    self.children.extend(group.children);
                }
                child => self.children.push(child),
            }
        }

        if let [Condition::Group(_)] = &self.children[..] {
            if let Some(Condition::Group(group)) = self.children.pop() {
                *self = group;
            }
        }
    }
}

impl Default for RestrictionGroup {
    fn default() -> Self {
        RestrictionGroup::and()
    }
}
