use super::{Field, ForeignKey, Index};

/// A single structural change to a [`Layout`](super::Layout).
///
/// Migration executors express every DSL call as a list of changes. The
/// in-memory layout applies them and the grammar renders them as one
/// `ALTER TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutChange {
    AddField(Field),
    DropField(String),
    AddIndex(Index),
    DropIndex(String),
    AddForeignKey(ForeignKey),
    DropForeignKey(String),
}

