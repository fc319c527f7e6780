/// Name given to the primary index of every layout.
pub const PRIMARY_INDEX: &str = "PRIMARY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name is unique within its layout
    pub name: String,

    /// Fields included in the index, in order.
    pub fields: Vec<String>,

    /// When `true`, indexed entries are unique
    pub unique: bool,

    /// When `true`, this is the layout's primary key. Primary indexes are
    /// always unique and cover exactly one field.
    pub primary: bool,
}

impl Index {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = S>,
    ) -> Index {
        Index {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            unique: false,
            primary: false,
        }
    }

    pub fn unique<S: Into<String>>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = S>,
    ) -> Index {
        Index {
            unique: true,
            ..Index::new(name, fields)
        }
    }

    pub fn primary(field: impl Into<String>) -> Index {
        Index {
            name: PRIMARY_INDEX.to_string(),
            fields: vec![field.into()],
            unique: true,
            primary: true,
        }
    }

    pub fn covers(&self, field: &str) -> bool {
        self.fields.iter().any(|name| name == field)
    }
}

/// A reference from fields of one layout to the primary key of another.
///
/// Referencing rows are deleted and updated along with the referenced row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: String,

    /// Referencing fields on the owning layout
    pub fields: Vec<String>,

    pub referenced_table: String,

    pub referenced_fields: Vec<String>,
}

impl ForeignKey {
    pub fn covers(&self, field: &str) -> bool {
        self.fields.iter().any(|name| name == field)
    }
}
