use crate::{Error, Result};

use std::fmt;

/// Default length of a `string` column declared without one.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// A column type, parsed from the `"base[:modifier]"` type-string vocabulary.
///
/// | type string      | variant                           |
/// |------------------|-----------------------------------|
/// | `int`            | `Int { unsigned: false }`         |
/// | `long:unsigned`  | `Long { unsigned: true }`         |
/// | `string:64`      | `String(64)`                      |
/// | `enum:a,b,c`     | `Enum(vec!["a", "b", "c"])`       |
/// | `text`, `blob`, `bool`, `float`, `double` | the matching unit variant |
///
/// Layouts keep the raw type string on each field. The grammar parses it when
/// rendering DDL, which is where an unknown base type is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// 32-bit integer
    Int { unsigned: bool },

    /// 64-bit integer
    Long { unsigned: bool },

    /// Text with an explicit maximum length
    String(u32),

    /// Unconstrained text
    Text,

    /// Unconstrained binary
    Blob,

    Bool,

    Float,

    Double,

    /// One of a closed set of string values
    Enum(Vec<String>),
}

impl ColumnType {
    /// Parses a type string, failing with an invalid type error when the base
    /// type or its modifier is not recognized.
    pub fn parse(ty: &str) -> Result<ColumnType> {
        let (base, modifier) = match ty.split_once(':') {
            Some((base, modifier)) => (base.trim(), Some(modifier.trim())),
            None => (ty.trim(), None),
        };

        let parsed = match (base, modifier) {
            ("int", None) => ColumnType::Int { unsigned: false },
            ("int", Some("unsigned")) => ColumnType::Int { unsigned: true },
            ("long", None) => ColumnType::Long { unsigned: false },
            ("long", Some("unsigned")) => ColumnType::Long { unsigned: true },
            ("string", None) => ColumnType::String(DEFAULT_STRING_LENGTH),
            ("string", Some(length)) => match length.parse::<u32>() {
                Ok(length) if length > 0 => ColumnType::String(length),
                _ => return Err(Error::invalid_type(ty)),
            },
            ("text", None) => ColumnType::Text,
            ("blob", None) => ColumnType::Blob,
            ("bool", None) => ColumnType::Bool,
            ("float", None) => ColumnType::Float,
            ("double", None) => ColumnType::Double,
            ("enum", Some(options)) => {
                let options: Vec<String> = options
                    .split(',')
                    .map(str::trim)
                    .filter(|option| !option.is_empty())
                    .map(String::from)
                    .collect();

                if options.is_empty() {
                    return Err(Error::invalid_type(ty));
                }

                ColumnType::Enum(options)
            }
            _ => return Err(Error::invalid_type(ty)),
        };

        Ok(parsed)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::Int { .. } | ColumnType::Long { .. })
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            ColumnType::Int { unsigned: true } | ColumnType::Long { unsigned: true }
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Int { unsigned: false } => f.write_str("int"),
            ColumnType::Int { unsigned: true } => f.write_str("int:unsigned"),
            ColumnType::Long { unsigned: false } => f.write_str("long"),
            ColumnType::Long { unsigned: true } => f.write_str("long:unsigned"),
            ColumnType::String(length) => write!(f, "string:{length}"),
            ColumnType::Text => f.write_str("text"),
            ColumnType::Blob => f.write_str("blob"),
            ColumnType::Bool => f.write_str("bool"),
            ColumnType::Float => f.write_str("float"),
            ColumnType::Double => f.write_str("double"),
            ColumnType::Enum(options) => write!(f, "enum:{}", options.join(",")),
        }
    }
}
