//! Schema-side type model.

use std::fmt;

/// Native CQL type kinds.
///
/// The full native set is representable so that unsupported kinds surface as
/// mapping failures rather than parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Ascii,
    BigInt,
    Blob,
    Boolean,
    Counter,
    Date,
    Decimal,
    Double,
    Duration,
    Float,
    Inet,
    Int,
    SmallInt,
    Text,
    Time,
    Timestamp,
    TimeUuid,
    TinyInt,
    Uuid,
    Varint,
}

impl NativeType {
    /// Parse a native type name as it appears in a type expression.
    ///
    /// `varchar` is the same wire type as `text` and folds into it.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ascii" => Some(Self::Ascii),
            "bigint" => Some(Self::BigInt),
            "blob" => Some(Self::Blob),
            "boolean" => Some(Self::Boolean),
            "counter" => Some(Self::Counter),
            "date" => Some(Self::Date),
            "decimal" => Some(Self::Decimal),
            "double" => Some(Self::Double),
            "duration" => Some(Self::Duration),
            "float" => Some(Self::Float),
            "inet" => Some(Self::Inet),
            "int" => Some(Self::Int),
            "smallint" => Some(Self::SmallInt),
            "text" | "varchar" => Some(Self::Text),
            "time" => Some(Self::Time),
            "timestamp" => Some(Self::Timestamp),
            "timeuuid" => Some(Self::TimeUuid),
            "tinyint" => Some(Self::TinyInt),
            "uuid" => Some(Self::Uuid),
            "varint" => Some(Self::Varint),
            _ => None,
        }
    }

    /// Get the canonical CQL name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::BigInt => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Duration => "duration",
            Self::Float => "float",
            Self::Inet => "inet",
            Self::Int => "int",
            Self::SmallInt => "smallint",
            Self::Text => "text",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::TimeUuid => "timeuuid",
            Self::TinyInt => "tinyint",
            Self::Uuid => "uuid",
            Self::Varint => "varint",
        }
    }
}

/// A schema type expression.
///
/// Containers nest without a depth limit; user-defined types are carried by
/// name and never inlined, so the type graph stays acyclic on the generated
/// side even when the schema's is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    Native(NativeType),
    List(Box<SchemaType>),
    Set(Box<SchemaType>),
    Map(Box<SchemaType>, Box<SchemaType>),
    Tuple(Vec<SchemaType>),
    /// Reference to a user-defined type declared in the same keyspace.
    Udt(String),
    /// A custom marshal class, quoted in the source schema.
    Custom(String),
}

impl SchemaType {
    /// Create a list type.
    pub fn list(inner: SchemaType) -> Self {
        Self::List(Box::new(inner))
    }

    /// Create a set type.
    pub fn set(inner: SchemaType) -> Self {
        Self::Set(Box::new(inner))
    }

    /// Create a map type.
    pub fn map(key: SchemaType, value: SchemaType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Create a user-defined type reference.
    pub fn udt(name: impl Into<String>) -> Self {
        Self::Udt(name.into())
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => f.write_str(native.as_str()),
            Self::List(inner) => write!(f, "list<{}>", inner),
            Self::Set(inner) => write!(f, "set<{}>", inner),
            Self::Map(key, value) => write!(f, "map<{}, {}>", key, value),
            Self::Tuple(items) => {
                f.write_str("tuple<")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(">")
            }
            Self::Udt(name) => f.write_str(name),
            Self::Custom(class) => write!(f, "'{}'", class),
        }
    }
}
