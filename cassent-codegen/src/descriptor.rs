//! Entity descriptors: the neutral representation emitters consume.

use cassent_schema::Structured;

use crate::{NamingConvention, TargetType, UnmappableType, map_type};

/// Well-known tag key carrying the schema-level identifier of an element or
/// member, so the object-mapping layer can bind generated names back to the
/// schema.
pub const TAG_CQL_NAME: &str = "cql_name";

/// Well-known tag key carrying the originating keyspace.
pub const TAG_KEYSPACE: &str = "keyspace";

/// An ordered key-value metadata tag.
///
/// Emitters render tags with whatever attribute mechanism their language
/// offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

fn tag_value<'a>(tags: &'a [Tag], key: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| tag.key == key)
        .map(|tag| tag.value.as_str())
}

/// One generated field, in schema-declared position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TargetType,
    pub tags: Vec<Tag>,
}

impl FieldDescriptor {
    /// The schema-level identifier this field was generated from.
    pub fn cql_name(&self) -> Option<&str> {
        tag_value(&self.tags, TAG_CQL_NAME)
    }
}

/// One schema element, ready for emission.
///
/// Built once per element from a single metadata snapshot, consumed to emit
/// exactly one artifact, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub tags: Vec<Tag>,
}

impl EntityDescriptor {
    /// The schema-level identifier this entity was generated from.
    pub fn cql_name(&self) -> Option<&str> {
        tag_value(&self.tags, TAG_CQL_NAME)
    }

    /// The keyspace this entity originates from.
    pub fn keyspace(&self) -> Option<&str> {
        tag_value(&self.tags, TAG_KEYSPACE)
    }
}

/// Build the descriptor for one schema element.
///
/// Members are walked in declared order; the first unmappable member fails
/// the whole element and no descriptor is produced. User-defined types and
/// tables take this exact same path.
pub fn build_entity(
    element: &dyn Structured,
    keyspace: &str,
    naming: &NamingConvention,
) -> Result<EntityDescriptor, UnmappableType> {
    let fields = element
        .members()
        .iter()
        .map(|member| {
            Ok(FieldDescriptor {
                name: naming.field_name(&member.name),
                ty: map_type(&member.ty, naming)?,
                tags: vec![Tag::new(TAG_CQL_NAME, &member.name)],
            })
        })
        .collect::<Result<Vec<_>, UnmappableType>>()?;

    Ok(EntityDescriptor {
        name: naming.type_name(element.name()),
        fields,
        tags: vec![
            Tag::new(TAG_CQL_NAME, element.name()),
            Tag::new(TAG_KEYSPACE, keyspace),
        ],
    })
}

#[cfg(test)]
mod tests {
    use cassent_core::{to_camel_case, to_pascal_case};
    use cassent_schema::{Member, NativeType, SchemaType, Table, Udt};

    use super::*;

    const NAMING: NamingConvention = NamingConvention {
        element_to_type: to_pascal_case,
        member_to_field: to_camel_case,
        reserved_words: &["object"],
        escape_reserved: |name| format!("{}_", name),
    };

    #[test]
    fn test_build_from_udt() {
        let udt = Udt {
            name: "user_address".into(),
            fields: vec![
                Member::new("street_name", SchemaType::Native(NativeType::Text)),
                Member::new("zip_code", SchemaType::Native(NativeType::Int)),
            ],
        };

        let entity = build_entity(&udt, "shop", &NAMING).unwrap();

        assert_eq!(entity.name, "UserAddress");
        assert_eq!(entity.cql_name(), Some("user_address"));
        assert_eq!(entity.keyspace(), Some("shop"));

        assert_eq!(entity.fields[0].name, "streetName");
        assert_eq!(entity.fields[0].ty, TargetType::string());
        assert_eq!(entity.fields[0].cql_name(), Some("street_name"));
        assert_eq!(entity.fields[1].name, "zipCode");
        assert_eq!(entity.fields[1].ty, TargetType::int32());
        assert_eq!(entity.fields[1].cql_name(), Some("zip_code"));
    }

    #[test]
    fn test_build_from_table_is_identical_logic() {
        let table = Table {
            name: "orders".into(),
            columns: vec![
                Member::new("order_id", SchemaType::Native(NativeType::Uuid)),
                Member::new("items", SchemaType::list(SchemaType::Native(NativeType::Text))),
            ],
        };

        let entity = build_entity(&table, "shop", &NAMING).unwrap();

        assert_eq!(entity.name, "Orders");
        assert_eq!(entity.fields[0].name, "orderId");
        assert_eq!(entity.fields[0].ty, TargetType::uuid());
        assert_eq!(entity.fields[1].name, "items");
        assert_eq!(entity.fields[1].ty, TargetType::list(TargetType::string()));
    }

    #[test]
    fn test_field_order_matches_declaration() {
        let table = Table {
            name: "events".into(),
            columns: vec![
                Member::new("zulu", SchemaType::Native(NativeType::Text)),
                Member::new("alpha", SchemaType::Native(NativeType::Int)),
                Member::new("mike", SchemaType::Native(NativeType::Boolean)),
            ],
        };

        let entity = build_entity(&table, "ks", &NAMING).unwrap();
        let names: Vec<_> = entity.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_reserved_field_name_is_escaped() {
        let udt = Udt {
            name: "wrapper".into(),
            fields: vec![Member::new("object", SchemaType::Native(NativeType::Text))],
        };

        let entity = build_entity(&udt, "ks", &NAMING).unwrap();
        assert_eq!(entity.fields[0].name, "object_");
        assert_eq!(entity.fields[0].cql_name(), Some("object"));
    }

    #[test]
    fn test_unmappable_member_fails_whole_element() {
        let table = Table {
            name: "orders".into(),
            columns: vec![
                Member::new("order_id", SchemaType::Native(NativeType::Uuid)),
                Member::new("raw", SchemaType::Native(NativeType::Blob)),
            ],
        };

        let err = build_entity(&table, "ks", &NAMING).unwrap_err();
        assert_eq!(err.ty(), "blob");
    }
}
