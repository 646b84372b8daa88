//! Table metadata for every registered entity.
//!
//! The registry is constructed once at startup and handed to the repositories, which
//! use the recorded foreign keys to check references before writing.

use crate::entities::{
    Junction, address, admin, city, food, food_category, order_status, permission,
    permission_admin, shop, support_service, support_service_shop, user, user_order,
};
use crate::error::{AppError, AppResult};
use sea_orm::sea_query::TableRef;
use sea_orm::{
    ColumnTrait, ColumnType, EntityTrait, IdenStatic, Identity, Iterable, PrimaryKeyToColumn,
    RelationTrait, RelationType,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct ColumnMeta {
    pub name: String,
    pub column_type: ColumnType,
}

/// A column of this table pointing at `parent_table.parent_column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyMeta {
    pub column: String,
    pub parent_table: String,
    pub parent_column: String,
}

#[derive(Debug, Clone)]
pub struct TableMeta {
    pub name: String,
    pub columns: Vec<ColumnMeta>,
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKeyMeta>,
    /// Tables holding a foreign key to this one (reverse one-to-many).
    pub children: Vec<String>,
    /// Join table of a many-to-many relation.
    pub junction: bool,
}

impl TableMeta {
    fn of<E: EntityTrait>(junction: bool) -> Self {
        let entity = E::default();
        let columns = E::Column::iter()
            .map(|column| ColumnMeta {
                name: column.as_str().to_string(),
                column_type: column.def().get_column_type().clone(),
            })
            .collect();
        let primary_key = E::PrimaryKey::iter()
            .map(|key| key.into_column().as_str().to_string())
            .collect();

        let mut foreign_keys = Vec::new();
        let mut children = Vec::new();
        for relation in E::Relation::iter() {
            let def = relation.def();
            match (&def.rel_type, def.is_owner) {
                // belongs_to
                (RelationType::HasOne, false) => {
                    if let (Some(column), Some(parent_table), Some(parent_column)) = (
                        identity_name(&def.from_col),
                        table_ref_name(&def.to_tbl),
                        identity_name(&def.to_col),
                    ) {
                        foreign_keys.push(ForeignKeyMeta {
                            column,
                            parent_table,
                            parent_column,
                        });
                    }
                }
                (RelationType::HasMany, _) => {
                    if let Some(child) = table_ref_name(&def.to_tbl) {
                        children.push(child);
                    }
                }
                _ => {}
            }
        }

        Self {
            name: entity.table_name().to_string(),
            columns,
            primary_key,
            foreign_keys,
            children,
            junction,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn foreign_key(&self, column: &str) -> Option<&ForeignKeyMeta> {
        self.foreign_keys.iter().find(|fk| fk.column == column)
    }
}

fn identity_name(identity: &Identity) -> Option<String> {
    match identity {
        Identity::Unary(iden) => Some(iden.to_string()),
        _ => None,
    }
}

fn table_ref_name(table: &TableRef) -> Option<String> {
    match table {
        TableRef::Table(iden) | TableRef::SchemaTable(_, iden) => Some(iden.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: BTreeMap<String, TableMeta>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every table of the food-ordering schema.
    pub fn food_ordering() -> Self {
        let mut registry = Self::new();
        registry
            .register::<permission::Entity>()
            .register::<city::Entity>()
            .register::<food_category::Entity>()
            .register::<order_status::Entity>()
            .register::<admin::Entity>()
            .register::<user::Entity>()
            .register::<food::Entity>()
            .register::<shop::Entity>()
            .register::<user_order::Entity>()
            .register::<support_service::Entity>()
            .register::<address::Entity>()
            .register_junction::<permission_admin::Entity>()
            .register_junction::<support_service_shop::Entity>();
        registry
    }

    pub fn register<E: EntityTrait>(&mut self) -> &mut Self {
        let meta = TableMeta::of::<E>(false);
        log::debug!(
            "Registered table {} ({} columns, {} foreign keys)",
            meta.name,
            meta.columns.len(),
            meta.foreign_keys.len()
        );
        self.tables.insert(meta.name.clone(), meta);
        self
    }

    pub fn register_junction<J: Junction>(&mut self) -> &mut Self {
        let meta = TableMeta::of::<J>(true);
        log::debug!("Registered join table {}", meta.name);
        self.tables.insert(meta.name.clone(), meta);
        self
    }

    pub fn table(&self, name: &str) -> Option<&TableMeta> {
        self.tables.get(name)
    }

    pub fn table_of<E: EntityTrait>(&self) -> AppResult<&TableMeta> {
        let name = E::default().table_name().to_string();
        self.tables.get(&name).ok_or_else(|| {
            AppError::SchemaSyncError(format!("Table {name} is not registered"))
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableMeta> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fk(column: &str, parent_table: &str) -> ForeignKeyMeta {
        ForeignKeyMeta {
            column: column.to_string(),
            parent_table: parent_table.to_string(),
            parent_column: "id".to_string(),
        }
    }

    #[test]
    fn test_registers_every_table() {
        let registry = SchemaRegistry::food_ordering();
        assert_eq!(registry.len(), 13);
        for name in [
            "permission",
            "city",
            "food_category",
            "order_status",
            "admin",
            "user",
            "food",
            "shop",
            "user_order",
            "support_service",
            "address",
            "permission_admin",
            "support_service_shop",
        ] {
            assert!(registry.table(name).is_some(), "missing table {name}");
        }
    }

    #[test]
    fn test_food_foreign_keys() {
        let registry = SchemaRegistry::food_ordering();
        let food = registry.table_of::<food::Entity>().unwrap();
        assert_eq!(food.primary_key, vec!["id".to_string()]);
        assert_eq!(food.foreign_key("category_id"), Some(&fk("category_id", "food_category")));
        assert_eq!(food.foreign_key("restaurant_id"), Some(&fk("restaurant_id", "shop")));
        assert!(food.column("deleted").is_some());
        assert!(!food.junction);
    }

    #[test]
    fn test_user_order_references_four_parents() {
        let registry = SchemaRegistry::food_ordering();
        let order = registry.table("user_order").unwrap();
        let mut parents: Vec<&str> = order
            .foreign_keys
            .iter()
            .map(|fk| fk.parent_table.as_str())
            .collect();
        parents.sort();
        assert_eq!(parents, vec!["address", "order_status", "shop", "user"]);
    }

    #[test]
    fn test_category_parent_is_self_reference() {
        let registry = SchemaRegistry::food_ordering();
        let category = registry.table("food_category").unwrap();
        assert_eq!(
            category.foreign_key("parent_category_id"),
            Some(&fk("parent_category_id", "food_category"))
        );
    }

    #[test]
    fn test_reverse_relations_and_junctions() {
        let registry = SchemaRegistry::food_ordering();
        let city = registry.table("city").unwrap();
        assert!(city.children.contains(&"user".to_string()));
        assert!(city.children.contains(&"admin".to_string()));

        let join = registry.table("permission_admin").unwrap();
        assert!(join.junction);
        assert_eq!(join.primary_key.len(), 2);
        assert_eq!(join.foreign_keys.len(), 2);
    }

    #[test]
    fn test_unregistered_entity_is_reported() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.table_of::<city::Entity>(),
            Err(AppError::SchemaSyncError(_))
        ));
    }
}
