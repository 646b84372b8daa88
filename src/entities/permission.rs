use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 管理员权限等级及级别名称
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(30))")]
    pub level: String,
    #[sea_orm(column_type = "String(Some(20))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        super::permission_admin::Relation::Admin.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::permission_admin::Relation::Permission.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl super::Persisted for Entity {
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn id_of(model: &Model) -> i32 {
        model.id
    }
}
