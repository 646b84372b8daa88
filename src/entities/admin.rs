use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 管理员表
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(12))")]
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub status: i32,
    #[sea_orm(column_type = "String(Some(50))")]
    pub avatar: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub city_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id"
    )]
    City,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::permission_admin::Relation::Permission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::permission_admin::Relation::Admin.def().rev())
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
