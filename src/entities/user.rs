use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 用户信息表
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub registered_at: DateTime<Utc>,
    pub mobile: String,
    pub is_active: bool,
    /// 账户余额
    pub balance: i32,
    pub avatar: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub city_id: i32,
    /// 软删除标志
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id"
    )]
    City,
    #[sea_orm(has_many = "super::user_order::Entity")]
    UserOrder,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::user_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserOrder.def()
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

impl super::SoftDelete for Entity {
    fn deleted_column() -> Column {
        Column::Deleted
    }
}
