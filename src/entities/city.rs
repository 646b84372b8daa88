use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 地区城市表
///
/// 经纬度以单精度保存，超过 7 位有效数字的精度不保证往返一致。
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(20))")]
    pub name: String,
    pub pinyin: String,
    pub longitude: f32,
    pub latitude: f32,
    pub area_code: String,
    pub abbr: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::admin::Entity")]
    Admin,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
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
