use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 商家所支持的服务，图标名称与颜色由前端使用
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "support_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub icon_name: String,
    pub icon_color: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::shop::Entity> for Entity {
    fn to() -> RelationDef {
        super::support_service_shop::Relation::Shop.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::support_service_shop::Relation::SupportService.def().rev())
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
