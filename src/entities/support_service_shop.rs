use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "support_service_shop")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub support_service_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub shop_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::support_service::Entity",
        from = "Column::SupportServiceId",
        to = "super::support_service::Column::Id"
    )]
    SupportService,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::ShopId",
        to = "super::shop::Column::Id"
    )]
    Shop,
}

impl ActiveModelBehavior for ActiveModel {}

impl super::Junction for Entity {
    type Active = ActiveModel;
    type Left = super::support_service::Entity;
    type Right = super::shop::Entity;

    fn left_column() -> Column {
        Column::SupportServiceId
    }

    fn right_column() -> Column {
        Column::ShopId
    }
}
