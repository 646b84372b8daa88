use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 用户订单表
///
/// `created_at` 是订单唯一的创建时间 (Unix 秒)。
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 订单总价
    pub sum_money: i32,
    pub created_at: i64,
    pub order_status_id: i32,
    pub user_id: i32,
    pub shop_id: i32,
    pub address_id: i32,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_status::Entity",
        from = "Column::OrderStatusId",
        to = "super::order_status::Column::Id"
    )]
    OrderStatus,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::ShopId",
        to = "super::shop::Column::Id"
    )]
    Shop,
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id"
    )]
    Address,
}

impl Related<super::order_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStatus.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shop.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
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
