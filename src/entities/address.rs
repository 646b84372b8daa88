use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 订单配送地址
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub address: String,
    /// 联系人手机号
    pub phone: String,
    pub address_detail: String,
    pub is_valid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_order::Entity")]
    UserOrder,
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
