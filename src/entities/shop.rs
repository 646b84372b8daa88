use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 商家店铺表
///
/// 配送费与起送价以分为单位。`start_time`/`end_time` 为营业时间字符串 (如 `08:30`)。
#[derive(Clone, Debug, PartialEq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub latitude: f32,
    pub longitude: f32,
    pub description: String,
    pub phone: i64,
    /// 店铺标语
    pub promotion_info: String,
    pub float_delivery_fee: i32,
    pub float_minimum_order_amount: i32,
    /// 品牌保障
    pub is_premium: bool,
    /// 蜂鸟专送
    pub delivery_mode: bool,
    /// 新开店铺
    pub is_new: bool,
    /// 外卖保
    pub has_delivery_insurance: bool,
    /// 准时达
    pub on_time_delivery: bool,
    /// 开发票
    pub issues_invoice: bool,
    pub start_time: String,
    pub end_time: String,
    pub image_path: String,
    pub business_license_image: String,
    pub catering_service_license_image: String,
    pub category: String,
    pub status: i32,
    /// 最近一个月的销量
    pub recent_order_num: i32,
    pub rating_count: i32,
    pub rating: i32,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::food::Entity")]
    Food,
    #[sea_orm(has_many = "super::food_category::Entity")]
    FoodCategory,
    #[sea_orm(has_many = "super::user_order::Entity")]
    UserOrder,
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
    }
}

impl Related<super::food_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodCategory.def()
    }
}

impl Related<super::user_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserOrder.def()
    }
}

impl Related<super::support_service::Entity> for Entity {
    fn to() -> RelationDef {
        super::support_service_shop::Relation::SupportService.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::support_service_shop::Relation::Shop.def().rev())
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
