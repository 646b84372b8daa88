use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 食品表
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub rating: i32,
    /// 月销量
    pub month_sales: i32,
    pub image_path: String,
    pub activity: String,
    pub attributes: String,
    pub specs: String,
    pub category_id: i32,
    pub restaurant_id: i32,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::food_category::Entity",
        from = "Column::CategoryId",
        to = "super::food_category::Column::Id"
    )]
    FoodCategory,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::RestaurantId",
        to = "super::shop::Column::Id"
    )]
    Shop,
}

impl Related<super::food_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodCategory.def()
    }
}

impl Related<super::shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shop.def()
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
