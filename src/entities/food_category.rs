use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 食品种类表
///
/// 分类可以组成树：`parent_category_id` 指向上一级分类，顶级分类为 `None`。
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(32))")]
    pub name: String,
    #[sea_orm(column_type = "String(Some(200))")]
    pub description: String,
    pub level: i32,
    pub parent_category_id: Option<i32>,
    /// 所属商铺
    pub restaurant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentCategoryId",
        to = "Column::Id"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::RestaurantId",
        to = "super::shop::Column::Id"
    )]
    Shop,
    #[sea_orm(has_many = "super::food::Entity")]
    Food,
}

impl Related<super::shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shop.def()
    }
}

impl Related<super::food::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Food.def()
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
