use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_reference_tables::{Address, OrderStatus};
use crate::m20240601_000002_create_accounts_and_shops::{Shop, User};

#[derive(DeriveIden)]
enum FoodCategory {
    Table,
    Id,
    Name,
    Description,
    Level,
    ParentCategoryId,
    RestaurantId,
}

#[derive(DeriveIden)]
enum Food {
    Table,
    Id,
    Name,
    Description,
    Rating,
    MonthSales,
    ImagePath,
    Activity,
    Attributes,
    Specs,
    CategoryId,
    RestaurantId,
    Deleted,
}

#[derive(DeriveIden)]
enum UserOrder {
    Table,
    Id,
    SumMoney,
    CreatedAt,
    OrderStatusId,
    UserId,
    ShopId,
    AddressId,
    Deleted,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

fn text(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col).string().not_null().default("").to_owned()
}

fn counter(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 食品种类表：parent_category_id 为自引用外键，顶级分类为 NULL
        manager
            .create_table(
                Table::create()
                    .table(FoodCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodCategory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FoodCategory::Name)
                            .string_len(32)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(FoodCategory::Description)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(&mut counter(FoodCategory::Level))
                    .col(
                        ColumnDef::new(FoodCategory::ParentCategoryId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FoodCategory::RestaurantId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_category_parent")
                            .from(FoodCategory::Table, FoodCategory::ParentCategoryId)
                            .to(FoodCategory::Table, FoodCategory::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_category_shop")
                            .from(FoodCategory::Table, FoodCategory::RestaurantId)
                            .to(Shop::Table, Shop::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 食品表
        manager
            .create_table(
                Table::create()
                    .table(Food::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Food::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(&mut text(Food::Name))
                    .col(&mut text(Food::Description))
                    .col(&mut counter(Food::Rating))
                    .col(&mut counter(Food::MonthSales))
                    .col(&mut text(Food::ImagePath))
                    .col(&mut text(Food::Activity))
                    .col(&mut text(Food::Attributes))
                    .col(&mut text(Food::Specs))
                    .col(ColumnDef::new(Food::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Food::RestaurantId).integer().not_null())
                    .col(
                        ColumnDef::new(Food::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_category")
                            .from(Food::Table, Food::CategoryId)
                            .to(FoodCategory::Table, FoodCategory::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_shop")
                            .from(Food::Table, Food::RestaurantId)
                            .to(Shop::Table, Shop::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 用户订单表：created_at 为唯一的创建时间 (Unix 秒)
        manager
            .create_table(
                Table::create()
                    .table(UserOrder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserOrder::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(&mut counter(UserOrder::SumMoney))
                    .col(
                        ColumnDef::new(UserOrder::CreatedAt)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserOrder::OrderStatusId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserOrder::UserId).integer().not_null())
                    .col(ColumnDef::new(UserOrder::ShopId).integer().not_null())
                    .col(ColumnDef::new(UserOrder::AddressId).integer().not_null())
                    .col(
                        ColumnDef::new(UserOrder::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_order_status")
                            .from(UserOrder::Table, UserOrder::OrderStatusId)
                            .to(OrderStatus::Table, OrderStatus::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_order_user")
                            .from(UserOrder::Table, UserOrder::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_order_shop")
                            .from(UserOrder::Table, UserOrder::ShopId)
                            .to(Shop::Table, Shop::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_order_address")
                            .from(UserOrder::Table, UserOrder::AddressId)
                            .to(Address::Table, Address::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 按关系列表查询时使用的索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_food_category_shop")
                    .table(FoodCategory::Table)
                    .col(FoodCategory::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_food_shop")
                    .table(Food::Table)
                    .col(Food::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_food_category")
                    .table(Food::Table)
                    .col(Food::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_order_user")
                    .table(UserOrder::Table)
                    .col(UserOrder::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_order_shop")
                    .table(UserOrder::Table)
                    .col(UserOrder::ShopId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
