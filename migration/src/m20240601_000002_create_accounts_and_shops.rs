use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_reference_tables::{City, Permission, SupportService};

#[derive(DeriveIden)]
enum Admin {
    Table,
    Id,
    Username,
    CreatedAt,
    Status,
    Avatar,
    Password,
    CityId,
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    RegisteredAt,
    Mobile,
    IsActive,
    Balance,
    Avatar,
    Password,
    CityId,
    Deleted,
}

#[derive(DeriveIden)]
pub enum Shop {
    Table,
    Id,
    Name,
    Address,
    Latitude,
    Longitude,
    Description,
    Phone,
    PromotionInfo,
    FloatDeliveryFee,
    FloatMinimumOrderAmount,
    IsPremium,
    DeliveryMode,
    IsNew,
    HasDeliveryInsurance,
    OnTimeDelivery,
    IssuesInvoice,
    StartTime,
    EndTime,
    ImagePath,
    BusinessLicenseImage,
    CateringServiceLicenseImage,
    Category,
    Status,
    RecentOrderNum,
    RatingCount,
    Rating,
    Deleted,
}

#[derive(DeriveIden)]
enum PermissionAdmin {
    Table,
    PermissionId,
    AdminId,
}

#[derive(DeriveIden)]
enum SupportServiceShop {
    Table,
    SupportServiceId,
    ShopId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

fn text(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col).string().not_null().default("").to_owned()
}

fn flag(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col).boolean().not_null().default(false).to_owned()
}

fn counter(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 管理员表 (所属城市外键，不级联删除)
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admin::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Admin::Username)
                            .string_len(12)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Admin::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(&mut counter(Admin::Status))
                    .col(
                        ColumnDef::new(Admin::Avatar)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(&mut text(Admin::Password))
                    .col(ColumnDef::new(Admin::CityId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_city")
                            .from(Admin::Table, Admin::CityId)
                            .to(City::Table, City::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 用户表 (deleted 为软删除标志)
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(&mut text(User::Username))
                    .col(
                        ColumnDef::new(User::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(&mut text(User::Mobile))
                    .col(&mut flag(User::IsActive))
                    .col(&mut counter(User::Balance))
                    .col(&mut text(User::Avatar))
                    .col(&mut text(User::Password))
                    .col(ColumnDef::new(User::CityId).integer().not_null())
                    .col(&mut flag(User::Deleted))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_city")
                            .from(User::Table, User::CityId)
                            .to(City::Table, City::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 商家店铺表
        manager
            .create_table(
                Table::create()
                    .table(Shop::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shop::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(&mut text(Shop::Name))
                    .col(&mut text(Shop::Address))
                    .col(ColumnDef::new(Shop::Latitude).float().not_null().default(0.0))
                    .col(ColumnDef::new(Shop::Longitude).float().not_null().default(0.0))
                    .col(&mut text(Shop::Description))
                    .col(
                        ColumnDef::new(Shop::Phone)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(&mut text(Shop::PromotionInfo))
                    .col(&mut counter(Shop::FloatDeliveryFee))
                    .col(&mut counter(Shop::FloatMinimumOrderAmount))
                    .col(&mut flag(Shop::IsPremium))
                    .col(&mut flag(Shop::DeliveryMode))
                    .col(&mut flag(Shop::IsNew))
                    .col(&mut flag(Shop::HasDeliveryInsurance))
                    .col(&mut flag(Shop::OnTimeDelivery))
                    .col(&mut flag(Shop::IssuesInvoice))
                    .col(&mut text(Shop::StartTime))
                    .col(&mut text(Shop::EndTime))
                    .col(&mut text(Shop::ImagePath))
                    .col(&mut text(Shop::BusinessLicenseImage))
                    .col(&mut text(Shop::CateringServiceLicenseImage))
                    .col(&mut text(Shop::Category))
                    .col(&mut counter(Shop::Status))
                    .col(&mut counter(Shop::RecentOrderNum))
                    .col(&mut counter(Shop::RatingCount))
                    .col(&mut counter(Shop::Rating))
                    .col(&mut flag(Shop::Deleted))
                    .to_owned(),
            )
            .await?;

        // 权限 <-> 管理员 多对多关联表
        manager
            .create_table(
                Table::create()
                    .table(PermissionAdmin::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PermissionAdmin::PermissionId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PermissionAdmin::AdminId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(PermissionAdmin::PermissionId)
                            .col(PermissionAdmin::AdminId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permission_admin_permission")
                            .from(PermissionAdmin::Table, PermissionAdmin::PermissionId)
                            .to(Permission::Table, Permission::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permission_admin_admin")
                            .from(PermissionAdmin::Table, PermissionAdmin::AdminId)
                            .to(Admin::Table, Admin::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 服务 <-> 商家 多对多关联表
        manager
            .create_table(
                Table::create()
                    .table(SupportServiceShop::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupportServiceShop::SupportServiceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupportServiceShop::ShopId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SupportServiceShop::SupportServiceId)
                            .col(SupportServiceShop::ShopId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_service_shop_service")
                            .from(
                                SupportServiceShop::Table,
                                SupportServiceShop::SupportServiceId,
                            )
                            .to(SupportService::Table, SupportService::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_service_shop_shop")
                            .from(SupportServiceShop::Table, SupportServiceShop::ShopId)
                            .to(Shop::Table, Shop::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 外键列索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admin_city")
                    .table(Admin::Table)
                    .col(Admin::CityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_city")
                    .table(User::Table)
                    .col(User::CityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
