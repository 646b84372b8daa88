use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
    Pinyin,
    Longitude,
    Latitude,
    AreaCode,
    Abbr,
}

/// 管理员权限等级
#[derive(DeriveIden)]
pub enum Permission {
    Table,
    Id,
    Level,
    Name,
}

#[derive(DeriveIden)]
pub enum OrderStatus {
    Table,
    Id,
    StatusId,
    Description,
}

/// 商家支持的服务 (品牌保障、准时达等)
#[derive(DeriveIden)]
pub enum SupportService {
    Table,
    Id,
    Name,
    IconName,
    IconColor,
    Description,
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    Address,
    Phone,
    AddressDetail,
    IsValid,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(City::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(City::Name).string_len(20).not_null().default(""))
                    .col(ColumnDef::new(City::Pinyin).string().not_null().default(""))
                    .col(ColumnDef::new(City::Longitude).float().not_null().default(0.0))
                    .col(ColumnDef::new(City::Latitude).float().not_null().default(0.0))
                    .col(ColumnDef::new(City::AreaCode).string().not_null().default(""))
                    .col(ColumnDef::new(City::Abbr).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Permission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Permission::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Permission::Level)
                            .string_len(30)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Permission::Name)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderStatus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderStatus::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrderStatus::StatusId)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(OrderStatus::Description)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportService::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupportService::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupportService::Name)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SupportService::IconName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SupportService::IconColor)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SupportService::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Address::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Address::Address).string().not_null().default(""))
                    .col(ColumnDef::new(Address::Phone).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Address::AddressDetail)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Address::IsValid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // 只做增量建表，不提供回滚删除
        Ok(())
    }
}
