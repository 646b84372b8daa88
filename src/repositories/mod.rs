pub mod association;
pub mod listing;
pub mod relations;
pub mod repository;

pub use association::*;
pub use listing::*;
pub use repository::*;

use crate::database::{self, SchemaRegistry};
use crate::entities::{
    address, admin, city, food, food_category, order_status, permission, permission_admin, shop,
    support_service, support_service_shop, user, user_order,
};
use crate::error::AppResult;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub type PermissionRepository = Repository<permission::Entity>;
pub type CityRepository = Repository<city::Entity>;
pub type AdminRepository = Repository<admin::Entity>;
pub type UserRepository = Repository<user::Entity>;
pub type FoodCategoryRepository = Repository<food_category::Entity>;
pub type FoodRepository = Repository<food::Entity>;
pub type ShopRepository = Repository<shop::Entity>;
pub type OrderStatusRepository = Repository<order_status::Entity>;
pub type SupportServiceRepository = Repository<support_service::Entity>;
pub type UserOrderRepository = Repository<user_order::Entity>;
pub type AddressRepository = Repository<address::Entity>;

/// (permission, admin)
pub type PermissionAdmins = Association<permission_admin::Entity>;
/// (support_service, shop)
pub type SupportServiceShops = Association<support_service_shop::Entity>;

/// 所有仓储共享同一个连接池
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
    registry: Arc<SchemaRegistry>,
    pub permissions: PermissionRepository,
    pub cities: CityRepository,
    pub admins: AdminRepository,
    pub users: UserRepository,
    pub food_categories: FoodCategoryRepository,
    pub foods: FoodRepository,
    pub shops: ShopRepository,
    pub order_statuses: OrderStatusRepository,
    pub support_services: SupportServiceRepository,
    pub user_orders: UserOrderRepository,
    pub addresses: AddressRepository,
    pub permission_admins: PermissionAdmins,
    pub support_service_shops: SupportServiceShops,
}

impl Store {
    pub fn new(db: DatabaseConnection, registry: Arc<SchemaRegistry>) -> Self {
        Self {
            permissions: Repository::new(db.clone(), registry.clone()),
            cities: Repository::new(db.clone(), registry.clone()),
            admins: Repository::new(db.clone(), registry.clone()),
            users: Repository::new(db.clone(), registry.clone()),
            food_categories: Repository::new(db.clone(), registry.clone()),
            foods: Repository::new(db.clone(), registry.clone()),
            shops: Repository::new(db.clone(), registry.clone()),
            order_statuses: Repository::new(db.clone(), registry.clone()),
            support_services: Repository::new(db.clone(), registry.clone()),
            user_orders: Repository::new(db.clone(), registry.clone()),
            addresses: Repository::new(db.clone(), registry.clone()),
            permission_admins: Association::new(db.clone()),
            support_service_shops: Association::new(db.clone()),
            db,
            registry,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// 重新执行表结构同步
    pub async fn sync_schema(&self) -> AppResult<()> {
        database::sync_schema(&self.db, &self.registry).await
    }
}
