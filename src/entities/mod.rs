//! sea-orm entities for the food-ordering administration schema.
//!
//! Every table with a surrogate `id` implements [`Persisted`]; the four tables that
//! are never physically deleted implement [`SoftDelete`]; the two many-to-many join
//! tables implement [`Junction`].

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait};

pub mod address;
pub mod admin;
pub mod city;
pub mod food;
pub mod food_category;
pub mod order_status;
pub mod permission;
pub mod permission_admin;
pub mod shop;
pub mod support_service;
pub mod support_service_shop;
pub mod user;
pub mod user_order;

pub use address as address_entity;
pub use admin as admin_entity;
pub use city as city_entity;
pub use food as food_entity;
pub use food_category as food_category_entity;
pub use order_status as order_status_entity;
pub use permission as permission_entity;
pub use permission_admin as permission_admin_entity;
pub use shop as shop_entity;
pub use support_service as support_service_entity;
pub use support_service_shop as support_service_shop_entity;
pub use user as user_entity;
pub use user_order as user_order_entity;

/// A table keyed by a single auto-increment `i32` id.
pub trait Persisted: EntityTrait {
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;

    fn id_column() -> Self::Column;

    fn id_of(model: &Self::Model) -> i32;
}

/// Rows are hidden by a boolean `deleted` column instead of being removed.
pub trait SoftDelete: Persisted {
    fn deleted_column() -> Self::Column;
}

/// Join table of a many-to-many relation, keyed by the pair of ids.
pub trait Junction: EntityTrait {
    type Active: ActiveModelTrait<Entity = Self> + Send + 'static;
    type Left: Persisted;
    type Right: Persisted;

    fn left_column() -> Self::Column;

    fn right_column() -> Self::Column;
}
