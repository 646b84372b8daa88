//! 按实体命名的关系查询

use crate::entities::{
    address, admin, city, food, food_category, order_status, permission, shop, support_service,
    user, user_order,
};
use crate::repositories::{Listing, Repository};
use sea_orm::ColumnTrait;

impl Repository<food::Entity> {
    pub fn by_shop(&self, shop_id: i32) -> Listing<food::Entity> {
        self.list_by::<shop::Entity>(shop_id)
    }

    pub fn by_category(&self, category_id: i32) -> Listing<food::Entity> {
        self.list_by::<food_category::Entity>(category_id)
    }
}

impl Repository<food_category::Entity> {
    pub fn by_shop(&self, shop_id: i32) -> Listing<food_category::Entity> {
        self.list_by::<shop::Entity>(shop_id)
    }

    /// 直接下级分类
    pub fn children(&self, category_id: i32) -> Listing<food_category::Entity> {
        self.list_where(food_category::Column::ParentCategoryId.eq(category_id))
    }

    /// 顶级分类
    pub fn roots(&self) -> Listing<food_category::Entity> {
        self.list_where(food_category::Column::ParentCategoryId.is_null())
    }
}

impl Repository<user_order::Entity> {
    pub fn by_user(&self, user_id: i32) -> Listing<user_order::Entity> {
        self.list_by::<user::Entity>(user_id)
    }

    pub fn by_shop(&self, shop_id: i32) -> Listing<user_order::Entity> {
        self.list_by::<shop::Entity>(shop_id)
    }

    pub fn by_status(&self, order_status_id: i32) -> Listing<user_order::Entity> {
        self.list_by::<order_status::Entity>(order_status_id)
    }

    pub fn by_address(&self, address_id: i32) -> Listing<user_order::Entity> {
        self.list_by::<address::Entity>(address_id)
    }
}

impl Repository<user::Entity> {
    pub fn by_city(&self, city_id: i32) -> Listing<user::Entity> {
        self.list_by::<city::Entity>(city_id)
    }
}

impl Repository<admin::Entity> {
    pub fn by_city(&self, city_id: i32) -> Listing<admin::Entity> {
        self.list_by::<city::Entity>(city_id)
    }

    pub fn by_permission(&self, permission_id: i32) -> Listing<admin::Entity> {
        self.list_by::<permission::Entity>(permission_id)
    }
}

impl Repository<permission::Entity> {
    pub fn by_admin(&self, admin_id: i32) -> Listing<permission::Entity> {
        self.list_by::<admin::Entity>(admin_id)
    }
}

impl Repository<shop::Entity> {
    pub fn by_support_service(&self, service_id: i32) -> Listing<shop::Entity> {
        self.list_by::<support_service::Entity>(service_id)
    }
}

impl Repository<support_service::Entity> {
    pub fn by_shop(&self, shop_id: i32) -> Listing<support_service::Entity> {
        self.list_by::<shop::Entity>(shop_id)
    }
}
