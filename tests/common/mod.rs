#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use cms_backend::config::DatabaseConfig;
use cms_backend::entities::{
    address, admin, city, food, food_category, order_status, permission, shop, support_service,
    user, user_order,
};
use cms_backend::{Store, bootstrap};

/// 每个测试独立的内存库
pub async fn store() -> Store {
    bootstrap(&DatabaseConfig::sqlite_memory())
        .await
        .expect("bootstrap in-memory sqlite")
}

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn city(name: &str) -> city::Model {
    city::Model {
        name: name.to_string(),
        pinyin: "shanghai".to_string(),
        longitude: 121.47,
        latitude: 31.23,
        area_code: "021".to_string(),
        abbr: "SH".to_string(),
        ..Default::default()
    }
}

pub fn permission(name: &str) -> permission::Model {
    permission::Model {
        level: "admin".to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn admin(username: &str, city_id: i32) -> admin::Model {
    admin::Model {
        username: username.to_string(),
        created_at: at(1_717_243_200),
        status: 1,
        avatar: "default.jpg".to_string(),
        password: "hashed".to_string(),
        city_id,
        ..Default::default()
    }
}

pub fn user(username: &str, city_id: i32) -> user::Model {
    user::Model {
        username: username.to_string(),
        registered_at: at(1_717_243_260),
        mobile: "13800000000".to_string(),
        is_active: true,
        balance: 120,
        avatar: "u.png".to_string(),
        password: "hashed".to_string(),
        city_id,
        ..Default::default()
    }
}

pub fn shop(name: &str) -> shop::Model {
    shop::Model {
        name: name.to_string(),
        address: "1 Nanjing Road".to_string(),
        latitude: 31.2,
        longitude: 121.5,
        description: "noodles".to_string(),
        phone: 13_800_000_000,
        promotion_info: "10% off".to_string(),
        float_delivery_fee: 5,
        float_minimum_order_amount: 20,
        is_premium: true,
        delivery_mode: true,
        is_new: true,
        start_time: "08:30".to_string(),
        end_time: "20:30".to_string(),
        category: "fast food".to_string(),
        status: 1,
        rating: 4,
        ..Default::default()
    }
}

pub fn category(name: &str, restaurant_id: i32, parent: Option<i32>) -> food_category::Model {
    food_category::Model {
        name: name.to_string(),
        description: format!("{name} dishes"),
        level: if parent.is_some() { 2 } else { 1 },
        parent_category_id: parent,
        restaurant_id,
        ..Default::default()
    }
}

pub fn food(name: &str, category_id: i32, restaurant_id: i32) -> food::Model {
    food::Model {
        name: name.to_string(),
        description: "tasty".to_string(),
        rating: 5,
        month_sales: 42,
        image_path: "food.png".to_string(),
        category_id,
        restaurant_id,
        ..Default::default()
    }
}

pub fn order_status(status_id: i32, description: &str) -> order_status::Model {
    order_status::Model {
        status_id,
        description: description.to_string(),
        ..Default::default()
    }
}

pub fn support_service(name: &str) -> support_service::Model {
    support_service::Model {
        name: name.to_string(),
        icon_name: "bao".to_string(),
        icon_color: "999999".to_string(),
        description: "insured delivery".to_string(),
        ..Default::default()
    }
}

pub fn address(line: &str) -> address::Model {
    address::Model {
        address: line.to_string(),
        phone: "13900000000".to_string(),
        address_detail: "room 101".to_string(),
        is_valid: true,
        ..Default::default()
    }
}

pub fn order(user_id: i32, shop_id: i32, order_status_id: i32, address_id: i32) -> user_order::Model {
    user_order::Model {
        sum_money: 36,
        created_at: 1_717_243_300,
        order_status_id,
        user_id,
        shop_id,
        address_id,
        ..Default::default()
    }
}

/// Ids of one row in every parent table an order needs.
pub struct OrderParents {
    pub city_id: i32,
    pub user_id: i32,
    pub shop_id: i32,
    pub status_id: i32,
    pub address_id: i32,
}

pub async fn order_parents(store: &Store) -> OrderParents {
    let city_id = store.cities.create(city("Shanghai")).await.unwrap();
    let user_id = store.users.create(user("alice", city_id)).await.unwrap();
    let shop_id = store.shops.create(shop("Noodle House")).await.unwrap();
    let status_id = store
        .order_statuses
        .create(order_status(1, "paid"))
        .await
        .unwrap();
    let address_id = store.addresses.create(address("2 Huaihai Road")).await.unwrap();
    OrderParents {
        city_id,
        user_id,
        shop_id,
        status_id,
        address_id,
    }
}
