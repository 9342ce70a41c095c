pub mod cart_item;
pub mod favorite;
pub mod inquiry;
pub mod order;
pub mod property;
