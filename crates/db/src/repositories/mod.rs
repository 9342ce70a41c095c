pub mod cart_item_repo;
pub mod favorite_repo;
pub mod inquiry_repo;
pub mod order_repo;
pub mod property_repo;

pub use cart_item_repo::CartItemRepo;
pub use favorite_repo::FavoriteRepo;
pub use inquiry_repo::InquiryRepo;
pub use order_repo::OrderRepo;
pub use property_repo::PropertyRepo;
