//! UI Components

pub mod add_product;
pub mod alerts;
pub mod balance;
pub mod navbar;
pub mod product_card;
pub mod product_list;

pub use add_product::AddProductModal;
pub use alerts::{ErrorAlert, LoadingAlert, SuccessAlert};
pub use balance::Balance;
pub use navbar::Navbar;
pub use product_card::ProductCard;
pub use product_list::ProductList;
