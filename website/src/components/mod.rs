pub mod badge;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod product_card;
pub mod product_detail;
