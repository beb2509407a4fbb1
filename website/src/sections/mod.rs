pub mod brand_story;
pub mod contact;
pub mod hero;
pub mod product_feature;
pub mod products;
pub mod reviews;
pub mod spirit;
