pub mod db;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod product_option {
    pub mod entity;
    pub mod repository;
}
