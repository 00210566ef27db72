pub mod error;
pub mod security;
pub mod tags;

pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod product_option {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
