pub mod brand;
pub mod category;
pub mod employee;
pub mod product;
