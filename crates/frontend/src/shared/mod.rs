pub mod api_client;
pub mod components;
pub mod icons;
pub mod notify;
pub mod resource;
