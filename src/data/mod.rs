pub mod components;
pub mod projection;
