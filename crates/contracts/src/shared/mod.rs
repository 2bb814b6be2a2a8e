pub mod config;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod theme;
