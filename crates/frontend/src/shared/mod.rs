pub mod class_names;
pub mod components;
pub mod config;
pub mod icons;
pub mod list_utils;
pub mod selection;
pub mod theme;
