pub mod list_properties;
