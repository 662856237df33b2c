pub mod get_options;
