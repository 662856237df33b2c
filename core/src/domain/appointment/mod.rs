pub mod policies;
pub mod value_objects;
