pub mod list_staff;
