pub mod list_appointments;
