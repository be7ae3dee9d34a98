pub mod csv_export;
pub mod session;
pub mod uploads;
