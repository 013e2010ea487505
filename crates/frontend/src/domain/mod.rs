pub mod a001_booking;
pub mod a002_driver;
pub mod a003_customer;
pub mod a004_vehicle;
pub mod a005_payment;
pub mod a006_notification;
pub mod a007_platform_settings;
pub mod a008_report;
