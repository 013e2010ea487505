//! Fixtures mirroring the bundled sample data.

use crate::domain::a001_booking::Booking;
use crate::domain::a002_driver::Driver;
use crate::domain::a003_customer::Customer;
use crate::domain::a004_vehicle::Vehicle;
use crate::domain::a005_payment::Payment;
use crate::domain::a006_notification::Notification;
use crate::domain::a007_platform_settings::PlatformSettings;
use crate::enums::*;
use crate::shared::record_set::RecordSet;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Minimal booking for scenario tests
pub fn booking(id: &str, status: BookingStatus, pickup: &str, drop: &str, fare: f64) -> Booking {
    Booking {
        id: id.to_string(),
        customer_id: "CU001".to_string(),
        customer_name: "Raj Patel".to_string(),
        driver_id: None,
        driver_name: None,
        pickup_location: pickup.to_string(),
        drop_location: drop.to_string(),
        fare,
        status,
        booking_time: at(2024, 1, 15, 9, 30),
        distance: None,
        duration: None,
    }
}

pub fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            driver_id: Some("DR001".into()),
            driver_name: Some("Amit Singh".into()),
            distance: Some(65.0),
            duration: Some(75),
            ..booking("BK001", BookingStatus::Completed, "Rajkot Railway Station", "Morbi Bus Stand", 850.0)
        },
        Booking {
            customer_id: "CU002".into(),
            customer_name: "Priya Shah".into(),
            booking_time: at(2024, 1, 15, 14, 20),
            distance: Some(280.0),
            duration: Some(300),
            ..booking("BK002", BookingStatus::Pending, "Ahmedabad Airport", "Surat City", 1200.0)
        },
        Booking {
            customer_id: "CU003".into(),
            customer_name: "Kiran Modi".into(),
            driver_id: Some("DR002".into()),
            driver_name: Some("Rohit Sharma".into()),
            booking_time: at(2024, 1, 15, 16, 45),
            distance: Some(48.0),
            duration: Some(60),
            ..booking("BK003", BookingStatus::Ongoing, "Vadodara Central", "Bharuch GIDC", 650.0)
        },
    ]
}

pub fn sample_drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: "DR001".into(),
            name: "Amit Singh".into(),
            phone: "+91 98765 43210".into(),
            email: "amit.singh@email.com".into(),
            vehicle_number: "GJ-01-AB-1234".into(),
            vehicle_type: "Sedan".into(),
            status: DriverStatus::Active,
            rating: 4.7,
            total_rides: 245,
            earnings: 125000.0,
            documents_status: DocumentsStatus::Verified,
            join_date: at(2023, 6, 15, 0, 0),
            avatar: None,
        },
        Driver {
            id: "DR002".into(),
            name: "Rohit Sharma".into(),
            phone: "+91 87654 32109".into(),
            email: "rohit.sharma@email.com".into(),
            vehicle_number: "GJ-02-CD-5678".into(),
            vehicle_type: "SUV".into(),
            status: DriverStatus::Busy,
            rating: 4.8,
            total_rides: 189,
            earnings: 98000.0,
            documents_status: DocumentsStatus::Verified,
            join_date: at(2023, 8, 22, 0, 0),
            avatar: None,
        },
    ]
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CU001".into(),
            name: "Raj Patel".into(),
            phone: "+91 99887 76543".into(),
            email: "raj.patel@email.com".into(),
            total_rides: 23,
            total_spent: 18500.0,
            rating: 4.5,
            status: CustomerStatus::Active,
            join_date: at(2023, 3, 10, 0, 0),
            avatar: None,
        },
        Customer {
            id: "CU002".into(),
            name: "Priya Shah".into(),
            phone: "+91 88776 65432".into(),
            email: "priya.shah@email.com".into(),
            total_rides: 45,
            total_spent: 32000.0,
            rating: 4.8,
            status: CustomerStatus::Active,
            join_date: at(2023, 1, 20, 0, 0),
            avatar: None,
        },
    ]
}

pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "V001".into(),
            number: "GJ-01-AB-1234".into(),
            vehicle_type: "Sedan".into(),
            model: "Maruti Dzire".into(),
            year: 2021,
            driver_id: "DR001".into(),
            driver_name: "Amit Singh".into(),
            status: VehicleStatus::Active,
            insurance: day(2024, 12, 31),
            permit: day(2024, 10, 15),
        },
        Vehicle {
            id: "V002".into(),
            number: "GJ-02-CD-5678".into(),
            vehicle_type: "SUV".into(),
            model: "Mahindra Scorpio".into(),
            year: 2020,
            driver_id: "DR002".into(),
            driver_name: "Rohit Sharma".into(),
            status: VehicleStatus::Active,
            insurance: day(2024, 11, 20),
            permit: day(2024, 9, 30),
        },
    ]
}

pub fn sample_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "PAY001".into(),
            booking_id: "BK001".into(),
            amount: 850.0,
            commission: 85.0,
            driver_payout: 765.0,
            status: PaymentStatus::Completed,
            method: PaymentMethod::Upi,
            date: at(2024, 1, 15, 10, 45),
        },
        Payment {
            id: "PAY002".into(),
            booking_id: "BK003".into(),
            amount: 650.0,
            commission: 65.0,
            driver_payout: 585.0,
            status: PaymentStatus::Pending,
            method: PaymentMethod::Cash,
            date: at(2024, 1, 15, 17, 30),
        },
    ]
}

pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "N001".into(),
            title: "New Year Special Offers".into(),
            message: "Get 20% off on all rides this New Year! Use code NEWYEAR2024".into(),
            recipient: RecipientGroup::Customers,
            status: NotificationStatus::Sent,
            sent_at: at(2024, 1, 1, 10, 0),
            recipients_count: 245,
        },
        Notification {
            id: "N002".into(),
            title: "Driver Incentive Program".into(),
            message: "Complete 50 rides this month and earn extra ₹5000 bonus!".into(),
            recipient: RecipientGroup::Drivers,
            status: NotificationStatus::Sent,
            sent_at: at(2024, 1, 5, 14, 30),
            recipients_count: 89,
        },
        Notification {
            id: "N003".into(),
            title: "App Maintenance Notice".into(),
            message: "App will be under maintenance on Sunday 2-4 AM. Please plan accordingly.".into(),
            recipient: RecipientGroup::All,
            status: NotificationStatus::Scheduled,
            sent_at: at(2024, 1, 20, 2, 0),
            recipients_count: 334,
        },
    ]
}

pub fn sample_record_set() -> RecordSet {
    RecordSet {
        bookings: sample_bookings(),
        drivers: sample_drivers(),
        customers: sample_customers(),
        vehicles: sample_vehicles(),
        payments: sample_payments(),
        notifications: sample_notifications(),
        settings: PlatformSettings::default(),
    }
}
