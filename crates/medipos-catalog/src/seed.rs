//! # Seed Data
//!
//! The demo data set the dashboard ships with: six pharmacy products, four
//! customers, the morning's transactions, and the pre-aggregated report
//! figures. All amounts are paise.
//!
//! Timestamps are relative to a `now` passed by the caller so nothing in
//! this crate reads the clock.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use medipos_core::types::{
    Customer, CustomerStatus, PaymentMethod, Product, ProductStatus, Transaction,
    TransactionStatus,
};

use crate::figures::{CategoryShare, GstMonth, ReportArchive, SalesFigure, TopProduct};
use crate::{Catalog, CustomerDirectory, ProductCatalog, TransactionLog};

/// Builds the complete seeded catalog.
pub fn demo_catalog(now: DateTime<Utc>) -> Catalog {
    Catalog {
        products: ProductCatalog::new(demo_products()),
        customers: CustomerDirectory::new(demo_customers()),
        transactions: TransactionLog::new(demo_transactions(now)),
        reports: demo_report_archive(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are hard-coded literals and always valid
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The six demo products.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Paracetamol 500mg".to_string(),
            salt: "Paracetamol".to_string(),
            manufacturer: "Cipla".to_string(),
            category: "Pain Relief".to_string(),
            batch: "BATCH001".to_string(),
            mrp_paise: 1500,
            cost_price_paise: 800,
            selling_price_paise: 1200,
            current_stock: 150,
            min_stock: 50,
            max_stock: 200,
            expiry_date: date(2024, 12, 31),
            rack_location: "A1-B2".to_string(),
            barcode: "8901234567890".to_string(),
            status: ProductStatus::Active,
        },
        Product {
            id: "2".to_string(),
            name: "Amoxicillin 250mg".to_string(),
            salt: "Amoxicillin".to_string(),
            manufacturer: "Sun Pharma".to_string(),
            category: "Antibiotics".to_string(),
            batch: "BATCH002".to_string(),
            mrp_paise: 4500,
            cost_price_paise: 2500,
            selling_price_paise: 3800,
            current_stock: 8,
            min_stock: 30,
            max_stock: 100,
            expiry_date: date(2024, 6, 15),
            rack_location: "A2-C1".to_string(),
            barcode: "8901234567891".to_string(),
            status: ProductStatus::LowStock,
        },
        Product {
            id: "3".to_string(),
            name: "Vitamin D3 1000IU".to_string(),
            salt: "Cholecalciferol".to_string(),
            manufacturer: "HealthVit".to_string(),
            category: "Vitamins".to_string(),
            batch: "BATCH003".to_string(),
            mrp_paise: 12000,
            cost_price_paise: 6000,
            selling_price_paise: 9500,
            current_stock: 60,
            min_stock: 40,
            max_stock: 150,
            expiry_date: date(2025, 3, 20),
            rack_location: "B1-A3".to_string(),
            barcode: "8901234567892".to_string(),
            status: ProductStatus::Active,
        },
        Product {
            id: "4".to_string(),
            name: "Omeprazole 20mg".to_string(),
            salt: "Omeprazole".to_string(),
            manufacturer: "Dr. Reddy's".to_string(),
            category: "Gastrointestinal".to_string(),
            batch: "BATCH004".to_string(),
            mrp_paise: 8500,
            cost_price_paise: 4500,
            selling_price_paise: 7200,
            current_stock: 5,
            min_stock: 25,
            max_stock: 80,
            expiry_date: date(2024, 8, 10),
            rack_location: "B2-D1".to_string(),
            barcode: "8901234567893".to_string(),
            status: ProductStatus::LowStock,
        },
        Product {
            id: "5".to_string(),
            name: "Metformin 500mg".to_string(),
            salt: "Metformin".to_string(),
            manufacturer: "USV".to_string(),
            category: "Diabetes".to_string(),
            batch: "BATCH005".to_string(),
            mrp_paise: 2500,
            cost_price_paise: 1200,
            selling_price_paise: 2000,
            current_stock: 80,
            min_stock: 30,
            max_stock: 120,
            expiry_date: date(2025, 1, 15),
            rack_location: "C1-A1".to_string(),
            barcode: "8901234567894".to_string(),
            status: ProductStatus::Active,
        },
        Product {
            id: "6".to_string(),
            name: "Amlodipine 5mg".to_string(),
            salt: "Amlodipine".to_string(),
            manufacturer: "Cipla".to_string(),
            category: "Cardiovascular".to_string(),
            batch: "BATCH006".to_string(),
            mrp_paise: 3500,
            cost_price_paise: 1800,
            selling_price_paise: 2800,
            current_stock: 45,
            min_stock: 20,
            max_stock: 80,
            expiry_date: date(2024, 11, 30),
            rack_location: "C2-B1".to_string(),
            barcode: "8901234567895".to_string(),
            status: ProductStatus::Active,
        },
    ]
}

/// The four demo customers.
pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "john.doe@email.com".to_string(),
            address: "123 Main St, Mumbai, Maharashtra".to_string(),
            total_purchases_paise: 1_250_000,
            last_visit: date(2024, 1, 15),
            prescriptions: 5,
            status: CustomerStatus::Active,
        },
        Customer {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            phone: "+91 87654 32109".to_string(),
            email: "jane.smith@email.com".to_string(),
            address: "456 Park Ave, Delhi, Delhi".to_string(),
            total_purchases_paise: 890_000,
            last_visit: date(2024, 1, 10),
            prescriptions: 3,
            status: CustomerStatus::Active,
        },
        Customer {
            id: "3".to_string(),
            name: "Mike Johnson".to_string(),
            phone: "+91 76543 21098".to_string(),
            email: "mike.johnson@email.com".to_string(),
            address: "789 Oak Rd, Bangalore, Karnataka".to_string(),
            total_purchases_paise: 1_560_000,
            last_visit: date(2024, 1, 12),
            prescriptions: 8,
            status: CustomerStatus::Active,
        },
        Customer {
            id: "4".to_string(),
            name: "Sarah Wilson".to_string(),
            phone: "+91 65432 10987".to_string(),
            email: "sarah.wilson@email.com".to_string(),
            address: "321 Pine St, Chennai, Tamil Nadu".to_string(),
            total_purchases_paise: 720_000,
            last_visit: date(2024, 1, 8),
            prescriptions: 2,
            status: CustomerStatus::Active,
        },
    ]
}

/// The morning's transactions, newest first, with timestamps relative to
/// `now`.
pub fn demo_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            customer_id: Some("1".to_string()),
            amount_paise: 125_000,
            items: 5,
            status: TransactionStatus::Completed,
            method: PaymentMethod::Upi,
            created_at: now - Duration::minutes(2),
        },
        Transaction {
            id: "2".to_string(),
            customer_id: Some("2".to_string()),
            amount_paise: 89_000,
            items: 3,
            status: TransactionStatus::Pending,
            method: PaymentMethod::Cash,
            created_at: now - Duration::minutes(5),
        },
        Transaction {
            id: "3".to_string(),
            customer_id: Some("3".to_string()),
            amount_paise: 210_000,
            items: 8,
            status: TransactionStatus::Completed,
            method: PaymentMethod::Card,
            created_at: now - Duration::minutes(12),
        },
        Transaction {
            id: "4".to_string(),
            customer_id: Some("4".to_string()),
            amount_paise: 75_000,
            items: 4,
            status: TransactionStatus::Completed,
            method: PaymentMethod::Upi,
            created_at: now - Duration::minutes(18),
        },
    ]
}

/// The pre-aggregated report figures.
pub fn demo_report_archive() -> ReportArchive {
    let weekly = [
        ("Mon", 400_000, 240_000, 156),
        ("Tue", 300_000, 139_800, 178),
        ("Wed", 200_000, 980_000, 165),
        ("Thu", 278_000, 390_800, 210),
        ("Fri", 189_000, 480_000, 185),
        ("Sat", 239_000, 380_000, 225),
        ("Sun", 349_000, 430_000, 198),
    ]
    .into_iter()
    .map(|(day, sales, profit, orders)| SalesFigure {
        day: day.to_string(),
        sales_paise: sales,
        profit_paise: profit,
        orders,
    })
    .collect();

    let gst = [
        ("Jan", 810_000, 540_000),
        ("Feb", 936_000, 630_000),
        ("Mar", 864_000, 585_000),
        ("Apr", 1_098_000, 720_000),
        ("May", 990_000, 675_000),
        ("Jun", 1_206_000, 810_000),
    ]
    .into_iter()
    .map(|(month, collected, paid)| GstMonth {
        month: month.to_string(),
        collected_paise: collected,
        paid_paise: paid,
        net_paise: collected - paid,
    })
    .collect();

    let shares = [
        ("Antibiotics", 35),
        ("Pain Relief", 25),
        ("Vitamins", 20),
        ("Diabetes", 15),
        ("Others", 5),
    ]
    .into_iter()
    .map(|(name, share_pct)| CategoryShare {
        name: name.to_string(),
        share_pct,
    })
    .collect();

    let top = [
        ("Paracetamol 500mg", 1_250_000, 1250, 400_000),
        ("Amoxicillin 250mg", 890_000, 445, 320_000),
        ("Vitamin D3 1000IU", 760_000, 80, 280_000),
        ("Omeprazole 20mg", 680_000, 95, 240_000),
    ]
    .into_iter()
    .map(|(name, sales, quantity, profit)| TopProduct {
        name: name.to_string(),
        sales_paise: sales,
        quantity,
        profit_paise: profit,
    })
    .collect();

    ReportArchive::new(weekly, gst, shares, top)
}

// =============================================================================
// Unit Tests
// =============================================================================
