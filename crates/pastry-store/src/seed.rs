//! # Seed Data
//!
//! Example suppliers and products loaded into an empty inventory, so a
//! first launch shows a populated dashboard.
//!
//! ```text
//! Moinho Paulista (1) ◄── Farinha de Trigo (1)   45 kg / min 20
//! Açúcar & Cia    (2) ◄── Açúcar Refinado  (2)   12 kg / min 15  ← low
//!                     ◄── Manteiga         (3)   28 kg / min 10
//! ```

use chrono::{DateTime, TimeZone, Utc};
use pastry_core::{Product, Supplier};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn text(value: &str) -> String {
    value.to_string()
}

/// The two example suppliers.
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: text("1"),
            name: text("Moinho Paulista"),
            contact_name: text("João Silva"),
            phone: text("(11) 98765-4321"),
            email: text("joao@moinhopaulista.com"),
            address: text("Rua das Farinhas, 123 - São Paulo"),
            created_at: date(2023, 2, 15),
        },
        Supplier {
            id: text("2"),
            name: text("Açúcar & Cia"),
            contact_name: text("Maria Santos"),
            phone: text("(11) 91234-5678"),
            email: text("maria@acucarecia.com"),
            address: text("Av. Doce, 456 - São Paulo"),
            created_at: date(2023, 4, 20),
        },
    ]
}

/// The three example products.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: text("1"),
            name: text("Farinha de Trigo"),
            description: text("Farinha de trigo tipo 1 para pastel"),
            supplier_id: text("1"),
            price_cents: 2599,
            stock_quantity: 45,
            unit: text("kg"),
            category: text("Ingredientes"),
            minimum_stock: 20,
            image: Some(text("https://images.pexels.com/photos/7474260/pexels-photo-7474260.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1")),
            last_restocked: date(2023, 6, 10),
        },
        Product {
            id: text("2"),
            name: text("Açúcar Refinado"),
            description: text("Açúcar refinado especial"),
            supplier_id: text("2"),
            price_cents: 1850,
            stock_quantity: 12,
            unit: text("kg"),
            category: text("Ingredientes"),
            minimum_stock: 15,
            image: Some(text("https://images.pexels.com/photos/4197444/pexels-photo-4197444.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1")),
            last_restocked: date(2023, 5, 25),
        },
        Product {
            id: text("3"),
            name: text("Manteiga"),
            description: text("Manteiga sem sal para massa"),
            supplier_id: text("2"),
            price_cents: 3275,
            stock_quantity: 28,
            unit: text("kg"),
            category: text("Laticínios"),
            minimum_stock: 10,
            image: Some(text("https://images.pexels.com/photos/6941028/pexels-photo-6941028.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1")),
            last_restocked: date(2023, 6, 5),
        },
    ]
}
