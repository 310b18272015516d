//! Vehicles shared by the unit tests

use indexmap::IndexMap;

use crate::model::Vehicle;

#[allow(clippy::too_many_arguments)]
pub fn vehicle(
    id: &str,
    brand: &str,
    model: &str,
    year: u16,
    price: u64,
    category: &str,
    fuel_type: &str,
    status: &str,
    color: &str,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        price,
        price_display: crate::model::format_price(price),
        category: category.to_string(),
        fuel_type: fuel_type.to_string(),
        status: status.to_string(),
        color: color.to_string(),
        mileage: String::new(),
        images: vec![format!("/{}.jpg", id)],
        specs: IndexMap::new(),
        features: Vec::new(),
        description: String::new(),
    }
}

pub fn ioniq() -> Vehicle {
    vehicle(
        "hyundai-ioniq-6se", "Hyundai", "IONIQ 6SE", 2023, 45000, "sedan", "electric", "New",
        "Gravity Gold",
    )
}

pub fn x5() -> Vehicle {
    vehicle(
        "bmw-x5-m50i", "BMW", "X5 M50i", 2022, 75000, "suv", "gasoline", "Used", "Carbon Black",
    )
}

pub fn showroom() -> Vec<Vehicle> {
    vec![
        ioniq(),
        vehicle(
            "volkswagen-touareg-tdi", "Volkswagen", "Touareg TDI Lux", 2021, 60000, "SUV",
            "Diesel", "Used", "Silver",
        ),
        vehicle(
            "cadillac-elr-base", "Cadillac", "ELR Base", 2016, 80000, "coupe", "hybrid", "Used",
            "Crystal White",
        ),
        x5(),
        vehicle(
            "mercedes-gle-450", "Mercedes", "GLE 450", 2024, 80001, "suv", "hybrid", "New",
            "Obsidian Black",
        ),
        vehicle(
            "porsche-taycan", "Porsche", "Taycan 4S", 2023, 59999, "sedan", "electric", "New",
            "Gentian Blue",
        ),
    ]
}
