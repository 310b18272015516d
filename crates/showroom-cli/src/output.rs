//! Output formatting module

use serde::Serialize;
use showroom_app::app::VehicleDetail;
use showroom_domain::route::LISTING_PATH;
use showroom_domain::service::{FacetOptions, VehicleSummary};
use showroom_domain::{SearchFilters, Vehicle};
use showroom_types::{OutputFormat, Result};

/// "1 vehicle found" / "3 vehicles found"
pub fn results_label(count: usize) -> String {
    format!("{} vehicle{} found", count, if count == 1 { "" } else { "s" })
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_vehicle_table(vehicles: &[Vehicle]) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:<26} {:<12} {:<18} {:>4} {:>10} {:<8} {:<9} {:<6}\n",
        "ID", "Brand", "Model", "Year", "Price", "Category", "Fuel", "Status"
    ));
    table.push_str("-".repeat(100).as_str());
    table.push('\n');
    for v in vehicles {
        table.push_str(&format!(
            "{:<26} {:<12} {:<18} {:>4} {:>10} {:<8} {:<9} {:<6}\n",
            truncate_str(&v.id, 26),
            truncate_str(&v.brand, 12),
            truncate_str(&v.model, 18),
            v.year,
            v.price_display,
            truncate_str(&v.category, 8),
            truncate_str(&v.fuel_type, 9),
            truncate_str(&v.status, 6),
        ));
    }
    table
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(vehicles);
    }
    print!("{}", format_vehicle_table(vehicles));
    println!("\n{}", results_label(vehicles.len()));
    Ok(())
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    filters: &'a SearchFilters,
    count: usize,
    vehicles: &'a [Vehicle],
}

pub fn output_search(
    output_format: OutputFormat,
    query: &str,
    filters: &SearchFilters,
    vehicles: &[Vehicle],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&SearchOutput {
            query,
            filters,
            count: vehicles.len(),
            vehicles,
        });
    }

    if vehicles.is_empty() {
        println!("No vehicles match your search.");
        if filters.is_unconstrained() {
            println!("Try different keywords.");
        } else {
            println!("Try different keywords or clear the filters.");
        }
        return Ok(());
    }
    output_vehicles(output_format, vehicles)
}

pub fn format_detail(detail: &VehicleDetail) -> String {
    let v = &detail.vehicle;
    let mut out = String::new();

    out.push_str(&format!("\n{}  [{}]\n", v.display_name(), v.status));
    out.push_str(&"=".repeat(40));
    out.push('\n');
    out.push_str(&format!("Price:     {}\n", v.price_display));
    out.push_str(&format!("Year:      {}\n", v.year));
    out.push_str(&format!("Mileage:   {}\n", v.mileage));
    out.push_str(&format!("Color:     {}\n", v.color));
    out.push_str(&format!("Fuel:      {}\n", v.fuel_type));
    out.push_str(&format!("Category:  {}\n", v.category));

    if let Some(ref image) = detail.current_image {
        if detail.has_carousel_controls {
            out.push_str(&format!(
                "Image:     {} ({}/{})\n",
                image,
                detail.image_index + 1,
                v.images.len()
            ));
        } else {
            out.push_str(&format!("Image:     {}\n", image));
        }
    }

    if !v.description.is_empty() {
        out.push_str(&format!("\n{}\n", v.description));
    }

    if !v.specs.is_empty() {
        out.push_str("\n--- Specifications ---\n");
        for (label, value) in &v.specs {
            out.push_str(&format!("{:<16} {}\n", label, value));
        }
    }

    if !v.features.is_empty() {
        out.push_str("\n--- Features ---\n");
        for feature in &v.features {
            out.push_str(&format!("  * {}\n", feature));
        }
    }

    if !detail.related.is_empty() {
        out.push_str("\n--- You may also like ---\n");
        for r in &detail.related {
            out.push_str(&format!("  {} {} - {} ({})\n", r.brand, r.model, r.price_display, r.path()));
        }
    }

    out
}

pub fn output_detail(output_format: OutputFormat, detail: &VehicleDetail) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(detail);
    }
    print!("{}", format_detail(detail));
    Ok(())
}

/// Shown when a detail lookup misses
pub fn output_not_found(id: &str) {
    eprintln!("Vehicle not found: {}", id);
    eprintln!("Browse all vehicles: {}", LISTING_PATH);
}

pub fn output_featured(output_format: OutputFormat, featured: &[VehicleSummary]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(featured);
    }
    println!("\nFeatured Vehicles");
    println!("=================");
    for s in featured {
        println!(
            "{:<12} {:<18} {:<32} {}",
            truncate_str(&s.brand, 12),
            truncate_str(&s.model, 18),
            s.link,
            s.primary_image.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub fn output_facets(output_format: OutputFormat, options: &FacetOptions) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(options);
    }
    println!("Categories:  {}", options.categories.join(", "));
    println!("Fuel types:  {}", options.fuel_types.join(", "));
    println!("Status:      {}", options.statuses.join(", "));
    println!("Price:");
    for preset in &options.price_presets {
        println!("  {:<20} --price {}", preset.label, preset.range);
    }
    Ok(())
}
