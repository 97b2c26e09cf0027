//! Console rendering of listings, property detail, the comparison
//! table, and comparison events.

use colored::Colorize;
use stayscout_application::{CompareEvent, CompareNotifier};
use stayscout_domain::{CellValue, ComparisonMatrix, Property, MAX_COMPARE};

/// Notifier that prints comparison events as user-facing lines.
pub struct ConsoleCompareNotifier;

impl CompareNotifier for ConsoleCompareNotifier {
    fn notify(&self, event: CompareEvent) {
        match event {
            CompareEvent::Added { name } => {
                println!("{} {} added to your comparison list.", "+".green(), name);
            }
            CompareEvent::AlreadyPresent { name } => {
                println!("{} is already in your comparison list.", name);
            }
            CompareEvent::LimitReached { limit } => {
                println!(
                    "{} You can compare up to {} properties at a time. Remove one before adding another.",
                    "!".yellow(),
                    limit
                );
            }
            CompareEvent::Removed { id } => {
                println!("{} {} removed from comparison.", "-".red(), id);
            }
            CompareEvent::NotPresent { id } => {
                println!("{} was not in your comparison list.", id);
            }
            CompareEvent::Cleared => {
                println!("Comparison list cleared.");
            }
        }
    }
}

/// One line per listing, `list` command style.
pub fn print_listings(properties: &[Property], total_available: usize) {
    if properties.is_empty() {
        println!("No properties match your filters.");
        println!("Try adjusting your filters to see more results.");
        return;
    }

    println!(
        "{} of {} properties",
        properties.len().to_string().bold(),
        total_available
    );
    println!();

    // Pad before coloring so ANSI escapes don't skew the columns.
    for p in properties {
        let rating = match p.rating {
            Some(r) => format!("{:.1}*", r),
            None => "  - ".to_string(),
        };
        println!(
            "  {} {} {}  {}  {:<16} {}, {}",
            format!("{:<8}", p.id).dimmed(),
            format!("{:<28}", truncate(&p.name, 28)).bold(),
            format!("{:>12}", format!("Rs {:.0}/mo", p.price)).green(),
            rating.yellow(),
            p.kind.label(),
            p.location.city,
            p.location.state
        );
    }
}

/// Full detail for the `show` command.
pub fn print_property(p: &Property) {
    println!("{}  {}", p.name.bold(), format!("[{}]", p.id).dimmed());
    println!(
        "{} | {} | {}",
        p.kind.label(),
        p.room_details.room_type.label(),
        p.room_details.gender_policy.label()
    );
    println!(
        "{}, {}, {} {}",
        p.location.address, p.location.city, p.location.state, p.location.zip_code
    );
    println!("{}", format!("Rs {:.0} / month", p.price).green().bold());

    if let Some(rating) = p.rating {
        let reviews = p
            .reviews
            .map(|n| format!(" ({} reviews)", n))
            .unwrap_or_default();
        println!("Rated {:.1}/5{}", rating, reviews);
    }

    println!(
        "{} bed / {} bath, up to {} occupants, {} sq ft",
        p.room_details.bedrooms,
        p.room_details.bathrooms,
        p.room_details.max_occupancy,
        p.room_details.room_size
    );

    if !p.amenities.is_empty() {
        println!("Amenities: {}", p.amenities.join(", "));
    }
    if !p.rules.is_empty() {
        println!("Rules: {}", p.rules.join("; "));
    }
    if p.has_food_menu() {
        println!("Food included (weekly menu available)");
    }
    if let Some(contact) = &p.contact_info {
        println!("Contact: {} <{}> {}", contact.name, contact.email, contact.phone);
    }
    if !p.description.is_empty() {
        println!();
        println!("{}", p.description);
    }
}

/// Render the comparison matrix as an aligned table.
///
/// Rows whose values differ across columns get a highlighted label, the
/// console stand-in for the web view's difference highlighting. An
/// empty matrix prints the empty-state message instead of a table.
pub fn print_matrix(matrix: &ComparisonMatrix) {
    if matrix.is_empty() {
        println!("No properties to compare.");
        println!("Add properties with `stayscout compare add <id>` first.");
        return;
    }

    const LABEL_WIDTH: usize = 16;
    const CELL_WIDTH: usize = 22;

    let header: String = matrix
        .columns
        .iter()
        .map(|c| format!("{:<width$}", truncate(&c.name, CELL_WIDTH - 2), width = CELL_WIDTH))
        .collect();
    println!("{:<width$}{}", "Property", header.bold(), width = LABEL_WIDTH);

    let prices: String = matrix
        .columns
        .iter()
        .map(|c| format!("{:<width$}", format!("Rs {:.0}/mo", c.price), width = CELL_WIDTH))
        .collect();
    println!("{:<width$}{}", "", prices.green(), width = LABEL_WIDTH);

    let ratings: String = matrix
        .columns
        .iter()
        .map(|c| {
            let cell = match c.rating {
                Some(r) => format!("{:.1}/5", r),
                None => "not rated".to_string(),
            };
            format!("{:<width$}", cell, width = CELL_WIDTH)
        })
        .collect();
    println!("{:<width$}{}", "", ratings.dimmed(), width = LABEL_WIDTH);
    println!();

    for row in &matrix.rows {
        let cells: String = row
            .cells
            .iter()
            .map(|cell| {
                let text = match cell {
                    CellValue::Text(value) => truncate(value, CELL_WIDTH - 2),
                    CellValue::Flag(true) => "yes".to_string(),
                    CellValue::Flag(false) => "-".to_string(),
                };
                format!("{:<width$}", text, width = CELL_WIDTH)
            })
            .collect();

        let label = format!("{:<width$}", truncate(&row.label, LABEL_WIDTH - 1), width = LABEL_WIDTH);
        if matrix.columns.len() >= 2 && !row.all_same {
            println!("{}{}", label.yellow(), cells);
        } else {
            println!("{}{}", label, cells);
        }
    }

    if matrix.columns.len() < MAX_COMPARE {
        println!();
        println!(
            "{}",
            format!(
                "You can add {} more propert{} to this comparison.",
                MAX_COMPARE - matrix.columns.len(),
                if MAX_COMPARE - matrix.columns.len() == 1 { "y" } else { "ies" }
            )
            .dimmed()
        );
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("wifi", 10), "wifi");
    }

    #[test]
    fn test_truncate_shortens_long_text() {
        let out = truncate("a very long amenity label", 10);
        assert!(out.chars().count() <= 10);
        assert!(out.ends_with('…'));
    }
}
