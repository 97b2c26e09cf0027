//! Derived comparison matrix.
//!
//! [`build_matrix`] turns the current comparison set into a
//! display-agnostic table: fixed attribute rows first, then one boolean
//! row per amenity found in the union of the compared properties'
//! amenity sets. Rows are recomputed from scratch on every call; there
//! is no persisted row structure.

use serde::{Deserialize, Serialize};

use crate::property::{Property, PropertyId};

/// One rendered cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Flag(bool),
}

/// Per-property header card: the column captions of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub id: PropertyId,
    pub name: String,
    pub price: f64,
    pub rating: Option<f32>,
}

/// One row of the matrix: a label, one cell per compared property, and
/// whether every cell holds the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub label: String,
    pub cells: Vec<CellValue>,
    pub all_same: bool,
}

/// The full derived table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonMatrix {
    /// True for an empty comparison set; callers render an empty-state
    /// message instead of a table.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Build the comparison matrix for the given properties, in column order.
///
/// An empty input yields an empty matrix, not an error. `all_same` is
/// forced to `false` whenever fewer than two properties are compared:
/// with zero or one column there is no meaningful notion of difference,
/// and a single-column table must not light up as uniformly "same".
pub fn build_matrix(properties: &[Property]) -> ComparisonMatrix {
    if properties.is_empty() {
        return ComparisonMatrix::default();
    }

    let columns = properties
        .iter()
        .map(|p| ColumnHeader {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
            rating: p.rating,
        })
        .collect();

    let mut rows = Vec::new();

    push_row(&mut rows, "Property Type", properties, |p| {
        CellValue::Text(p.kind.label().to_string())
    });
    push_row(&mut rows, "Location", properties, |p| {
        CellValue::Text(p.location.address.clone())
    });
    push_row(&mut rows, "Room Type", properties, |p| {
        CellValue::Text(p.room_details.room_type.label().to_string())
    });
    push_row(&mut rows, "Gender Policy", properties, |p| {
        CellValue::Text(p.room_details.gender_policy.label().to_string())
    });
    push_row(&mut rows, "Rooms", properties, |p| {
        CellValue::Text(format!(
            "{} bed / {} bath",
            p.room_details.bedrooms, p.room_details.bathrooms
        ))
    });
    push_row(&mut rows, "Room Size", properties, |p| {
        CellValue::Text(format!("{} sq ft", p.room_details.room_size))
    });
    push_row(&mut rows, "Food Included", properties, |p| {
        CellValue::Flag(p.has_food_menu())
    });

    // One boolean row per amenity in the cross-property union. Row order
    // follows first appearance across the columns, left to right; the
    // row count depends on the properties compared, not on any catalog.
    for amenity in amenity_union(properties) {
        push_row(&mut rows, amenity, properties, |p| {
            CellValue::Flag(p.has_amenity(amenity))
        });
    }

    ComparisonMatrix { columns, rows }
}

/// Union of amenity tags in first-appearance order.
fn amenity_union(properties: &[Property]) -> Vec<&str> {
    let mut union: Vec<&str> = Vec::new();
    for property in properties {
        for tag in &property.amenities {
            if !union.iter().any(|seen| seen == tag) {
                union.push(tag);
            }
        }
    }
    union
}

fn push_row(
    rows: &mut Vec<ComparisonRow>,
    label: &str,
    properties: &[Property],
    extract: impl Fn(&Property) -> CellValue,
) {
    let cells: Vec<CellValue> = properties.iter().map(extract).collect();
    let all_same = cells.len() >= 2 && cells.windows(2).all(|pair| pair[0] == pair[1]);
    rows.push(ComparisonRow {
        label: label.to_string(),
        cells,
        all_same,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::test_support::{menu_with_breakfast, property};
    use crate::property::PropertyKind;

    fn row<'a>(matrix: &'a ComparisonMatrix, label: &str) -> &'a ComparisonRow {
        matrix
            .rows
            .iter()
            .find(|r| r.label == label)
            .unwrap_or_else(|| panic!("missing row {:?}", label))
    }

    #[test]
    fn test_empty_set_yields_empty_matrix() {
        let matrix = build_matrix(&[]);
        assert!(matrix.is_empty());
        assert!(matrix.rows.is_empty());
        assert!(matrix.columns.is_empty());
    }

    #[test]
    fn test_column_headers_carry_price_and_rating() {
        let properties = vec![
            property("a", "Sunrise PG", 4500.0).with_rating(4.2),
            property("b", "Lakeview", 3000.0),
        ];
        let matrix = build_matrix(&properties);

        assert_eq!(matrix.columns.len(), 2);
        assert_eq!(matrix.columns[0].name, "Sunrise PG");
        assert_eq!(matrix.columns[0].price, 4500.0);
        assert_eq!(matrix.columns[0].rating, Some(4.2));
        assert_eq!(matrix.columns[1].rating, None);
    }

    #[test]
    fn test_fixed_rows_come_in_order() {
        let matrix = build_matrix(&[property("a", "A", 1000.0)]);
        let labels: Vec<&str> = matrix.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Property Type",
                "Location",
                "Room Type",
                "Gender Policy",
                "Rooms",
                "Room Size",
                "Food Included"
            ]
        );
    }

    #[test]
    fn test_amenity_union_rows() {
        let properties = vec![
            property("a", "A", 1000.0).with_amenities(["wifi", "gym"]),
            property("b", "B", 2000.0).with_amenities(["wifi", "parking"]),
        ];
        let matrix = build_matrix(&properties);

        let amenity_labels: Vec<&str> = matrix
            .rows
            .iter()
            .skip(7) // fixed rows
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(amenity_labels, ["wifi", "gym", "parking"]);

        assert_eq!(
            row(&matrix, "wifi").cells,
            [CellValue::Flag(true), CellValue::Flag(true)]
        );
        assert_eq!(
            row(&matrix, "gym").cells,
            [CellValue::Flag(true), CellValue::Flag(false)]
        );
        assert_eq!(
            row(&matrix, "parking").cells,
            [CellValue::Flag(false), CellValue::Flag(true)]
        );
    }

    #[test]
    fn test_all_same_flags() {
        let mut a = property("a", "A", 1000.0);
        let mut b = property("b", "B", 2000.0);
        a.kind = PropertyKind::Hostel;
        b.kind = PropertyKind::Hostel;
        a.location.address = "1 First St".to_string();
        b.location.address = "2 Second St".to_string();

        let matrix = build_matrix(&[a, b]);
        assert!(row(&matrix, "Property Type").all_same);
        assert!(!row(&matrix, "Location").all_same);
    }

    #[test]
    fn test_single_column_is_never_all_same() {
        let matrix = build_matrix(&[property("a", "A", 1000.0).with_amenities(["wifi"])]);
        assert!(matrix.rows.iter().all(|r| !r.all_same));
    }

    #[test]
    fn test_amenity_all_same_means_all_included_or_all_excluded() {
        let properties = vec![
            property("a", "A", 1000.0).with_amenities(["wifi"]),
            property("b", "B", 2000.0).with_amenities(["wifi", "gym"]),
        ];
        let matrix = build_matrix(&properties);
        assert!(row(&matrix, "wifi").all_same);
        assert!(!row(&matrix, "gym").all_same);
    }

    #[test]
    fn test_food_included_row() {
        let properties = vec![
            property("a", "A", 1000.0).with_food_menu(menu_with_breakfast()),
            property("b", "B", 2000.0),
        ];
        let matrix = build_matrix(&properties);
        assert_eq!(
            row(&matrix, "Food Included").cells,
            [CellValue::Flag(true), CellValue::Flag(false)]
        );
        assert!(!row(&matrix, "Food Included").all_same);
    }

    #[test]
    fn test_matrix_is_a_pure_function_of_the_set() {
        let properties = vec![
            property("a", "A", 1000.0).with_amenities(["wifi"]),
            property("b", "B", 2000.0).with_amenities(["gym"]),
        ];
        assert_eq!(build_matrix(&properties), build_matrix(&properties));
    }
}
