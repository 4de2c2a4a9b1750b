use log::warn;

use crate::domain::fields::{entries, parse_leading_float, parse_leading_int, FieldShape};
use crate::domain::models::{CanonicalGameRecord, RawDetailRecord};
use crate::errors::CatalogError;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
pub const MAX_CATEGORIES: usize = 3;
const CATEGORY_LINK_TYPE: &str = "boardgamecategory";

/// Normalize a batch, dropping (and logging) records that cannot be read
pub fn normalize_batch(records: &[RawDetailRecord]) -> Vec<CanonicalGameRecord> {
    records
        .iter()
        .filter_map(|record| match normalize_record(record) {
            Ok(game) => Some(game),
            Err(e) => {
                warn!("Dropping catalog record {:?}: {}", record.catalog_id(), e);
                None
            }
        })
        .collect()
}

/// Map one upstream detail record to the canonical shape.
///
/// Unparseable numbers become `None`; only a missing name or a non-object
/// record is an error.
pub fn normalize_record(record: &RawDetailRecord) -> Result<CanonicalGameRecord, CatalogError> {
    let item = record
        .value()
        .as_object()
        .ok_or_else(|| CatalogError::record("detail record is not an element"))?;
    let field = |name: &str| FieldShape::of(item.get(name));
    let number = |name: &str| parse_leading_int(&field(name).text());

    let name = primary_name(item.get("name"))
        .ok_or_else(|| CatalogError::record("detail record has no name"))?;

    Ok(CanonicalGameRecord {
        id: parse_leading_int(&record.catalog_id()),
        name,
        description: decode_description(&field("description").text()),
        min_players: number("minplayers"),
        max_players: number("maxplayers"),
        min_age: number("minage"),
        play_time: format!(
            "{}-{} min",
            field("minplaytime").text(),
            field("maxplaytime").text()
        ),
        categories: category_values(item.get("link")),
        rating: format_rating(field("statistics")),
        image: image_or_placeholder(field("image").text()),
        year: number("yearpublished"),
    })
}

fn primary_name(names: Option<&serde_json::Value>) -> Option<String> {
    let names = entries(names);
    let primary = names
        .iter()
        .find(|n| n.attribute("type").as_deref() == Some("primary"))
        .or_else(|| names.first())?;
    Some(primary.text())
}

fn decode_description(raw: &str) -> String {
    raw.replace("&#10;", "\n").replace("&quot;", "\"")
}

fn category_values(links: Option<&serde_json::Value>) -> Vec<String> {
    entries(links)
        .iter()
        .filter(|link| link.attribute("type").as_deref() == Some(CATEGORY_LINK_TYPE))
        .map(FieldShape::text)
        .take(MAX_CATEGORIES)
        .collect()
}

fn format_rating(statistics: FieldShape<'_>) -> String {
    let average = statistics
        .child("ratings")
        .child("average")
        .attribute("value")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "0".to_string());

    format_one_decimal(parse_leading_float(&average))
}

/// One decimal place, exact ties rounded away from zero.
///
/// `{:.1}` rounds exact ties to even ("7.25" → "7.2"). A value halfway between
/// two tenths is an odd multiple of 0.25, and scaling by 4 is exact.
pub fn format_one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = value.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

fn image_or_placeholder(image: String) -> String {
    if image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catan() -> RawDetailRecord {
        RawDetailRecord::new(json!({
            "@_type": "boardgame",
            "@_id": "13",
            "thumbnail": "https://img/thumb.jpg",
            "image": "https://img/catan.jpg",
            "name": [
                {"@_type": "alternate", "@_sortindex": "1", "@_value": "Die Siedler von Catan"},
                {"@_type": "primary", "@_sortindex": "1", "@_value": "CATAN"}
            ],
            "description": "Trade &quot;wood&quot;&#10;Build roads",
            "yearpublished": {"@_value": "1995"},
            "minplayers": {"@_value": "3"},
            "maxplayers": {"@_value": "4"},
            "minplaytime": {"@_value": "60"},
            "maxplaytime": {"@_value": "120"},
            "minage": {"@_value": "10"},
            "link": [
                {"@_type": "boardgamecategory", "@_id": "1021", "@_value": "Economic"},
                {"@_type": "boardgamemechanic", "@_id": "2072", "@_value": "Dice Rolling"},
                {"@_type": "boardgamecategory", "@_id": "1026", "@_value": "Negotiation"},
                {"@_type": "boardgamecategory", "@_id": "1086", "@_value": "Territory Building"},
                {"@_type": "boardgamecategory", "@_id": "1090", "@_value": "Trains"}
            ],
            "statistics": {"@_page": "1", "ratings": {"average": {"@_value": "7.09812"}}}
        }))
    }

    #[test]
    fn test_full_record() {
        let game = normalize_record(&catan()).unwrap();

        assert_eq!(game.id, Some(13));
        assert_eq!(game.name, "CATAN");
        assert_eq!(game.description, "Trade \"wood\"\nBuild roads");
        assert_eq!(game.min_players, Some(3));
        assert_eq!(game.max_players, Some(4));
        assert_eq!(game.min_age, Some(10));
        assert_eq!(game.play_time, "60-120 min");
        assert_eq!(game.categories, vec!["Economic", "Negotiation", "Territory Building"]);
        assert_eq!(game.rating, "7.1");
        assert_eq!(game.image, "https://img/catan.jpg");
        assert_eq!(game.year, Some(1995));
    }

    #[test]
    fn test_sparse_record_keeps_defaults() {
        let record = RawDetailRecord::new(json!({
            "@_id": "42",
            "name": {"@_type": "alternate", "@_value": "Only Name"},
            "minplayers": {"@_value": "two"},
            "minplaytime": {"@_value": "30"},
            "maxplaytime": {"@_value": "30"}
        }));

        let game = normalize_record(&record).unwrap();

        assert_eq!(game.name, "Only Name");
        assert_eq!(game.description, "");
        assert_eq!(game.min_players, None);
        assert_eq!(game.max_players, None);
        assert_eq!(game.play_time, "30-30 min");
        assert!(game.categories.is_empty());
        assert_eq!(game.rating, "0.0");
        assert_eq!(game.image, PLACEHOLDER_IMAGE);
        assert_eq!(game.year, None);
    }

    #[test]
    fn test_single_category_link() {
        let record = RawDetailRecord::new(json!({
            "@_id": "1",
            "name": {"@_type": "primary", "@_value": "Solo"},
            "link": {"@_type": "boardgamecategory", "@_value": "Puzzle"}
        }));

        assert_eq!(normalize_record(&record).unwrap().categories, vec!["Puzzle"]);
    }

    #[test]
    fn test_unparseable_rating_formats_as_nan() {
        let record = RawDetailRecord::new(json!({
            "@_id": "1",
            "name": {"@_type": "primary", "@_value": "X"},
            "statistics": {"ratings": {"average": {"@_value": "n/a"}}}
        }));

        assert_eq!(normalize_record(&record).unwrap().rating, "NaN");
    }

    #[test]
    fn test_rating_ties_round_up() {
        assert_eq!(format_one_decimal(7.25), "7.3");
        assert_eq!(format_one_decimal(0.25), "0.3");
        assert_eq!(format_one_decimal(6.75), "6.8");
        assert_eq!(format_one_decimal(7.5), "7.5");
        assert_eq!(format_one_decimal(7.24), "7.2");
        assert_eq!(format_one_decimal(0.15), "0.1");

        let record = RawDetailRecord::new(json!({
            "@_id": "1",
            "name": {"@_type": "primary", "@_value": "Tie"},
            "statistics": {"ratings": {"average": {"@_value": "7.25"}}}
        }));
        assert_eq!(normalize_record(&record).unwrap().rating, "7.3");
    }

    #[test]
    fn test_serialized_shape() {
        let game = normalize_record(&catan()).unwrap();
        let value = serde_json::to_value(&game).unwrap();

        assert_eq!(value["minPlayers"], json!(3));
        assert_eq!(value["playTime"], json!("60-120 min"));
        assert_eq!(value["rating"], json!("7.1"));
        assert!(value.get("min_players").is_none());
    }

    #[test]
    fn test_malformed_record_is_dropped_from_batch() {
        let batch = vec![
            catan(),
            RawDetailRecord::new(json!("not an element")),
            RawDetailRecord::new(json!({"@_id": "5"})),
        ];

        let games = normalize_batch(&batch);

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, Some(13));
    }
}
