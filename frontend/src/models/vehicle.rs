use once_cell::sync::Lazy;
use serde::Deserialize;

const VEHICLES_JSON: &str = include_str!("../../../data/vehicles.json");

static VEHICLES: Lazy<Vec<Vehicle>> = Lazy::new(|| match parse_vehicles(VEHICLES_JSON) {
    Ok(vehicles) => vehicles,
    Err(e) => {
        log::error!("Failed to parse embedded vehicle collection: {}", e);
        Vec::new()
    }
});

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub enum Category {
    #[serde(rename = "Track Weapon")]
    TrackWeapon,
    #[serde(rename = "Track-Only Hypercar")]
    TrackOnlyHypercar,
    #[serde(rename = "Road-Legal Hypercar")]
    RoadLegalHypercar,
    #[serde(rename = "One-off")]
    OneOff,
    #[serde(rename = "Limited Series")]
    LimitedSeries,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::TrackWeapon => "Track Weapon",
            Category::TrackOnlyHypercar => "Track-Only Hypercar",
            Category::RoadLegalHypercar => "Road-Legal Hypercar",
            Category::OneOff => "One-off",
            Category::LimitedSeries => "Limited Series",
        }
    }

    /// Dot colour used by the collection badges.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Category::TrackWeapon | Category::TrackOnlyHypercar => "#6366f1",
            Category::RoadLegalHypercar => "#10b981",
            Category::OneOff => "#f59e0b",
            Category::LimitedSeries => "#6b7280",
        }
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Cover,
    Contain,
}

impl ImageFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub engine: String,
    pub horsepower: String,
    pub top_speed: String,
    pub transmission: String,
    pub drivetrain: String,
    pub weight: String,
    pub acceleration: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub year: u16,
    pub production: String,
    pub category: Category,
    pub tagline: String,
    pub description: String,
    pub specs: Specifications,
    pub sketchfab_url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_position: Option<String>,
    #[serde(default)]
    pub image_fit: Option<ImageFit>,
}

fn parse_vehicles(json: &str) -> Result<Vec<Vehicle>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Every vehicle in the collection, in display order.
pub fn all() -> &'static [Vehicle] {
    &VEHICLES
}

/// Resolves a route slug to its vehicle. Unknown slugs yield `None`.
pub fn find_by_slug(slug: &str) -> Option<&'static Vehicle> {
    VEHICLES.iter().find(|v| v.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::source::EmbedSource;
    use std::collections::HashSet;

    #[test]
    fn embedded_collection_parses() {
        let vehicles = parse_vehicles(VEHICLES_JSON).expect("vehicles.json should parse");
        assert!(!vehicles.is_empty());
        assert_eq!(vehicles.len(), all().len());
    }

    #[test]
    fn slugs_are_unique() {
        let mut seen = HashSet::new();
        for vehicle in all() {
            assert!(seen.insert(vehicle.slug.as_str()), "duplicate slug {}", vehicle.slug);
        }
    }

    #[test]
    fn known_slug_resolves_to_its_record() {
        let vehicle = find_by_slug("zonda-r").expect("zonda-r is in the collection");
        assert_eq!(vehicle.name, "Pagani Zonda R");
        assert_eq!(vehicle.specs.horsepower, "750 HP");
        assert_eq!(vehicle.category, Category::TrackOnlyHypercar);
    }

    #[test]
    fn every_card_has_an_image_source() {
        for vehicle in all() {
            let has_thumbnail = EmbedSource::parse(&vehicle.sketchfab_url).is_ok();
            assert!(
                vehicle.image.is_some() || has_thumbnail,
                "{} has neither an image nor a thumbnail-capable embed url",
                vehicle.slug
            );
        }
    }

    #[test]
    fn zonda_r_uses_its_published_model() {
        let vehicle = find_by_slug("zonda-r").expect("zonda-r is in the collection");
        let source = EmbedSource::parse(&vehicle.sketchfab_url).unwrap();
        assert_eq!(source.model_id(), "6cf8c75a54794fdf895c2d005cbde426");
    }

    #[test]
    fn unknown_slug_resolves_to_nothing() {
        assert!(find_by_slug("does-not-exist").is_none());
        assert!(find_by_slug("").is_none());
    }

    #[test]
    fn optional_image_hints_deserialize() {
        let json = r#"[{
            "id": 9,
            "name": "Test Car",
            "slug": "test-car",
            "year": 2020,
            "production": "1 unit",
            "category": "One-off",
            "tagline": "t",
            "description": "d",
            "specs": {
                "engine": "e", "horsepower": "h", "topSpeed": "s",
                "transmission": "t", "drivetrain": "d", "weight": "w",
                "acceleration": "a"
            },
            "sketchfabUrl": "https://sketchfab.com/models/x/embed",
            "image": "/assets/cars/test.jpg",
            "imagePosition": "center 60%",
            "imageFit": "contain"
        }]"#;
        let vehicles = parse_vehicles(json).unwrap();
        assert_eq!(vehicles[0].image.as_deref(), Some("/assets/cars/test.jpg"));
        assert_eq!(vehicles[0].image_position.as_deref(), Some("center 60%"));
        assert_eq!(vehicles[0].image_fit, Some(ImageFit::Contain));
    }

    #[test]
    fn badge_colors_group_track_categories() {
        assert_eq!(
            Category::TrackWeapon.badge_color(),
            Category::TrackOnlyHypercar.badge_color()
        );
        assert_ne!(
            Category::RoadLegalHypercar.badge_color(),
            Category::OneOff.badge_color()
        );
    }
}
