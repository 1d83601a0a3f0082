// src/config.rs — immutable site data handed to every page through props

use crate::booking::{Coordinates, ServiceType, VehicleType};
use crate::estimate::Pricing;

pub const VPIC_BASE: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";
pub const REVIEW_FORM: &str = "blackout-reviews";
const YEARS_BACK: i32 = 40;

#[derive(Clone, Debug, PartialEq)]
pub struct MapDefaults {
    pub container_id: &'static str,
    pub center: Coordinates,
    pub zoom: u8,
    pub located_zoom: u8,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            container_id: "bo-map",
            // geographic middle of the US
            center: Coordinates::new(39.5, -98.35),
            zoom: 4,
            located_zoom: 15,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub services: Vec<ServiceType>,
    pub vehicle_types: Vec<VehicleType>,
    /// Newest first.
    pub years: Vec<String>,
    pub pricing: Pricing,
    pub map: MapDefaults,
    pub geolocation_timeout_ms: u32,
    pub catalog_base: String,
    pub review_form: String,
    pub gallery_size: usize,
}

impl SiteConfig {
    pub fn for_year(current_year: i32) -> Self {
        Self {
            services: ServiceType::ALL.to_vec(),
            vehicle_types: VehicleType::ALL.to_vec(),
            years: (0..YEARS_BACK)
                .map(|i| (current_year - i).to_string())
                .collect(),
            pricing: Pricing::default(),
            map: MapDefaults::default(),
            geolocation_timeout_ms: 12_000,
            catalog_base: VPIC_BASE.to_string(),
            review_form: REVIEW_FORM.to_string(),
            gallery_size: 12,
        }
    }

    /// Reads the year off the browser clock.
    pub fn from_browser() -> Self {
        let year = js_sys::Date::new_0().get_full_year() as i32;
        Self::for_year(year)
    }

    pub fn gallery_images(&self) -> Vec<String> {
        (1..=self.gallery_size)
            .map(|i| format!("/gallery/{i:02}.jpg"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_years_newest_first() {
        let cfg = SiteConfig::for_year(2026);
        assert_eq!(cfg.years.len(), 40);
        assert_eq!(cfg.years.first().map(String::as_str), Some("2026"));
        assert_eq!(cfg.years.last().map(String::as_str), Some("1987"));
    }

    #[test]
    fn service_menu_starts_with_tow() {
        let cfg = SiteConfig::for_year(2026);
        assert_eq!(cfg.services.first(), Some(&ServiceType::Tow));
        assert_eq!(cfg.services.len(), 6);
        assert_eq!(cfg.geolocation_timeout_ms, 12_000);
    }

    #[test]
    fn gallery_paths_are_zero_padded() {
        let imgs = SiteConfig::for_year(2026).gallery_images();
        assert_eq!(imgs.len(), 12);
        assert_eq!(imgs[0], "/gallery/01.jpg");
        assert_eq!(imgs[11], "/gallery/12.jpg");
    }
}
