// src/map.rs — live map on the Schedule page
//
// Leaflet itself is driven from a small shim in index.html; Rust only decides when
// to call it.

use wasm_bindgen::prelude::*;

use crate::booking::Coordinates;

#[wasm_bindgen]
extern "C" {
    // Must match the functions defined in index.html
    #[wasm_bindgen(js_namespace = window, js_name = boMapInit)]
    fn map_init(container_id: &str, lat: f64, lng: f64, zoom: u8);

    #[wasm_bindgen(js_namespace = window, js_name = boMapShow)]
    fn map_show(lat: f64, lng: f64, zoom: u8);
}

pub trait MapPresenter {
    fn initialize(&mut self, container_id: &str, center: Coordinates, zoom: u8);
    /// Recenters and drops the pin. Moving an existing pin, never adding a second one.
    fn show(&mut self, at: Coordinates, zoom: u8);
}

#[derive(Default)]
pub struct LeafletMap;

impl MapPresenter for LeafletMap {
    fn initialize(&mut self, container_id: &str, center: Coordinates, zoom: u8) {
        map_init(container_id, center.latitude, center.longitude, zoom);
    }

    fn show(&mut self, at: Coordinates, zoom: u8) {
        map_show(at.latitude, at.longitude, zoom);
    }
}

/// Keeps redraws down to the moments that matter: one init per mount, one `show`
/// per new coordinate.
pub struct MapSync<P: MapPresenter> {
    presenter: P,
    mounted: bool,
    shown: Option<Coordinates>,
    zoom: u8,
}

impl<P: MapPresenter> MapSync<P> {
    pub fn new(presenter: P, located_zoom: u8) -> Self {
        Self {
            presenter,
            mounted: false,
            shown: None,
            zoom: located_zoom,
        }
    }

    pub fn mount(&mut self, container_id: &str, center: Coordinates, zoom: u8) {
        if self.mounted {
            return;
        }
        self.presenter.initialize(container_id, center, zoom);
        self.mounted = true;
    }

    pub fn sync(&mut self, coords: Option<Coordinates>) {
        let Some(c) = coords else { return; };
        if !self.mounted || self.shown == Some(c) {
            return;
        }
        self.presenter.show(c, self.zoom);
        self.shown = Some(c);
    }

    #[cfg(test)]
    fn presenter(&self) -> &P {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl MapPresenter for Recorder {
        fn initialize(&mut self, container_id: &str, center: Coordinates, zoom: u8) {
            self.calls.push(format!(
                "init {container_id} {},{} z{zoom}",
                center.latitude, center.longitude
            ));
        }

        fn show(&mut self, at: Coordinates, zoom: u8) {
            self.calls
                .push(format!("show {},{} z{zoom}", at.latitude, at.longitude));
        }
    }

    #[test]
    fn initializes_once_per_mount() {
        let mut sync = MapSync::new(Recorder::default(), 15);
        sync.mount("bo-map", Coordinates::new(39.5, -98.35), 4);
        sync.mount("bo-map", Coordinates::new(39.5, -98.35), 4);
        assert_eq!(sync.presenter().calls, vec!["init bo-map 39.5,-98.35 z4"]);
    }

    #[test]
    fn shows_only_on_coordinate_change() {
        let mut sync = MapSync::new(Recorder::default(), 15);
        sync.mount("bo-map", Coordinates::new(39.5, -98.35), 4);

        sync.sync(None);
        sync.sync(Some(Coordinates::new(30.0, -97.0)));
        sync.sync(Some(Coordinates::new(30.0, -97.0)));
        sync.sync(None);
        sync.sync(Some(Coordinates::new(30.5, -97.0)));

        assert_eq!(
            sync.presenter().calls,
            vec![
                "init bo-map 39.5,-98.35 z4",
                "show 30,-97 z15",
                "show 30.5,-97 z15",
            ]
        );
    }

    #[test]
    fn nothing_is_drawn_before_mount() {
        let mut sync = MapSync::new(Recorder::default(), 15);
        sync.sync(Some(Coordinates::new(30.0, -97.0)));
        assert!(sync.presenter().calls.is_empty());
    }
}
