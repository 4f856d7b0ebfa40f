use lw_entities::geo::GeoPoint;

use crate::map::MapWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    Latitude,
    Longitude,
}

/// Single source of truth for the selected point.
///
/// The two text fields and the map marker are eventually consistent:
/// the marker only moves after *both* fields contain a valid coordinate,
/// so the map never shows a half-typed point.
#[derive(Debug, Clone)]
pub struct CoordinateStore {
    latitude_text: String,
    longitude_text: String,
    marker: Option<GeoPoint>,
    default_center: GeoPoint,
}

impl CoordinateStore {
    pub const fn new(default_center: GeoPoint) -> Self {
        Self {
            latitude_text: String::new(),
            longitude_text: String::new(),
            marker: None,
            default_center,
        }
    }

    pub const fn marker(&self) -> Option<GeoPoint> {
        self.marker
    }

    pub fn latitude_text(&self) -> &str {
        &self.latitude_text
    }

    pub fn longitude_text(&self) -> &str {
        &self.longitude_text
    }

    pub const fn default_center(&self) -> GeoPoint {
        self.default_center
    }

    pub fn set_from_map_click<M>(&mut self, point: GeoPoint, map: &mut M)
    where
        M: MapWidget + ?Sized,
    {
        let (lat, lng) = point.to_lat_lng_deg();
        // The shortest representation that parses back to the same value
        self.latitude_text = lat.to_string();
        self.longitude_text = lng.to_string();
        self.marker = Some(point);
        map.place_marker(point);
    }

    /// Returns the new marker position if the input moved the marker.
    pub fn set_from_typed_field<M>(
        &mut self,
        field: CoordinateField,
        raw_text: &str,
        map: &mut M,
    ) -> Option<GeoPoint>
    where
        M: MapWidget + ?Sized,
    {
        match field {
            CoordinateField::Latitude => raw_text.clone_into(&mut self.latitude_text),
            CoordinateField::Longitude => raw_text.clone_into(&mut self.longitude_text),
        }
        let Some(point) = self.typed_point() else {
            log::trace!(
                "Coordinates not ready: '{}', '{}'",
                self.latitude_text,
                self.longitude_text
            );
            return None;
        };
        if self.marker == Some(point) {
            return None;
        }
        self.marker = Some(point);
        map.place_marker(point);
        map.pan_to(point);
        Some(point)
    }

    pub fn reset<M>(&mut self, map: &mut M)
    where
        M: MapWidget + ?Sized,
    {
        self.latitude_text.clear();
        self.longitude_text.clear();
        self.marker = None;
        map.clear_marker();
        map.pan_to(self.default_center);
    }

    fn typed_point(&self) -> Option<GeoPoint> {
        let lat = parse_degrees(&self.latitude_text)?;
        let lng = parse_degrees(&self.longitude_text)?;
        GeoPoint::try_from_lat_lng_deg(lat, lng).ok()
    }
}

fn parse_degrees(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HeadlessMap;
    use rand::Rng;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::try_from_lat_lng_deg(lat, lng).unwrap()
    }

    fn store() -> CoordinateStore {
        CoordinateStore::new(point(44.032052, -65.488756))
    }

    #[test]
    fn map_click_round_trips_through_text_fields() {
        let mut rng = rand::thread_rng();
        let mut map = HeadlessMap::new();
        let mut store = store();
        for _ in 0..1_000 {
            let clicked = point(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            store.set_from_map_click(clicked, &mut map);
            let lat: f64 = store.latitude_text().parse().unwrap();
            let lng: f64 = store.longitude_text().parse().unwrap();
            assert_eq!((lat, lng), clicked.to_lat_lng_deg());
            assert_eq!(store.marker(), Some(clicked));
            assert_eq!(map.marker(), Some(clicked));
        }
    }

    #[test]
    fn map_click_does_not_pan() {
        let mut map = HeadlessMap::new();
        let mut store = store();
        store.set_from_map_click(point(45.0, -63.5), &mut map);
        assert_eq!(map.pan_count(), 0);
    }

    #[test]
    fn incomplete_input_never_reaches_the_map() {
        let mut map = HeadlessMap::new();
        let mut store = store();
        let before = point(45.0, -63.5);
        store.set_from_map_click(before, &mut map);

        for (field, text) in [
            (CoordinateField::Latitude, ""),
            (CoordinateField::Latitude, "-"),
            (CoordinateField::Latitude, "4a"),
            (CoordinateField::Latitude, "NaN"),
            (CoordinateField::Latitude, "inf"),
            (CoordinateField::Latitude, "91"),
        ] {
            assert_eq!(store.set_from_typed_field(field, text, &mut map), None);
            assert_eq!(store.marker(), Some(before));
            assert_eq!(map.marker(), Some(before));
        }
        assert_eq!(map.pan_count(), 0);
        assert_eq!(store.latitude_text(), "91");
        assert_eq!(store.longitude_text(), "-63.5");
    }

    #[test]
    fn sync_once_both_fields_parse() {
        let mut map = HeadlessMap::new();
        let mut store = store();
        assert_eq!(
            store.set_from_typed_field(CoordinateField::Latitude, "44.5", &mut map),
            None
        );
        assert_eq!(store.marker(), None);
        let synced = store.set_from_typed_field(CoordinateField::Longitude, " -65.25 ", &mut map);
        assert_eq!(synced, Some(point(44.5, -65.25)));
        assert_eq!(map.marker(), synced);
        assert_eq!(map.center(), synced);
        assert_eq!(map.pan_count(), 1);
    }

    #[test]
    fn unchanged_point_is_not_synced_twice() {
        let mut map = HeadlessMap::new();
        let mut store = store();
        store.set_from_typed_field(CoordinateField::Latitude, "44.5", &mut map);
        store.set_from_typed_field(CoordinateField::Longitude, "-65", &mut map);
        assert_eq!(
            store.set_from_typed_field(CoordinateField::Longitude, "-65.0", &mut map),
            None
        );
        assert_eq!(map.pan_count(), 1);
    }

    #[test]
    fn reset_clears_and_pans_home() {
        let mut map = HeadlessMap::new();
        let mut store = store();
        store.set_from_map_click(point(45.0, -63.5), &mut map);
        store.reset(&mut map);
        assert_eq!(store.marker(), None);
        assert_eq!(store.latitude_text(), "");
        assert_eq!(store.longitude_text(), "");
        assert_eq!(map.marker(), None);
        assert_eq!(map.center(), Some(store.default_center()));
    }
}
