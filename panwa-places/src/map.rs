use panwa_shared::Store;

/// Geographic extent of a marker set, grown one coordinate at a time the
/// way the map widget's bounds object is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Bounds {
    pub fn around(latitude: f64, longitude: f64) -> Self {
        Self {
            min_latitude: latitude,
            max_latitude: latitude,
            min_longitude: longitude,
            max_longitude: longitude,
        }
    }

    pub fn extend(&mut self, latitude: f64, longitude: f64) {
        self.min_latitude = self.min_latitude.min(latitude);
        self.max_latitude = self.max_latitude.max(latitude);
        self.min_longitude = self.min_longitude.min(longitude);
        self.max_longitude = self.max_longitude.max(longitude);
    }

    /// Bounds containing every store, or `None` for an empty list.
    pub fn containing(stores: &[Store]) -> Option<Self> {
        let mut stores = stores.iter();
        let first = stores.next()?;
        let mut bounds = Bounds::around(first.latitude, first.longitude);
        for store in stores {
            bounds.extend(store.latitude, store.longitude);
        }
        Some(bounds)
    }
}

/// Capability interface over the map rendering engine. The engine itself
/// (tiles, panning, marker DOM) is an external collaborator; this trait is
/// the seam the locator drives it through.
pub trait MapCanvas {
    /// Remove every marker previously placed through this canvas.
    fn clear_markers(&mut self);

    /// Place one marker for a store. Clicking it must report the store's id
    /// back through the locator.
    fn add_marker(&mut self, store: &Store);

    /// Move the viewport to contain the given extent.
    fn fit_bounds(&mut self, bounds: Bounds);
}

/// Rebuild the canvas marker set for a new store list.
///
/// Markers are never reused across updates: every previous marker is
/// removed, one marker is added per store, and the viewport is fitted to
/// the new set. An empty list leaves the viewport where it was.
pub fn sync_markers(canvas: &mut dyn MapCanvas, stores: &[Store]) {
    canvas.clear_markers();
    for store in stores {
        canvas.add_marker(store);
    }
    if let Some(bounds) = Bounds::containing(stores) {
        canvas.fit_bounds(bounds);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::filter::tests::store;

    /// Canvas double that records what the locator asked of it.
    #[derive(Default)]
    pub(crate) struct FakeCanvas {
        pub markers: Vec<String>,
        pub fitted: Vec<Bounds>,
        pub clears: usize,
    }

    impl MapCanvas for FakeCanvas {
        fn clear_markers(&mut self) {
            self.clears += 1;
            self.markers.clear();
        }

        fn add_marker(&mut self, store: &Store) {
            self.markers.push(store.name.clone());
        }

        fn fit_bounds(&mut self, bounds: Bounds) {
            self.fitted.push(bounds);
        }
    }

    #[test]
    fn test_marker_count_tracks_list() {
        let mut canvas = FakeCanvas::default();
        let stores = vec![
            store("A", Some("restaurant"), 13.75, 100.50),
            store("B", Some("retail"), 13.80, 100.60),
        ];

        sync_markers(&mut canvas, &stores);
        assert_eq!(canvas.markers.len(), 2);

        // Shrinking the list leaves no stale markers behind.
        sync_markers(&mut canvas, &stores[..1]);
        assert_eq!(canvas.markers, vec!["A".to_string()]);
        assert_eq!(canvas.clears, 2);
    }

    #[test]
    fn test_empty_list_keeps_viewport() {
        let mut canvas = FakeCanvas::default();
        sync_markers(&mut canvas, &[]);
        assert!(canvas.markers.is_empty());
        assert!(canvas.fitted.is_empty());
    }

    #[test]
    fn test_bounds_contain_all_markers() {
        let stores = vec![
            store("A", None, 13.75, 100.50),
            store("B", None, 13.90, 100.40),
            store("C", None, 13.60, 100.70),
        ];
        let bounds = Bounds::containing(&stores).unwrap();
        assert_eq!(bounds.min_latitude, 13.60);
        assert_eq!(bounds.max_latitude, 13.90);
        assert_eq!(bounds.min_longitude, 100.40);
        assert_eq!(bounds.max_longitude, 100.70);
    }
}
