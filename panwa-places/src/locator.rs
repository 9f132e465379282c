use panwa_shared::Store;
use uuid::Uuid;

use crate::filter::filter_by_category;
use crate::map::{sync_markers, MapCanvas};

/// Page-level state for the store map: the fetched list, the active
/// category, and the store whose details panel is open.
///
/// The visible subset is always recomputed from the full fetched list, so
/// it stays consistent with the current category no matter how the two
/// change relative to each other.
pub struct StoreLocator {
    stores: Vec<Store>,
    category: Option<String>,
    selected: Option<Store>,
}

impl StoreLocator {
    /// Start from a fetched store list. A failed fetch is represented by an
    /// empty list upstream; nothing is retried here.
    pub fn new(stores: Vec<Store>) -> Self {
        Self {
            stores,
            category: None,
            selected: None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn selected(&self) -> Option<&Store> {
        self.selected.as_ref()
    }

    /// The stores matching the current category filter.
    pub fn visible(&self) -> Vec<Store> {
        filter_by_category(&self.stores, self.category.as_deref())
    }

    /// Change the category filter and rebuild the canvas marker set.
    pub fn set_category(&mut self, category: Option<String>, canvas: &mut dyn MapCanvas) {
        self.category = category;
        sync_markers(canvas, &self.visible());
    }

    /// A marker was clicked: open the details panel for that store.
    pub fn marker_clicked(&mut self, store_id: Uuid) -> Option<&Store> {
        self.selected = self.stores.iter().find(|s| s.id == store_id).cloned();
        self.selected.as_ref()
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::store;
    use crate::map::tests::FakeCanvas;

    fn seed() -> Vec<Store> {
        vec![
            store("Noodle Bar", Some("restaurant"), 13.75, 100.50),
            store("Coin Mart", Some("retail"), 13.80, 100.55),
            store("Satoshi Grill", Some("restaurant"), 13.70, 100.45),
        ]
    }

    #[test]
    fn test_category_change_rebuilds_markers() {
        let mut locator = StoreLocator::new(seed());
        let mut canvas = FakeCanvas::default();

        locator.set_category(Some("restaurant".to_string()), &mut canvas);
        assert_eq!(canvas.markers.len(), 2);

        locator.set_category(None, &mut canvas);
        assert_eq!(canvas.markers.len(), 3);
        assert_eq!(canvas.clears, 2);
    }

    #[test]
    fn test_visible_is_subset_of_fetched() {
        let mut locator = StoreLocator::new(seed());
        let mut canvas = FakeCanvas::default();
        locator.set_category(Some("retail".to_string()), &mut canvas);

        for store in locator.visible() {
            assert!(locator.stores.iter().any(|s| s.id == store.id));
        }
    }

    #[test]
    fn test_marker_click_opens_details() {
        let stores = seed();
        let wanted = stores[1].id;
        let mut locator = StoreLocator::new(stores);

        let selected = locator.marker_clicked(wanted).unwrap();
        assert_eq!(selected.name, "Coin Mart");

        locator.close_details();
        assert!(locator.selected().is_none());
    }

    #[test]
    fn test_unknown_marker_click_selects_nothing() {
        let mut locator = StoreLocator::new(seed());
        assert!(locator.marker_clicked(uuid::Uuid::new_v4()).is_none());
    }
}
