use panwa_shared::Store;

/// Categories offered by the filter bar.
pub const CATEGORIES: &[(&str, &str)] = &[("restaurant", "Restaurants"), ("retail", "Retail Stores")];

/// The subset of `stores` whose category equals `category`; the full list
/// when no category is selected.
pub fn filter_by_category(stores: &[Store], category: Option<&str>) -> Vec<Store> {
    match category {
        Some(wanted) => stores
            .iter()
            .filter(|store| store.category.as_deref() == Some(wanted))
            .cloned()
            .collect(),
        None => stores.to_vec(),
    }
}
