pub mod filter;
pub mod locator;
pub mod map;
pub mod token;

pub use filter::{filter_by_category, CATEGORIES};
pub use locator::StoreLocator;
pub use map::{sync_markers, Bounds, MapCanvas};
pub use token::{MapTokenStore, TokenStoreError};
