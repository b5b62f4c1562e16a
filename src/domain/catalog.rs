use crate::domain::model::MenuItem;
use crate::utils::error::{OrderError, Result};

/// Ordered, immutable set of menu items keyed by lowercase key.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut normalized: Vec<MenuItem> = Vec::with_capacity(items.len());
        for mut item in items {
            item.key = item.key.to_lowercase();
            if normalized.iter().any(|existing| existing.key == item.key) {
                return Err(OrderError::DuplicateMenuKey { key: item.key });
            }
            normalized.push(item);
        }
        Ok(Self { items: normalized })
    }

    pub fn get(&self, key: &str) -> Option<&MenuItem> {
        let key = key.to_lowercase();
        self.items.iter().find(|item| item.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.key.as_str())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: vec![
                MenuItem {
                    key: "margherita".to_string(),
                    id: "pizza_001".to_string(),
                    name: "Margherita Pizza".to_string(),
                    description: "Classic pizza with tomato sauce, mozzarella, and basil"
                        .to_string(),
                    price_cents: 1299,
                    image_url: "https://images.unsplash.com/photo-1513104890138-7c749659a591"
                        .to_string(),
                },
                MenuItem {
                    key: "pepperoni".to_string(),
                    id: "pizza_002".to_string(),
                    name: "Pepperoni Pizza".to_string(),
                    description: "Traditional pizza topped with pepperoni slices".to_string(),
                    price_cents: 1499,
                    image_url: "https://images.unsplash.com/photo-1601924582970-9238bcb495d9"
                        .to_string(),
                },
            ],
        }
    }
}
