use crate::core::imaging::{self, PREVIEW_WIDTH};
use crate::domain::catalog::Catalog;
use crate::domain::model::{ImageAttachment, MenuItem, Message, Order, Role};
use crate::domain::ports::{ImageDisplay, ImageSource};
use crate::utils::error::Result;
use rand::Rng;
use std::ops::RangeInclusive;

pub const PREP_MINUTES: RangeInclusive<u32> = 15..=25;

/// What to do when a menu picture cannot be fetched or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ImageFailurePolicy {
    /// Stop the run with the underlying error.
    #[default]
    Abort,
    /// Answer with the description alone.
    TextOnly,
}

#[derive(Debug, Clone)]
pub enum Lookup {
    Found { item: MenuItem, message: Message },
    Unavailable { message: Message },
}

impl Lookup {
    pub fn message(&self) -> &Message {
        match self {
            Lookup::Found { message, .. } | Lookup::Unavailable { message } => message,
        }
    }

    pub fn into_message(self) -> Message {
        match self {
            Lookup::Found { message, .. } | Lookup::Unavailable { message } => message,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Confirmation {
    pub order: Order,
    pub message: Message,
}

/// Answers menu questions and confirms orders.
pub struct MenuAgent<I: ImageSource, D: ImageDisplay> {
    catalog: Catalog,
    images: I,
    display: D,
    image_policy: ImageFailurePolicy,
}

impl<I: ImageSource, D: ImageDisplay> MenuAgent<I, D> {
    pub fn new(catalog: Catalog, images: I, display: D) -> Self {
        Self {
            catalog,
            images,
            display,
            image_policy: ImageFailurePolicy::default(),
        }
    }

    pub fn with_image_policy(mut self, policy: ImageFailurePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn available_items(&self) -> String {
        self.catalog.keys().collect::<Vec<_>>().join(", ")
    }

    pub async fn lookup(&self, item_key: &str) -> Result<Lookup> {
        let Some(item) = self.catalog.get(item_key) else {
            tracing::info!("Item '{}' is not on the menu", item_key);
            let text = format!(
                "Sorry, {} is not available. Here's our menu: {}",
                item_key,
                self.available_items()
            );
            return Ok(Lookup::Unavailable {
                message: Message::text(Role::MenuService, text),
            });
        };

        tracing::debug!("Found menu item {} ({})", item.key, item.id);
        let message = Message::text(Role::MenuService, describe(item));

        match self.load_picture(item).await {
            Ok(attachment) => Ok(Lookup::Found {
                item: item.clone(),
                message: message.with_attachment(attachment),
            }),
            Err(e) if e.is_image_fault() && self.image_policy == ImageFailurePolicy::TextOnly => {
                tracing::warn!(
                    "⚠️ Picture for {} unavailable, answering with text only: {}",
                    item.key,
                    e
                );
                Ok(Lookup::Found {
                    item: item.clone(),
                    message,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn load_picture(&self, item: &MenuItem) -> Result<ImageAttachment> {
        let bytes = self.images.fetch(&item.image_url).await?;
        let picture = imaging::decode(&bytes)?;
        let resized = imaging::resize_to_width(&picture, PREVIEW_WIDTH)?;
        self.display.show(&item.key, &resized).await?;
        Ok(ImageAttachment::new(item.image_url.clone(), resized))
    }

    pub fn confirm_order(&self, item_key: &str) -> Confirmation {
        self.confirm_order_with(item_key, &mut rand::thread_rng())
    }

    pub fn confirm_order_with<R: Rng>(&self, item_key: &str, rng: &mut R) -> Confirmation {
        let prep_minutes = rng.gen_range(PREP_MINUTES);
        tracing::debug!("Estimated preparation time: {} minutes", prep_minutes);

        let text = format!(
            "Thank you for confirming your order for {}! \
             Your order will be ready in approximately {} minutes. \
             Our chef will start preparing it right away.",
            capitalize(item_key),
            prep_minutes
        );

        Confirmation {
            order: Order {
                item_key: item_key.to_lowercase(),
                prep_minutes,
            },
            message: Message::text(Role::MenuService, text),
        }
    }
}

fn describe(item: &MenuItem) -> String {
    format!(
        "Here's our {name}:\n{description}\nPrice: {price}\n\n\
         Would you like to place an order for this {name}? 🍕",
        name = item.name,
        description = item.description,
        price = item.display_price()
    )
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
