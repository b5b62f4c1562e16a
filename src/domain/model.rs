use chrono::{DateTime, Utc};
use image::DynamicImage;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub key: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub image_url: String,
}

impl MenuItem {
    /// Price rendered with two decimals, e.g. `$14.99`.
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    MenuService,
    CookService,
}

impl Role {
    pub fn console_prefix(&self) -> &'static str {
        match self {
            Role::Customer => "📱 Customer:",
            Role::MenuService => "🍽️ MenuAgent:",
            Role::CookService => "👨‍🍳 CookAgent:",
        }
    }
}

/// Resized picture attached to a composite message.
#[derive(Debug, Clone, Serialize)]
pub struct ImageAttachment {
    pub source_url: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub image: DynamicImage,
}

impl ImageAttachment {
    pub fn new(source_url: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            source_url: source_url.into(),
            width: image.width(),
            height: image.height(),
            image,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<ImageAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<CookingStage>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            attachment: None,
            stage: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_attachment(mut self, attachment: ImageAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_stage(mut self, stage: CookingStage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn is_composite(&self) -> bool {
        self.attachment.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub item_key: String,
    pub prep_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingStage {
    Received,
    PreparationStarted,
    Cooking,
    Completed,
}

impl CookingStage {
    pub const FIRST: CookingStage = CookingStage::Received;

    /// Linear progression; `Completed` is terminal.
    pub fn next(self) -> Option<CookingStage> {
        match self {
            CookingStage::Received => Some(CookingStage::PreparationStarted),
            CookingStage::PreparationStarted => Some(CookingStage::Cooking),
            CookingStage::Cooking => Some(CookingStage::Completed),
            CookingStage::Completed => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CookingStage::Received => "received",
            CookingStage::PreparationStarted => "preparation started",
            CookingStage::Cooking => "cooking",
            CookingStage::Completed => "completed",
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            CookingStage::Received => "Order received and validated",
            CookingStage::PreparationStarted => "Starting preparation",
            CookingStage::Cooking => "Cooking in progress",
            CookingStage::Completed => "Order completed",
        }
    }
}

impl fmt::Display for CookingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.status())
    }
}
