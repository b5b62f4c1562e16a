use crate::domain::model::{CookingStage, Message, Order, Role};

pub const COMPLETION_NOTICE: &str =
    "🎉 Your order is ready! Please pick it up from the counter. Enjoy your meal! 🍕";

/// Reports kitchen progress. The updates are scripted and do not depend on the order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookAgent;

impl CookAgent {
    pub fn new() -> Self {
        Self
    }

    pub fn process_order(&self, order: &Order) -> Vec<Message> {
        tracing::debug!(
            "Kitchen picked up {} ({} min estimate)",
            order.item_key,
            order.prep_minutes
        );

        std::iter::successors(Some(CookingStage::FIRST), |stage| stage.next())
            .map(|stage| Message::text(Role::CookService, stage.to_string()).with_stage(stage))
            .collect()
    }

    pub fn send_completion_notice(&self) -> Message {
        Message::text(Role::CookService, COMPLETION_NOTICE)
    }
}
