use crate::core::cook_agent::CookAgent;
use crate::core::menu_agent::MenuAgent;
use crate::domain::model::{Message, Order, Role};
use crate::domain::ports::{ImageDisplay, ImageSource};
use crate::utils::error::Result;
use std::io::Write;

pub const BANNER: &str = "=== Multi-Agent Restaurant Order System ===";
pub const CUSTOMER_CONFIRMATION: &str = "Yes, I confirm my order.";

#[derive(Debug, Clone)]
pub struct FlowOutcome {
    pub transcript: Vec<Message>,
    /// `None` when the requested item was not on the menu.
    pub order: Option<Order>,
}

impl FlowOutcome {
    pub fn is_completed(&self) -> bool {
        self.order.is_some()
    }
}

/// Drives one customer through lookup, confirmation and cooking, in that order.
pub struct OrderFlow<I: ImageSource, D: ImageDisplay> {
    menu_agent: MenuAgent<I, D>,
    cook_agent: CookAgent,
}

impl<I: ImageSource, D: ImageDisplay> OrderFlow<I, D> {
    pub fn new(menu_agent: MenuAgent<I, D>, cook_agent: CookAgent) -> Self {
        Self {
            menu_agent,
            cook_agent,
        }
    }

    pub async fn run<W: Write>(&self, item_key: &str, out: &mut W) -> Result<FlowOutcome> {
        tracing::info!("🍕 Starting order flow for '{}'", item_key);
        let mut transcript = Vec::new();

        writeln!(out, "\n{}\n", BANNER)?;

        // Customer asks
        let request = Message::text(Role::Customer, format!("I would like to order {}", item_key));
        say(out, &request)?;
        transcript.push(request);

        // Menu agent answers
        let lookup = self.menu_agent.lookup(item_key).await?;
        let available = lookup.is_available();
        let answer = lookup.into_message();
        say(out, &answer)?;
        transcript.push(answer);

        if !available {
            tracing::info!("Order flow stopped: '{}' is not on the menu", item_key);
            return Ok(FlowOutcome {
                transcript,
                order: None,
            });
        }

        // Customer confirms
        let confirm = Message::text(Role::Customer, CUSTOMER_CONFIRMATION);
        say(out, &confirm)?;
        transcript.push(confirm);

        let confirmation = self.menu_agent.confirm_order(item_key);
        say(out, &confirmation.message)?;
        transcript.push(confirmation.message);
        let order = confirmation.order;
        tracing::info!(
            "Order confirmed: {} ready in ~{} minutes",
            order.item_key,
            order.prep_minutes
        );

        // Kitchen
        writeln!(out, "👨‍🍳 Kitchen Updates:")?;
        for update in self.cook_agent.process_order(&order) {
            writeln!(out, "{}", update.text)?;
            transcript.push(update);
        }
        writeln!(out)?;

        let notice = self.cook_agent.send_completion_notice();
        writeln!(out, "{} {}", notice.role.console_prefix(), notice.text)?;
        transcript.push(notice);

        tracing::info!("✅ Order flow completed ({} messages)", transcript.len());
        Ok(FlowOutcome {
            transcript,
            order: Some(order),
        })
    }
}

fn say<W: Write>(out: &mut W, message: &Message) -> Result<()> {
    writeln!(out, "{} {}\n", message.role.console_prefix(), message.text)?;
    Ok(())
}
