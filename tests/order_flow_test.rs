use httpmock::prelude::*;
use image::{DynamicImage, ImageFormat};
use restaurant_order::app::{run_order, run_order_with};
use restaurant_order::core::cook_agent::COMPLETION_NOTICE;
use restaurant_order::domain::model::{CookingStage, MenuItem, Role};
use restaurant_order::utils::error::ErrorCategory;
use restaurant_order::{Catalog, CliConfig, ImageFailurePolicy, ModelConfig};
use std::io::Cursor;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// Built-in menu with every picture served by the mock server.
fn catalog_on(server: &MockServer) -> Catalog {
    let items: Vec<MenuItem> = Catalog::default()
        .items()
        .iter()
        .cloned()
        .map(|mut item| {
            item.image_url = server.url(format!("/images/{}.png", item.key));
            item
        })
        .collect();
    Catalog::new(items).unwrap()
}

fn config(item: &str) -> CliConfig {
    CliConfig {
        item: item.to_string(),
        menu_file: None,
        preview_dir: None,
        on_image_error: ImageFailurePolicy::Abort,
        transcript_path: None,
        verbose: false,
        log_json: false,
        model: ModelConfig::default(),
    }
}

#[tokio::test]
async fn test_pepperoni_order_end_to_end() {
    let server = MockServer::start();
    let image_mock = server.mock(|when, then| {
        when.method(GET).path("/images/pepperoni.png");
        then.status(200)
            .header("Content-Type", "image/png")
            .body(png_bytes(800, 600));
    });

    let mut out = Vec::new();
    let outcome = assert_ok!(run_order(&config("pepperoni"), catalog_on(&server), &mut out).await);

    image_mock.assert();
    let order = outcome.order.clone().expect("order should be placed");
    assert_eq!(order.item_key, "pepperoni");
    assert!((15..=25).contains(&order.prep_minutes));

    // request, description, customer confirmation, confirmation, 4 updates, notice
    assert_eq!(outcome.transcript.len(), 9);

    let description = &outcome.transcript[1];
    assert_eq!(description.role, Role::MenuService);
    assert!(description
        .text
        .contains("Traditional pizza topped with pepperoni slices"));
    assert!(description.text.contains("Price: $14.99"));
    let attachment = description.attachment.as_ref().expect("picture attached");
    assert_eq!((attachment.width, attachment.height), (200, 150));

    assert!(outcome.transcript[3].text.contains("Pepperoni"));

    let stages: Vec<CookingStage> = outcome.transcript[4..8]
        .iter()
        .filter_map(|m| m.stage)
        .collect();
    assert_eq!(
        stages,
        vec![
            CookingStage::Received,
            CookingStage::PreparationStarted,
            CookingStage::Cooking,
            CookingStage::Completed,
        ]
    );
    assert_eq!(outcome.transcript[8].text, COMPLETION_NOTICE);

    let console = String::from_utf8(out).unwrap();
    let expected_order = [
        "=== Multi-Agent Restaurant Order System ===",
        "📱 Customer: I would like to order pepperoni",
        "🍽️ MenuAgent: Here's our Pepperoni Pizza:",
        "📱 Customer: Yes, I confirm my order.",
        "🍽️ MenuAgent: Thank you for confirming your order for Pepperoni!",
        "👨‍🍳 Kitchen Updates:",
        "received: Order received and validated",
        "completed: Order completed",
        "👨‍🍳 CookAgent: 🎉 Your order is ready!",
    ];
    let mut cursor = 0;
    for line in expected_order {
        let found = console[cursor..]
            .find(line)
            .unwrap_or_else(|| panic!("missing or out of order: {line}\n---\n{console}"));
        cursor += found + line.len();
    }
}

#[tokio::test]
async fn test_margherita_order_end_to_end() {
    let server = MockServer::start();
    let image_mock = server.mock(|when, then| {
        when.method(GET).path("/images/margherita.png");
        then.status(200).body(png_bytes(300, 200));
    });

    let mut out = Vec::new();
    let outcome = assert_ok!(run_order(&config("Margherita"), catalog_on(&server), &mut out).await);

    image_mock.assert();
    assert!(outcome.is_completed());
    assert!(outcome.transcript[1].text.contains("Price: $12.99"));
    assert!(outcome.transcript[1]
        .text
        .contains("Classic pizza with tomato sauce, mozzarella, and basil"));
    let attachment = outcome.transcript[1].attachment.as_ref().unwrap();
    assert_eq!((attachment.width, attachment.height), (200, 133));
    assert!(outcome.transcript[3].text.contains("Margherita"));
}

#[tokio::test]
async fn test_unknown_item_never_touches_the_network() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.any_request();
        then.status(200).body(png_bytes(10, 10));
    });

    let mut out = Vec::new();
    let outcome = assert_ok!(run_order(&config("chicken"), catalog_on(&server), &mut out).await);

    any_request.assert_hits(0);
    assert!(!outcome.is_completed());
    assert_eq!(outcome.transcript.len(), 2);
    assert_eq!(
        outcome.transcript[1].text,
        "Sorry, chicken is not available. Here's our menu: margherita, pepperoni"
    );

    let console = String::from_utf8(out).unwrap();
    assert!(!console.contains("Yes, I confirm my order."));
    assert!(!console.contains("Kitchen Updates"));
}

#[tokio::test]
async fn test_image_server_error_aborts_by_default() {
    let server = MockServer::start();
    let image_mock = server.mock(|when, then| {
        when.method(GET).path("/images/pepperoni.png");
        then.status(500);
    });

    let mut out = Vec::new();
    let err = assert_err!(run_order(&config("pepperoni"), catalog_on(&server), &mut out).await);

    image_mock.assert();
    assert_eq!(err.category(), ErrorCategory::Transport);
}

#[tokio::test]
async fn test_undecodable_image_aborts_by_default() {
    let server = MockServer::start();
    let image_mock = server.mock(|when, then| {
        when.method(GET).path("/images/margherita.png");
        then.status(200).body("<html>not a picture</html>");
    });

    let mut out = Vec::new();
    let err = assert_err!(run_order(&config("margherita"), catalog_on(&server), &mut out).await);

    image_mock.assert();
    assert_eq!(err.category(), ErrorCategory::Decode);
}

#[tokio::test]
async fn test_text_only_policy_completes_without_picture() {
    let server = MockServer::start();
    let image_mock = server.mock(|when, then| {
        when.method(GET).path("/images/pepperoni.png");
        then.status(404);
    });

    let mut config = config("pepperoni");
    config.on_image_error = ImageFailurePolicy::TextOnly;

    let mut out = Vec::new();
    let outcome = assert_ok!(run_order(&config, catalog_on(&server), &mut out).await);

    image_mock.assert();
    assert!(outcome.is_completed());
    assert!(outcome.transcript[1].attachment.is_none());
    assert!(outcome.transcript[1].text.contains("Price: $14.99"));
}

#[tokio::test]
async fn test_preview_and_transcript_are_written() {
    let temp_dir = TempDir::new().unwrap();
    let preview_dir = temp_dir.path().join("previews");
    let transcript_path = temp_dir.path().join("out").join("transcript.json");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/images/margherita.png");
        then.status(200).body(png_bytes(400, 500));
    });

    let mut config = config("margherita");
    config.preview_dir = Some(preview_dir.to_str().unwrap().to_string());
    config.transcript_path = Some(transcript_path.to_str().unwrap().to_string());

    let mut out = Vec::new();
    assert_ok!(run_order(&config, catalog_on(&server), &mut out).await);

    let preview = image::open(preview_dir.join("margherita.png")).unwrap();
    assert_eq!((preview.width(), preview.height()), (200, 250));

    let transcript: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&transcript_path).unwrap()).unwrap();
    let messages = transcript.as_array().unwrap();
    assert_eq!(messages.len(), 9);
    assert_eq!(messages[0]["role"], "customer");
    assert_eq!(messages[1]["attachment"]["width"], 200);
    assert_eq!(messages[4]["stage"], "received");
    assert_eq!(messages[8]["role"], "cook_service");
}

#[tokio::test]
async fn test_custom_image_source_is_used() {
    use async_trait::async_trait;
    use restaurant_order::domain::ports::ImageSource;

    struct Fixed(Vec<u8>);

    #[async_trait]
    impl ImageSource for Fixed {
        async fn fetch(&self, _url: &str) -> restaurant_order::Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    let mut out = Vec::new();
    let outcome = assert_ok!(
        run_order_with(
            &config("pepperoni"),
            Catalog::default(),
            Fixed(png_bytes(1000, 1000)),
            &mut out
        )
        .await
    );

    let attachment = outcome.transcript[1].attachment.as_ref().unwrap();
    assert_eq!((attachment.width, attachment.height), (200, 200));
}
