use crate::adapters::{HttpImageSource, LocalStorage, NoDisplay, PreviewDisplay};
use crate::config::ConfigProvider;
use crate::core::cook_agent::CookAgent;
use crate::core::flow::{FlowOutcome, OrderFlow};
use crate::core::menu_agent::MenuAgent;
use crate::domain::catalog::Catalog;
use crate::domain::model::Message;
use crate::domain::ports::{ImageDisplay, ImageSource, Storage};
use crate::utils::error::{OrderError, Result};
use std::io::Write;
use std::path::Path;

/// Wires the agents from configuration and runs one order.
pub async fn run_order<C: ConfigProvider, W: Write>(
    config: &C,
    catalog: Catalog,
    out: &mut W,
) -> Result<FlowOutcome> {
    run_order_with(config, catalog, HttpImageSource::new(), out).await
}

pub async fn run_order_with<C, I, W>(
    config: &C,
    catalog: Catalog,
    images: I,
    out: &mut W,
) -> Result<FlowOutcome>
where
    C: ConfigProvider,
    I: ImageSource,
    W: Write,
{
    let outcome = match config.preview_dir() {
        Some(dir) => {
            tracing::debug!("Menu pictures will be saved under {}", dir);
            let display = PreviewDisplay::new(LocalStorage::new(dir));
            run_flow(config, catalog, images, display, out).await?
        }
        None => run_flow(config, catalog, images, NoDisplay, out).await?,
    };

    if let Some(path) = config.transcript_path() {
        write_transcript(path, &outcome.transcript).await?;
        tracing::info!("📁 Transcript saved to: {}", path);
    }

    Ok(outcome)
}

async fn run_flow<C, I, D, W>(
    config: &C,
    catalog: Catalog,
    images: I,
    display: D,
    out: &mut W,
) -> Result<FlowOutcome>
where
    C: ConfigProvider,
    I: ImageSource,
    D: ImageDisplay,
    W: Write,
{
    let menu_agent =
        MenuAgent::new(catalog, images, display).with_image_policy(config.image_failure_policy());
    let flow = OrderFlow::new(menu_agent, CookAgent::new());
    flow.run(config.item(), out).await
}

pub async fn write_transcript(path: &str, transcript: &[Message]) -> Result<()> {
    let path = Path::new(path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| OrderError::InvalidConfigValueError {
            field: "transcript_path".to_string(),
            value: path.display().to_string(),
            reason: "Path has no file name".to_string(),
        })?;
    let dir = path
        .parent()
        .map(|parent| parent.to_string_lossy().into_owned())
        .unwrap_or_default();

    let json = serde_json::to_string_pretty(transcript)?;
    LocalStorage::new(dir)
        .write_file(file_name, json.as_bytes())
        .await
}
