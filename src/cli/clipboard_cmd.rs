//! Pasteboard command handlers

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tokio::fs;

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::application::ClipboardService;
use crate::domain::files::FileRecord;
use crate::domain::pasteboard::{ClipboardItemInfo, ContentKind};
use crate::infrastructure::{create_pasteboard, LocalFileSystem, PasteboardBackend};

use super::app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
use super::presenter::Presenter;

/// Errors from pasteboard commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to access '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pasteboard task failed: {0}")]
    Task(String),
}

/// Read-only pasteboard queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Kind,
    HasImage,
    HasText,
    Text,
    Image { output: Option<PathBuf> },
    Tags,
    Items,
    Files,
    ChangeCount,
}

enum Answer {
    Kind(ContentKind),
    Flag(bool),
    Text(Option<String>),
    Image(Option<Vec<u8>>),
    Tags(Vec<String>),
    Items(Vec<ClipboardItemInfo>),
    Files(Vec<FileRecord>),
    Counter(i64),
}

fn answer<P: Pasteboard>(service: &ClipboardService<P, LocalFileSystem>, query: &Query) -> Answer {
    match query {
        Query::Kind => Answer::Kind(service.get_kind()),
        Query::HasImage => Answer::Flag(service.has_image()),
        Query::HasText => Answer::Flag(service.has_text()),
        Query::Text => Answer::Text(service.get_text()),
        Query::Image { .. } => Answer::Image(service.get_image_bytes()),
        Query::Tags => Answer::Tags(service.get_all_tags()),
        Query::Items => Answer::Items(service.describe_items()),
        Query::Files => Answer::Files(service.get_file_references()),
        Query::ChangeCount => Answer::Counter(service.get_change_counter()),
    }
}

/// Run a blocking service call on the blocking pool
async fn with_service<T, F>(backend: PasteboardBackend, call: F) -> Result<T, CommandError>
where
    T: Send + 'static,
    F: FnOnce(&ClipboardService<Box<dyn Pasteboard>, LocalFileSystem>) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let service = ClipboardService::new(create_pasteboard(backend), LocalFileSystem);
        call(&service)
    })
    .await
    .map_err(|e| CommandError::Task(e.to_string()))
}

/// Handle a query subcommand.
///
/// # Returns
/// The exit code: queries that find nothing (`has-image`, `text`, `image`)
/// exit with an error status so they can be used in shell conditions.
pub async fn handle_query(
    query: Query,
    backend: PasteboardBackend,
    presenter: &Presenter,
) -> Result<u8, CommandError> {
    let request = query.clone();
    let result = with_service(backend, move |service| answer(service, &request)).await?;

    match result {
        Answer::Kind(kind) => presenter.output(kind.as_str()),
        Answer::Flag(present) => {
            presenter.output(&present.to_string());
            if !present {
                return Ok(EXIT_ERROR);
            }
        }
        Answer::Text(Some(text)) => presenter.output(&text),
        Answer::Text(None) => {
            presenter.warn("No text on the pasteboard");
            return Ok(EXIT_ERROR);
        }
        Answer::Image(Some(bytes)) => match query {
            Query::Image {
                output: Some(path),
            } => {
                write_file(&path, &bytes).await?;
                presenter.success(&format!(
                    "Wrote {} bytes to {}",
                    bytes.len(),
                    path.display()
                ));
            }
            _ => presenter.output(&STANDARD.encode(&bytes)),
        },
        Answer::Image(None) => {
            presenter.warn("No image on the pasteboard");
            return Ok(EXIT_ERROR);
        }
        Answer::Tags(tags) => {
            for tag in tags {
                presenter.output(&tag);
            }
        }
        Answer::Items(items) => presenter.json(&items)?,
        Answer::Files(files) => presenter.json(&files)?,
        Answer::Counter(counter) => presenter.output(&counter.to_string()),
    }

    Ok(EXIT_SUCCESS)
}

/// Handle `set-image`
pub async fn handle_set_image(
    file: &Path,
    backend: PasteboardBackend,
    presenter: &Presenter,
) -> Result<u8, CommandError> {
    let bytes = fs::read(file).await.map_err(|e| CommandError::Io {
        path: file.display().to_string(),
        message: e.to_string(),
    })?;

    match with_service(backend, move |service| service.set_image(&bytes)).await? {
        Ok(true) => {
            presenter.success("Image copied to the pasteboard");
            Ok(EXIT_SUCCESS)
        }
        Ok(false) => {
            presenter.error("The pasteboard rejected the image");
            Ok(EXIT_ERROR)
        }
        Err(ClipboardError::InvalidInput(message)) => {
            presenter.error(&format!("{}: {}", file.display(), message));
            Ok(EXIT_USAGE_ERROR)
        }
        Err(e) => Err(e.into()),
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CommandError> {
    fs::write(path, bytes).await.map_err(|e| CommandError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
