//! Tauri command handlers for the actionsheet plugin.

use tauri::{command, AppHandle, Runtime};

use crate::models::*;
use crate::ActionSheetExt;
use crate::Result;

/// Present a native dialog described by the frontend.
///
/// Handlers stay in JavaScript: the response only carries the
/// construction-order index of the chosen action, or `null` when the
/// dialog was dismissed. Fails with `UnsupportedPlatform` on desktop.
#[command]
pub(crate) async fn show_dialog<R: Runtime>(
    app: AppHandle<R>,
    request: ShowDialogRequest,
) -> Result<ShowDialogResponse> {
    let selection = app.action_sheet().show_dialog(request).await?;
    Ok(selection.into())
}
