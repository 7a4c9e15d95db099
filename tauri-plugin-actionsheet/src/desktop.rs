//! Desktop fallback.
//!
//! Desktop webviews have no native alert controller to drive, so every
//! presentation fails with [`Error::UnsupportedPlatform`] before any
//! handler can run. The plugin still loads so apps can share one setup path.

use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};
use tracing::warn;

use crate::bridge::{self, DialogChannel, Reply};
use crate::dialog::Dialog;
use crate::error::Error;
use crate::models::*;

/// Initialize the desktop plugin.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<ActionSheet<R>> {
    Ok(ActionSheet(app.clone()))
}

/// Access to the actionsheet APIs for desktop platforms.
pub struct ActionSheet<R: Runtime>(AppHandle<R>);

impl<R: Runtime> ActionSheet<R> {
    /// Always fails with [`Error::UnsupportedPlatform`].
    pub async fn present(&self, dialog: Dialog) -> crate::Result<Option<usize>> {
        bridge::present(self, dialog).await
    }

    /// Always fails with [`Error::UnsupportedPlatform`].
    pub async fn show_dialog(&self, request: ShowDialogRequest) -> crate::Result<Selection> {
        bridge::request_selection(self, request).await
    }
}

impl<R: Runtime> DialogChannel for ActionSheet<R> {
    fn send(&self, request: ShowDialogRequest, reply: Reply) {
        warn!(
            "Cannot present dialog {:?}: native dialogs are not available on desktop",
            request.title.as_deref().unwrap_or_default()
        );
        reply.resolve(Err(Error::UnsupportedPlatform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::Action;
    use crate::ActionSheetExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tauri::test::{mock_app, MockRuntime};
    use tauri::Manager;

    #[tokio::test]
    async fn test_present_fails_without_running_handlers() {
        let app = mock_app();
        app.manage(ActionSheet::<MockRuntime>(app.handle().clone()));

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let dialog = Dialog::alert(
            "Delete?",
            "This cannot be undone",
            vec![
                Action::cancel("Cancel", || {}),
                Action::destructive("Delete", move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            ],
        );

        let err = app.action_sheet().present(dialog).await.unwrap_err();

        assert_eq!(err, Error::UnsupportedPlatform);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_show_dialog_fails_on_desktop() {
        let app = mock_app();
        let sheet = ActionSheet::<MockRuntime>(app.handle().clone());
        let request = Dialog::new(vec![Action::new("Info")]).to_request();

        assert_eq!(
            sheet.show_dialog(request).await.unwrap_err(),
            Error::UnsupportedPlatform
        );
    }
}
