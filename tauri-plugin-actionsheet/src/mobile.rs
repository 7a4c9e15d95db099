//! Mobile implementation bridging to native Android/iOS code.
//!
//! This module provides the Rust bridge that calls into:
//! - **Android**: Kotlin plugin presenting an `AlertDialog`
//! - **iOS**: Swift plugin presenting a `UIAlertController`

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};
use tracing::debug;

use crate::bridge::{self, DialogChannel, Reply};
use crate::dialog::Dialog;
use crate::error::Error;
use crate::models::*;

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_actionsheet);

/// Initialize the mobile plugin by registering native code.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<ActionSheet<R>> {
    #[cfg(target_os = "android")]
    let handle = api.register_android_plugin("app.tauri.actionsheet", "ActionSheetPlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_actionsheet)?;
    Ok(ActionSheet(Arc::new(handle)))
}

/// Access to the actionsheet APIs for mobile platforms.
pub struct ActionSheet<R: Runtime>(Arc<PluginHandle<R>>);

impl<R: Runtime> ActionSheet<R> {
    /// Present `dialog` natively and run the chosen action's handler.
    ///
    /// Suspends until the user picks an action or the dialog is dismissed.
    pub async fn present(&self, dialog: Dialog) -> crate::Result<Option<usize>> {
        bridge::present(self, dialog).await
    }

    /// Present a dialog described by the frontend and report what was picked.
    pub async fn show_dialog(&self, request: ShowDialogRequest) -> crate::Result<Selection> {
        bridge::request_selection(self, request).await
    }
}

impl<R: Runtime> DialogChannel for ActionSheet<R> {
    fn send(&self, request: ShowDialogRequest, reply: Reply) {
        let handle = Arc::clone(&self.0);
        // run_mobile_plugin blocks until the native side resolves, which only
        // happens once the user has interacted with the dialog.
        tauri::async_runtime::spawn_blocking(move || {
            debug!("Invoking native showDialog");
            let response = handle
                .run_mobile_plugin::<Value>("showDialog", request)
                .map_err(Error::from);
            reply.resolve(response);
        });
    }
}
