//! Native alerts and action sheets for Tauri mobile apps.
//!
//! ```ignore
//! use tauri_plugin_actionsheet::{Action, ActionSheetExt, Dialog};
//!
//! let dialog = Dialog::alert(
//!     "Delete?",
//!     "This cannot be undone",
//!     vec![
//!         Action::cancel("Cancel", || {}),
//!         Action::destructive("Delete", move || delete_item()),
//!     ],
//! );
//! app.action_sheet().present(dialog).await?;
//! ```

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use bridge::{present, DialogChannel, Reply};
pub use dialog::{Action, ActionHandler, Dialog, Handler, HandlerTable};
pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod bridge;
mod commands;
mod dialog;
mod error;
mod models;

pub use error::{Error, Result};

#[cfg(desktop)]
pub use desktop::ActionSheet;
#[cfg(mobile)]
pub use mobile::ActionSheet;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the actionsheet APIs.
pub trait ActionSheetExt<R: Runtime> {
    fn action_sheet(&self) -> &ActionSheet<R>;
}

impl<R: Runtime, T: Manager<R>> crate::ActionSheetExt<R> for T {
    fn action_sheet(&self) -> &ActionSheet<R> {
        self.state::<ActionSheet<R>>().inner()
    }
}

/// Initializes the actionsheet plugin.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("actionsheet")
        .invoke_handler(tauri::generate_handler![commands::show_dialog])
        .setup(|app, api| {
            #[cfg(mobile)]
            let action_sheet = mobile::init(app, api)?;
            #[cfg(desktop)]
            let action_sheet = desktop::init(app, api)?;
            app.manage(action_sheet);
            Ok(())
        })
        .build()
}
