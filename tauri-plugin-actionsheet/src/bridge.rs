//! Round trip from a [`Dialog`] to the native widget and back.
//!
//! The request goes out through a [`DialogChannel`] together with a one-shot
//! [`Reply`]. Handlers never leave this side: they wait in a
//! [`HandlerTable`](crate::dialog::HandlerTable) until the reply names an index.

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::dialog::Dialog;
use crate::models::{Selection, ShowDialogRequest};
use crate::Result;

/// Resolver for a single presentation.
///
/// `resolve` consumes the reply, so a channel can answer at most once.
#[derive(Debug)]
pub struct Reply(oneshot::Sender<Result<Value>>);

impl Reply {
    /// Deliver the native response (or the invocation error) to the waiting caller.
    pub fn resolve(self, response: Result<Value>) {
        if self.0.send(response).is_err() {
            debug!("Dialog response arrived after the caller stopped waiting");
        }
    }
}

/// Something that can carry a dialog request to native code.
pub trait DialogChannel {
    /// Start presenting `request` and resolve `reply` once the user is done.
    ///
    /// Implementations may resolve inline or from another thread.
    fn send(&self, request: ShowDialogRequest, reply: Reply);
}

/// Send `request` and wait for the user's choice.
pub(crate) async fn request_selection<C>(channel: &C, request: ShowDialogRequest) -> Result<Selection>
where
    C: DialogChannel + ?Sized,
{
    let (tx, rx) = oneshot::channel();
    channel.send(request, Reply(tx));

    match rx.await {
        Ok(response) => Ok(Selection::from_response(&response?)),
        Err(_) => {
            warn!("Dialog channel dropped its reply, treating as dismissed");
            Ok(Selection::Dismissed)
        }
    }
}

/// Present `dialog` and run the handler of the chosen action, if any.
///
/// Returns the index of the action whose handler ran. Dismissals, indices
/// outside the action list, and disabled actions all resolve to `Ok(None)`.
pub async fn present<C>(channel: &C, dialog: Dialog) -> Result<Option<usize>>
where
    C: DialogChannel + ?Sized,
{
    if !dialog.is_dismissable() {
        warn!(
            "Presenting dialog {:?} with no enabled actions, the user cannot dismiss it",
            dialog.title().unwrap_or_default()
        );
    }

    let (request, handlers) = dialog.into_parts();
    debug!(
        "Presenting {:?} dialog with {} actions",
        request.style,
        request.actions.len()
    );

    let index = match request_selection(channel, request).await? {
        Selection::Chosen(index) => index,
        Selection::Dismissed => {
            debug!("Dialog dismissed without a selection");
            return Ok(None);
        }
    };

    let count = handlers.len();
    let Some(handler) = handlers.take(index) else {
        warn!("Dialog returned index {} but only {} actions exist", index, count);
        return Ok(None);
    };

    if handler.invoke() {
        info!("Dialog action {} selected", index);
        Ok(Some(index))
    } else {
        debug!("Dialog action {} is disabled, nothing to run", index);
        Ok(None)
    }
}
