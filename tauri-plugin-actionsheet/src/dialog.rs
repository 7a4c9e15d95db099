//! Dialog and action descriptors built by the caller before presentation.

use std::fmt;

use crate::models::{ActionPayload, ActionStyle, DialogStyle, ShowDialogRequest};

/// Callback run when its action is picked.
pub type Handler = Box<dyn FnOnce() + Send + 'static>;

/// Whether an action does anything when picked.
///
/// A button without a handler is presented as disabled, so the enabled flag
/// sent to native code always follows from this variant.
#[derive(Default)]
pub enum ActionHandler {
    #[default]
    Disabled,
    Enabled(Handler),
}

impl ActionHandler {
    /// True for [`ActionHandler::Enabled`].
    pub fn is_enabled(&self) -> bool {
        matches!(self, ActionHandler::Enabled(_))
    }

    /// Run the handler, consuming it. Disabled handlers do nothing.
    pub(crate) fn invoke(self) -> bool {
        match self {
            ActionHandler::Enabled(handler) => {
                handler();
                true
            }
            ActionHandler::Disabled => false,
        }
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionHandler::Disabled => f.write_str("Disabled"),
            ActionHandler::Enabled(_) => f.write_str("Enabled(..)"),
        }
    }
}

/// One button of a dialog.
#[derive(Debug)]
pub struct Action {
    text: String,
    style: ActionStyle,
    handler: ActionHandler,
}

impl Action {
    /// A disabled button with the default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ActionStyle::Default,
            handler: ActionHandler::Disabled,
        }
    }

    /// An enabled button with the default style.
    pub fn default_action(text: impl Into<String>, handler: impl FnOnce() + Send + 'static) -> Self {
        Self::new(text).on_press(handler)
    }

    /// An enabled button with the cancel style.
    pub fn cancel(text: impl Into<String>, handler: impl FnOnce() + Send + 'static) -> Self {
        Self::new(text)
            .with_style(ActionStyle::Cancel)
            .on_press(handler)
    }

    /// An enabled button with the destructive style.
    pub fn destructive(text: impl Into<String>, handler: impl FnOnce() + Send + 'static) -> Self {
        Self::new(text)
            .with_style(ActionStyle::Destructive)
            .on_press(handler)
    }

    /// Replace the button style, keeping the handler.
    pub fn with_style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }

    /// Attach a handler, which also enables the button.
    pub fn on_press(mut self, handler: impl FnOnce() + Send + 'static) -> Self {
        self.handler = ActionHandler::Enabled(Box::new(handler));
        self
    }

    /// Button label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Button style.
    pub fn style(&self) -> ActionStyle {
        self.style
    }

    /// True when a handler is attached.
    pub fn is_enabled(&self) -> bool {
        self.handler.is_enabled()
    }

    /// Serializable form of this action. The handler stays behind.
    pub fn to_payload(&self) -> ActionPayload {
        ActionPayload {
            text: self.text.clone(),
            style: self.style,
            enabled: self.is_enabled(),
        }
    }
}

/// A modal alert or action sheet.
#[derive(Debug, Default)]
pub struct Dialog {
    title: Option<String>,
    message: Option<String>,
    style: DialogStyle,
    actions: Vec<Action>,
}

impl Dialog {
    /// An untitled alert with the given buttons, in display order.
    ///
    /// An empty list, or one with only disabled buttons, is accepted, but
    /// the user then has no way to dismiss the dialog.
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }

    /// A titled alert.
    pub fn alert(
        title: impl Into<String>,
        message: impl Into<String>,
        actions: Vec<Action>,
    ) -> Self {
        Self::new(actions).with_title(title).with_message(message)
    }

    /// A titled action sheet.
    pub fn action_sheet(
        title: impl Into<String>,
        message: impl Into<String>,
        actions: Vec<Action>,
    ) -> Self {
        Self::alert(title, message, actions).with_style(DialogStyle::ActionSheet)
    }

    /// Set the headline.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body text shown below the title.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Switch between alert and action sheet.
    pub fn with_style(mut self, style: DialogStyle) -> Self {
        self.style = style;
        self
    }

    /// Headline, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Body text, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Alert or action sheet.
    pub fn style(&self) -> DialogStyle {
        self.style
    }

    /// Buttons in construction order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// True when at least one button can close the dialog.
    pub fn is_dismissable(&self) -> bool {
        self.actions.iter().any(Action::is_enabled)
    }

    /// Wire form of the dialog, without handlers.
    pub fn to_request(&self) -> ShowDialogRequest {
        ShowDialogRequest {
            title: self.title.clone(),
            message: self.message.clone(),
            style: self.style,
            actions: self.actions.iter().map(Action::to_payload).collect(),
        }
    }

    /// Split into the request sent over the bridge and the handlers that
    /// stay local, both in construction order.
    pub fn into_parts(self) -> (ShowDialogRequest, HandlerTable) {
        let request = self.to_request();
        let handlers = self
            .actions
            .into_iter()
            .map(|action| action.handler)
            .collect();
        (request, HandlerTable(handlers))
    }
}

/// Handlers of one presented dialog, indexed by construction order.
#[derive(Debug, Default)]
pub struct HandlerTable(Vec<ActionHandler>);

impl HandlerTable {
    /// Number of actions, enabled or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the dialog had no actions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the handler at `index`. `None` when the index is out of range.
    pub(crate) fn take(mut self, index: usize) -> Option<ActionHandler> {
        if index < self.0.len() {
            Some(self.0.swap_remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_enabled_follows_handler() {
        let disabled = Action::new("Info");
        assert!(!disabled.is_enabled());

        let enabled = Action::new("OK").on_press(|| {});
        assert!(enabled.is_enabled());
        assert!(enabled.is_enabled());

        let restyled = enabled.with_style(ActionStyle::Cancel);
        assert!(restyled.is_enabled());
    }

    #[test]
    fn test_action_defaults() {
        let action = Action::new("Info");
        assert_eq!(action.text(), "Info");
        assert_eq!(action.style(), ActionStyle::Default);
        assert_eq!(Action::cancel("No", || {}).style(), ActionStyle::Cancel);
        assert_eq!(
            Action::destructive("Delete", || {}).style(),
            ActionStyle::Destructive
        );
    }

    #[test]
    fn test_action_payload_excludes_handler() {
        let payload = Action::destructive("Delete", || {}).to_payload();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            json!({ "text": "Delete", "style": 2, "enabled": true })
        );
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_dialog_defaults_to_alert() {
        let dialog = Dialog::new(vec![]);
        assert_eq!(dialog.style(), DialogStyle::Alert);
        assert_eq!(dialog.title(), None);
        assert_eq!(dialog.message(), None);
        assert!(!dialog.is_dismissable());
        assert!(dialog.actions().is_empty());
        assert!(dialog.into_parts().1.is_empty());

        let sheet = Dialog::action_sheet("Share", "Pick a target", vec![]);
        assert_eq!(sheet.style(), DialogStyle::ActionSheet);
        assert_eq!(sheet.title(), Some("Share"));
    }

    #[test]
    fn test_request_preserves_action_order_and_count() {
        let dialog = Dialog::alert(
            "Delete?",
            "This cannot be undone",
            vec![
                Action::cancel("Cancel", || {}),
                Action::new("Info"),
                Action::destructive("Delete", || {}),
            ],
        );

        let texts: Vec<_> = dialog.actions().iter().map(Action::text).collect();
        assert_eq!(texts, ["Cancel", "Info", "Delete"]);
        assert!(!dialog.actions()[1].is_enabled());

        let json = serde_json::to_value(dialog.to_request()).unwrap();
        let back: ShowDialogRequest = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(json["style"], 1);
        assert_eq!(back.actions.len(), 3);
        let texts: Vec<_> = back.actions.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["Cancel", "Info", "Delete"]);
        assert!(!back.actions[1].enabled);
        assert_eq!(back, dialog.to_request());
    }

    #[test]
    fn test_into_parts_keys_handlers_by_construction_index() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let dialog = Dialog::new(vec![
            Action::new("Info"),
            Action::default_action("Count", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        ]);

        let (request, handlers) = dialog.into_parts();
        assert_eq!(request.actions.len(), handlers.len());
        assert!(!handlers.is_empty());

        let handler = handlers.take(1).unwrap();
        assert!(handler.is_enabled());
        assert!(handler.invoke());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_take_out_of_range() {
        let (_, handlers) = Dialog::new(vec![Action::new("Only")]).into_parts();
        assert!(handlers.take(1).is_none());
    }
}
