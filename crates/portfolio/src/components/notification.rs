//! Toast messages, used by the contact form to report the outcome of a
//! submission.
//!
//! ```rust,ignore
//! let notifications = use_context::<NotificationContext>().expect("inside NotificationProvider");
//! notifications.push(Notification::success("Message sent"));
//! ```

use gloo::timers::callback::Timeout;
use std::{cell::RefCell, rc::Rc};
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 5000;

type NotificationId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    fn css_class(self) -> &'static str {
        match self {
            NotificationLevel::Success => "notification-success",
            NotificationLevel::Error => "notification-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: "Success!".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Toasts {
    shown: Vec<(NotificationId, Notification)>,
}

enum ToastAction {
    Push(NotificationId, Notification),
    Dismiss(NotificationId),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = (*self).clone();
        match action {
            ToastAction::Push(id, notification) => toasts.shown.push((id, notification)),
            ToastAction::Dismiss(id) => toasts.shown.retain(|(shown, _)| *shown != id),
        }
        Rc::new(toasts)
    }
}

#[derive(Clone)]
pub struct NotificationContext {
    toasts: UseReducerHandle<Toasts>,
    next_id: Rc<RefCell<NotificationId>>,
}

impl PartialEq for NotificationContext {
    fn eq(&self, other: &Self) -> bool {
        *self.toasts == *other.toasts
    }
}

impl NotificationContext {
    /// Shows `notification` until it is dismissed or times out.
    pub fn push(&self, notification: Notification) {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id = id.wrapping_add(1);
            id
        };
        self.toasts.dispatch(ToastAction::Push(id, notification));
        let toasts = self.toasts.clone();
        Timeout::new(AUTO_DISMISS_MS, move || {
            toasts.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }

    fn dismiss(&self, id: NotificationId) {
        self.toasts.dispatch(ToastAction::Dismiss(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let next_id = use_mut_ref(|| 0);
    let context = NotificationContext {
        toasts: toasts.clone(),
        next_id,
    };

    let shown = toasts.shown.iter().map(|(id, notification)| {
        let id = *id;
        let onclick = {
            let context = context.clone();
            Callback::from(move |_| context.dismiss(id))
        };
        html! {
            <div class={classes!("notification-toast", notification.level.css_class())} key={id}>
                <span class="notification-icon">{ notification.level.icon() }</span>
                <div class="notification-body">
                    <strong>{ &notification.title }</strong>
                    <span class="notification-message">{ &notification.message }</span>
                </div>
                <button class="notification-dismiss" {onclick} aria-label="Dismiss notification">
                    {"×"}
                </button>
            </div>
        }
    });

    html! {
        <ContextProvider<NotificationContext> context={context.clone()}>
            { props.children.clone() }
            if !toasts.shown.is_empty() {
                <div class="notification-container">{ for shown }</div>
            }
        </ContextProvider<NotificationContext>>
    }
}
