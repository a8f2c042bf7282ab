//! Single-slot notification banner

use dioxus::prelude::*;
use procurex_controller::Notification;

#[derive(Props, Clone, PartialEq)]
pub struct NotificationBannerProps {
    pub notification: Option<Notification>,

    /// Shows a close button when set
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn NotificationBanner(props: NotificationBannerProps) -> Element {
    let Some(notification) = props.notification.clone() else {
        return rsx! {};
    };
    let level = notification.level.css_class();

    rsx! {
        div {
            class: "notification notification-{level}",
            role: if notification.is_error() { "alert" } else { "status" },
            span { class: "notification-text", "{notification.message}" }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    r#type: "button",
                    class: "notification-close",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
        }
    }
}
