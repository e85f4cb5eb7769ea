use yew::prelude::*;

const CLOSE_BUTTON_STYLE: &str = "background: none; border: none; color: white; font-size: 20px; cursor: pointer; float: right; margin-left: 15px;";

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub message: String,
    pub on_close: Callback<()>,
}

/// Contents of the notification banner. The banner element itself, with its
/// positioning and severity styling, is owned by `crate::notification`.
#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let onclick = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="notification-content">
            <span class="notification-message">{ props.message.clone() }</span>
            <button class="notification-close" style={CLOSE_BUTTON_STYLE} onclick={onclick}>
                {"×"}
            </button>
        </div>
    }
}
