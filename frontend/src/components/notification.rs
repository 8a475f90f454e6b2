use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub kind: NotificationKind,
    pub message: String,
    pub on_close: Callback<()>,
}

/// Toast pinned to the bottom corner; closes itself after a few seconds.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(AUTO_DISMISS_MS, move || on_close.emit(()));
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={props.kind.class()} role="status" aria-live="polite">
            <style>
                {r#"
                .notification {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    max-width: 360px;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    color: #fff;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                    animation: slideUp 0.3s ease-out;
                    z-index: 1000;
                }
                .notification.success { background: #1f7a4d; }
                .notification.error { background: #a12c2c; }
                .notification button {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    font-size: 1rem;
                }
                @keyframes slideUp {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            <span>{&props.message}</span>
            <button onclick={close} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}
