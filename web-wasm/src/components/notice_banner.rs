//! エラー通知コンポーネント

use leptos::prelude::*;

#[component]
pub fn NoticeBanner<F>(message: Signal<Option<String>>, on_dismiss: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        message.get().map(|text| {
            let on_dismiss = on_dismiss.clone();
            view! {
                <div class="notice notice-error" role="alert">
                    <span>{format!("⚠️ {}", text)}</span>
                    <button
                        class="notice-dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| on_dismiss(())
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
