//! 注文サマリーコンポーネント

use leptos::prelude::*;
use print_shop_common::{Money, OrderSummary as Summary};

#[component]
pub fn OrderSummary<FC, FX>(
    summary: Signal<Summary>,
    processing: Signal<bool>,
    on_checkout: FC,
    on_clear_all: FX,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FX: Fn(()) + 'static + Clone + Send + Sync,
{
    let delivery = move || {
        summary.with(|s| {
            if s.delivery_fee == Money::ZERO {
                "Free".to_string()
            } else {
                s.delivery_fee.to_string()
            }
        })
    };

    view! {
        <div class="order-summary">
            <h2>"Order Summary"</h2>

            <div class="summary-lines">
                <For
                    each=move || summary.with(|s| s.lines.clone())
                    key=|line| line.clone()
                    children=|line| {
                        view! {
                            <div class="summary-row">
                                <span>{line.title()}</span>
                                <span>{line.price.to_string()}</span>
                            </div>
                        }
                    }
                />
            </div>

            <hr />

            <div class="summary-row">
                <span>"Subtotal:"</span>
                <span>{move || summary.with(|s| s.subtotal.to_string())}</span>
            </div>
            <div class="summary-row">
                <span>"Delivery:"</span>
                <span>{delivery}</span>
            </div>
            <div class="summary-row summary-total">
                <span>"Total:"</span>
                <span class="text-accent">{move || summary.with(|s| s.total.to_string())}</span>
            </div>

            <button
                class="btn btn-checkout"
                class:processing=move || processing.get()
                disabled=move || processing.get()
                on:click=move |_| on_checkout(())
            >
                {move || if processing.get() { "⏳ Processing..." } else { "💳 Pay Now" }}
            </button>

            <button class="btn btn-tertiary btn-small" on:click=move |_| on_clear_all(())>
                "🗑 Clear All"
            </button>

            <p class="text-muted demo-note">
                "* This is a demo. No actual payment will be processed."
            </p>
        </div>
    }
}
