//! 写真ギャラリーコンポーネント

use leptos::prelude::*;
use gloo::console::warn;
use print_shop_common::{ItemId, ItemLine, PrintSize};

#[component]
pub fn PhotoGallery<FS, FR>(
    lines: Signal<Vec<ItemLine>>,
    on_size_change: FS,
    on_remove: FR,
) -> impl IntoView
where
    FS: Fn(ItemId, PrintSize) + 'static + Clone + Send + Sync,
    FR: Fn(ItemId) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="photo-section">
            <h2>"Your Photos:"</h2>
            <div class="photo-gallery">
                <For
                    each=move || lines.get()
                    key=|line| line.clone()
                    children=move |line| {
                        let on_size_change = on_size_change.clone();
                        let on_remove = on_remove.clone();
                        view! {
                            <PhotoCard
                                line=line
                                on_size_change=on_size_change
                                on_remove=on_remove
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn PhotoCard<FS, FR>(
    line: ItemLine,
    on_size_change: FS,
    on_remove: FR,
) -> impl IntoView
where
    FS: Fn(ItemId, PrintSize) + 'static + Clone + Send + Sync,
    FR: Fn(ItemId) + 'static + Clone + Send + Sync,
{
    let id = line.id;
    let current = line.size;
    let select_id = format!("size-{}", id.0);

    view! {
        <div class="photo-card">
            <div class="photo-preview">
                <img src=line.preview_url.clone() alt=format!("Preview of {}", line.file_name) />
                <span class="photo-ordinal">{format!("Photo {}", line.ordinal)}</span>
                <button
                    class="btn-remove"
                    title="Remove photo"
                    on:click=move |_| on_remove(id)
                >
                    "✕"
                </button>
            </div>
            <div class="photo-info">
                <h4>{line.file_name.clone()}</h4>
                <label for=select_id.clone()>"Select Size:"</label>
                <select
                    id=select_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        match value.parse::<PrintSize>() {
                            Ok(size) => on_size_change(id, size),
                            Err(e) => warn!(e.to_string()),
                        }
                    }
                >
                    {PrintSize::ALL
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option value=size.as_str() selected={size == current}>
                                    {size.option_label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class="photo-price">{line.price.to_string()}</div>
            </div>
        </div>
    }
}
