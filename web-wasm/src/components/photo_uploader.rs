//! 写真選択コンポーネント

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileList, HtmlInputElement};

#[component]
pub fn PhotoUploader<F>(
    max_items: usize,
    remaining: Signal<usize>,
    on_files_selected: F,
) -> impl IntoView
where
    F: Fn(Vec<File>) + 'static + Clone + Send + Sync,
{
    let is_full = move || remaining.get() == 0;

    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files = input.files().map(|list| collect_files(&list)).unwrap_or_default();
        // 同じファイルを削除後に選び直せるようにリセット
        input.set_value("");
        on_files_selected(files);
    };

    view! {
        <div class="uploader">
            <input
                type="file"
                accept="image/*"
                multiple=true
                id="photo-input"
                class="hidden"
                disabled=is_full
                on:change=on_change
            />
            <label for="photo-input" class="btn btn-primary" class:disabled=is_full>
                {format!("📷 Choose Photos (Max {})", max_items)}
            </label>
            <p class="text-muted">
                {move || match remaining.get() {
                    0 => "Your order is full. Remove a photo to add another.".to_string(),
                    n => format!("You can add {} more photo(s).", n),
                }}
            </p>
        </div>
    }
}

fn collect_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
