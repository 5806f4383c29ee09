//! File input for entity images.
//!
//! Type and size are checked as soon as a file is picked; when the rules fix
//! exact dimensions the image is decoded in the browser first. Accepted files
//! get an object URL for the preview.

use contracts::shared::attachment::{AttachmentDraft, AttachmentError, ImageRules};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlImageElement, HtmlInputElement, Url};

/// Picked file paired with its browser handle
pub type PickedImage = (AttachmentDraft, File);

#[component]
pub fn ImagePicker(
    #[prop(into)]
    label: String,
    rules: ImageRules,
    /// Preview of the new pick or of the stored image
    #[prop(into)]
    preview: Signal<Option<String>>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    on_pick: Callback<PickedImage>,
    on_reject: Callback<AttachmentError>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let accept = rules.accept();
    let hint = match rules.exact_dimensions {
        Some((w, h)) => format!("{} px x {} px, up to {} KB", w, h, rules.max_bytes / 1024),
        None => format!("Up to {} KB", rules.max_bytes / 1024),
    };
    let label_for = id.clone();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // the form was reset or saved: drop the file name shown by the browser
    Effect::new(move |_| {
        if preview.get().is_none() {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match inspect_file(file.clone(), rules).await {
                Ok(draft) => on_pick.run((draft, file)),
                Err(err) => {
                    log::debug!("image rejected: {}", err);
                    input.set_value("");
                    on_reject.run(err);
                }
            }
        });
    };

    view! {
        <div class="form__group image-picker">
            <label class="form__label" for=label_for>{label}</label>
            <input
                id=id
                node_ref=input_ref
                type="file"
                class="form__file"
                class:form__input--invalid=move || error.get().is_some()
                accept=accept
                on:change=on_change
            />
            <div class="form__hint">{hint}</div>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            {move || preview.get().map(|src| view! {
                <img class="image-picker__preview" src=src alt="Preview" />
            })}
        </div>
    }
}

async fn inspect_file(file: File, rules: ImageRules) -> Result<AttachmentDraft, AttachmentError> {
    let size = file.size().max(0.0) as u64;
    let mime = file.type_();
    rules.check_file(&mime, size)?;

    let preview = Url::create_object_url_with_blob(&file).ok();
    let mut draft = AttachmentDraft::new(file.name(), mime, size);
    if let Some(url) = preview.as_deref() {
        draft = draft.with_preview(url);
    }

    if rules.needs_dimensions() {
        let Some(url) = preview else {
            return Err(AttachmentError::Undecoded);
        };
        let (width, height) = decode_dimensions(&url).await.ok_or(AttachmentError::Undecoded)?;
        rules.check_dimensions(width, height)?;
        draft = draft.with_dimensions(width, height);
    }
    Ok(draft)
}

async fn decode_dimensions(url: &str) -> Option<(u32, u32)> {
    let img = HtmlImageElement::new().ok()?;
    img.set_src(url);
    JsFuture::from(img.decode()).await.ok()?;
    Some((img.natural_width(), img.natural_height()))
}
