//! Add-product toolbar: modal form, balance tag, submission flow.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::balance::Balance;
use crate::services::contract::ChainGateway;
use crate::services::listing::{submit_listing, ProductDraft};
use crate::state::products::use_products_context;
use crate::utils::constants::FIELD_DEBOUNCE_MS;
use crate::utils::debounce::use_debounced;

#[component]
pub fn AddProductModal() -> impl IntoView {
    let store = use_products_context();
    let (open, set_open) = signal(false);
    let (submitting, set_submitting) = signal(String::new());

    let (name, set_name) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (available, set_available) = signal(String::new());

    // Submission only ever sees the settled values, never a keystroke
    // in flight.
    let name_d = use_debounced(name.into(), FIELD_DEBOUNCE_MS);
    let image_d = use_debounced(image.into(), FIELD_DEBOUNCE_MS);
    let description_d = use_debounced(description.into(), FIELD_DEBOUNCE_MS);
    let location_d = use_debounced(location.into(), FIELD_DEBOUNCE_MS);
    let price_d = use_debounced(price.into(), FIELD_DEBOUNCE_MS);
    let available_d = use_debounced(available.into(), FIELD_DEBOUNCE_MS);

    // Gating tracks the raw fields so the Create button enables as the
    // user types; only the transaction reads the debounced copies.
    let is_complete = Memo::new(move |_| {
        !name.get().is_empty()
            && !image.get().is_empty()
            && !description.get().is_empty()
            && !location.get().is_empty()
            && !price.get().is_empty()
            && !available.get().is_empty()
    });

    let clear_form = move || {
        set_name.set(String::new());
        set_image.set(String::new());
        set_description.set(String::new());
        set_location.set(String::new());
        set_price.set(String::new());
        set_available.set(String::new());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !submitting.get_untracked().is_empty() {
            return;
        }
        let draft = ProductDraft {
            name: name_d.get_untracked(),
            image: image_d.get_untracked(),
            description: description_d.get_untracked(),
            location: location_d.get_untracked(),
            price: price_d.get_untracked(),
            available_products: available_d.get_untracked(),
        };
        spawn_local(async move {
            set_submitting.set("Creating...".to_string());
            if let Some(count) = submit_listing(&ChainGateway, &store, &draft).await {
                store.rebuild(count);
                set_open.set(false);
                clear_form();
            }
            set_submitting.set(String::new());
        });
    };

    view! {
        <div class="toolbar">
            <button class="btn" on:click=move |_| set_open.set(true)>
                "+ Add Product"
            </button>
            <Balance/>
        </div>
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2>"Add Product"</h2>
                    <form on:submit=on_submit>
                        <label>"Product Name"</label>
                        <input
                            type="text"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />

                        <label>"Product Image (URL)"</label>
                        <input
                            type="text"
                            prop:value=image
                            on:input=move |ev| set_image.set(event_target_value(&ev))
                        />

                        <label>"Product Description"</label>
                        <input
                            type="text"
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />

                        <label>"Product Location"</label>
                        <input
                            type="text"
                            prop:value=location
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                        />

                        <label>"Product Price (cUSD)"</label>
                        <input
                            type="number"
                            prop:value=price
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />

                        <label>"Available Stock"</label>
                        <input
                            type="number"
                            prop:value=available
                            on:input=move |ev| set_available.set(event_target_value(&ev))
                        />

                        <div class="modal-actions">
                            <button type="button" class="btn" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || !is_complete.get() || !submitting.get().is_empty()
                            >
                                {move || {
                                    let label = submitting.get();
                                    if label.is_empty() { "Create".to_string() } else { label }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
