//! Filter toggle button and the sliding filter drawer.
//!
//! Controls edit the draft selection only; "Apply Filter" commits it.

use leptos::prelude::*;

use turbo_catalog::prelude::{FilterEdit, PageEvent, PageState};

use crate::app::dispatch;

#[component]
pub fn FilterToggle(state: RwSignal<PageState>) -> impl IntoView {
    view! {
        <button class="filter-toggle" on:click=move |_| dispatch(state, PageEvent::ToggleFilterPanel)>
            "Filter"
            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M12 3c2.755 0 5.455.232 8.083.678.533.09.917.556.917 1.096v1.044a2.25 2.25 0 0 1-.659 1.591l-5.432 5.432a2.25 2.25 0 0 0-.659 1.591v2.927a2.25 2.25 0 0 1-1.244 2.013L9.75 21v-6.568a2.25 2.25 0 0 0-.659-1.591L3.659 7.409A2.25 2.25 0 0 1 3 5.818V4.774c0-.54.384-1.006.917-1.096A48.32 48.32 0 0 1 12 3Z"
                />
            </svg>
        </button>
    }
}

#[component]
pub fn FilterPanel(state: RwSignal<PageState>) -> impl IntoView {
    let draft = Memo::new(move |_| state.with(|s| s.draft().selection().clone()));
    let slider = Memo::new(move |_| state.with(PageState::price_slider));
    let categories = Memo::new(move |_| state.with(PageState::category_options));
    let stock_states = Memo::new(move |_| state.with(PageState::stock_options));

    let edit = move |edit: FilterEdit| dispatch(state, PageEvent::EditDraft(edit));
    let drawer_class = move || {
        if state.with(PageState::is_filter_panel_open) {
            "filter-drawer open"
        } else {
            "filter-drawer"
        }
    };

    view! {
        <aside class=drawer_class>
            <h2>"Filter Options"</h2>
            <button class="filter-close" on:click=move |_| dispatch(state, PageEvent::CloseFilterPanel)>
                "✕"
            </button>
            <div class="filter-fields">
                <label>
                    "Category:"
                    <select
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| edit(FilterEdit::Category(event_target_value(&ev)))
                    >
                        <option value="">"All"</option>
                        <For
                            each=move || categories.get()
                            key=|category| category.clone()
                            children=move |category: String| {
                                view! { <option value=category.clone()>{category.clone()}</option> }
                            }
                        />
                    </select>
                </label>
                <label>
                    "Price Range:"
                    <input
                        type="range"
                        min=move || slider.get().min.to_string()
                        max=move || slider.get().max.to_string()
                        prop:value=move || draft.with(|d| d.price_range[1].to_string())
                        on:input=move |ev| {
                            if let Ok(ceiling) = event_target_value(&ev).parse::<f64>() {
                                edit(FilterEdit::PriceCeiling(ceiling));
                            }
                        }
                    />
                    <span class="price-ceiling">
                        {move || draft.with(|d| format!("${:.0} - ${:.0}", d.price_range[0], d.price_range[1]))}
                    </span>
                </label>
                <label>
                    "Rating:"
                    <input
                        type="number"
                        min="0"
                        max="5"
                        prop:value=move || draft.with(|d| d.rating.to_string())
                        on:input=move |ev| {
                            let rating = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                            edit(FilterEdit::Rating(rating));
                        }
                    />
                </label>
                <label>
                    "Stock:"
                    <select
                        prop:value=move || draft.with(|d| d.stock.clone())
                        on:change=move |ev| edit(FilterEdit::Stock(event_target_value(&ev)))
                    >
                        <option value="">"All"</option>
                        <For
                            each=move || stock_states.get()
                            key=|label| label.clone()
                            children=move |label: String| {
                                view! { <option value=label.clone()>{label.clone()}</option> }
                            }
                        />
                    </select>
                </label>
                <button class="apply-filters" on:click=move |_| dispatch(state, PageEvent::ApplyFilters)>
                    "Apply Filter"
                </button>
                <button class="clear-filters" on:click=move |_| dispatch(state, PageEvent::ResetDraft)>
                    "Clear"
                </button>
            </div>
        </aside>
    }
}
