//! "Select page" checkbox in the table header.
//!
//! ```text
//! <TableHeaderCheckbox
//!     visible_ids=Signal::derive(move || page_ids())
//!     is_selected=is_selected
//!     on_toggle=Callback::new(move |_| toggle_page())
//! />
//! ```

use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows on the current page
    #[prop(into)]
    visible_ids: Signal<Vec<RecordId>>,

    is_selected: Callback<RecordId, bool>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        visible_ids.with(|ids| {
            let selected_count = ids.iter().filter(|id| is_selected.run(**id)).count();
            if ids.is_empty() || selected_count == 0 {
                CheckboxState::Unchecked
            } else if selected_count == ids.len() {
                CheckboxState::Checked
            } else {
                CheckboxState::Indeterminate
            }
        })
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}
