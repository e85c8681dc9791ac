//! Row checkbox bound to the screen's selection.

use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;

/// Clicks do not reach the row
#[component]
pub fn TableCellCheckbox(
    item_id: RecordId,

    /// Reads the selection without copying it
    is_selected: Callback<RecordId, bool>,

    /// (item_id, checked)
    on_change: Callback<(RecordId, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || is_selected.run(item_id)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id, checked));
                }
            />
        </TableCell>
    }
}
