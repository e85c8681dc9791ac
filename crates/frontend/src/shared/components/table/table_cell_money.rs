//! Right-aligned numeric cell.
//!
//! ```text
//! <TableCellMoney value=Signal::derive(move || Some(row.venta_dolares)) />
//! <TableCellMoney value=units decimals=0 currency="" />
//! ```

use super::number_format::format_number_with_decimals;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Prefix, `$` unless given
    #[prop(optional, default = "$")]
    currency: &'static str,

    #[prop(optional, default = 2)]
    decimals: u8,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format!("{}{}", currency, format_number_with_decimals(v, decimals)),
        None => "—".to_string(),
    };

    view! {
        <TableCell class="text-right">
            <span style=if bold { "font-weight: 600" } else { "" }>
                {formatted_text}
            </span>
        </TableCell>
    }
}
