//! PageFrame: standard root wrapper for every screen.
//!
//! ```text
//! <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
//!     <div class="page__header">...</div>
//!     <div class="page__content">...</div>
//! </PageFrame>
//! ```

use super::page_standard::is_valid_page_id;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id));
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
