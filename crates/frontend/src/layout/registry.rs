//! Module -> screen mapping; the only place that knows every feature screen.

use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_furniture_type::ui::list::FurnitureTypeList;
use crate::domain::a004_sales_record::ui::list::SalesRecordList;
use crate::layout::catalog::Module;
use leptos::prelude::*;

pub fn render_module(module: Module) -> AnyView {
    match module {
        Module::Sales(chain) => view! { <SalesRecordList chain=chain /> }.into_any(),
        Module::Products => view! { <ProductList /> }.into_any(),
        Module::FurnitureTypes(chain) => view! { <FurnitureTypeList chain=chain /> }.into_any(),
        Module::Clients => view! { <ClientList /> }.into_any(),
    }
}
