pub mod state;

use self::state::create_state;
use crate::domain::a002_product::ui::details::{model, ProductDetails};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::config;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    download_report, export_records, highlight_matches, notify_all, SearchInput, REPORT_READY,
};
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::{spawn_action, use_notifier};
use crate::usecases::u501_spreadsheet_import::{UploadOptions, UploadPanel};
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a002_product::export::export_filename;
use contracts::domain::common::RecordId;
use contracts::usecases::u502_bulk_delete::BlockedKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Create,
    Edit(Product),
}

#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    One { id: RecordId, label: String },
    Selected(Vec<RecordId>),
}

impl PendingDelete {
    fn message(&self) -> String {
        match self {
            PendingDelete::One { label, .. } => format!("¿Eliminar el producto {}?", label),
            PendingDelete::Selected(ids) => {
                format!("¿Eliminar {} producto(s) seleccionado(s)?", ids.len())
            }
        }
    }

    fn ids(&self) -> Vec<RecordId> {
        match self {
            PendingDelete::One { id, .. } => vec![*id],
            PendingDelete::Selected(ids) => ids.clone(),
        }
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let notifier = StoredValue::new(use_notifier());
    let state = create_state();
    let loading = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let reporting = RwSignal::new(false);
    let is_filter_expanded = RwSignal::new(true);
    let dialog = RwSignal::new(None::<Dialog>);
    let pending_delete = RwSignal::new(None::<PendingDelete>);

    let load = move || {
        let notifier = notifier.get_value();
        loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(items) => {
                    log::debug!("Loaded {} products", items.len());
                    let _ = state.try_update(|s| {
                        let ids: Vec<RecordId> = items.iter().filter_map(|p| p.id).collect();
                        s.selection.retain_existing(&ids);
                        s.list.load_snapshot(items);
                        s.is_loaded = true;
                    });
                }
                Err(e) => notifier.api_error(&e),
            }
            let _ = loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let search = Memo::new(move |_| state.with(|s| s.list.search().to_string()));
    let page_items = Memo::new(move |_| state.with(|s| s.list.page_items()));
    let page_ids = Signal::derive(move || {
        page_items.with(|items| items.iter().filter_map(|p| p.id).collect::<Vec<_>>())
    });
    let is_selected = Callback::new(move |id: RecordId| state.with(|s| s.selection.contains(id)));
    let selected_count = Memo::new(move |_| state.with(|s| s.selection.len()));

    let run_delete = move |pending: PendingDelete| {
        let notifier = notifier.get_value();
        deleting.set(true);
        spawn_local(async move {
            let outcome = model::delete(&pending.ids()).await;
            log::info!(
                "Product delete: {} deleted, {} blocked",
                outcome.eliminados.len(),
                outcome.bloqueados.len()
            );
            notify_all(&notifier, outcome.notices(BlockedKind::Product));
            let _ = state.try_update(|s| s.selection.clear());
            let _ = deleting.try_set(false);
            load();
        });
    };

    let export = move || {
        let rows: Vec<Product> = state.with_untracked(|s| s.list.visible());
        notifier.with_value(|n| export_records(n, "Productos", &rows, &export_filename(today())));
    };

    let server_report = move || {
        let handle = notifier.get_value();
        let done = handle.clone();
        spawn_action(handle, reporting, async move {
            download_report(&model::url("/reporte-productos"), "reporte_productos.xlsx").await?;
            done.success(REPORT_READY);
            Ok(())
        });
    };

    let toggle_row = Callback::new(move |(id, checked): (RecordId, bool)| {
        state.update(|s| {
            s.selection.set(id, checked);
        });
    });
    let toggle_page = Callback::new(move |_| {
        let ids = page_ids.get_untracked();
        state.update(|s| {
            s.selection.toggle_visible(&ids);
        });
    });

    let upload = UploadOptions {
        chain_label: "Fybeca",
        subject: "PRODUCTOS",
        endpoint: model::url("/template-productos"),
        max_mb: Some(config::current().upload.max_template_mb),
        template_href: Some("/TEMPLATE%20CODIGOS%20BARRA%20Y%20ITEM.xlsx"),
        overdue_notice: false,
        with_mapping: false,
        button_label: "Subir productos (.xlsx)",
    };

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Mantenimiento de productos"</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.list.visible_len()).to_string()}
                    </span>
                </div>
                <div class="page__header-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")}
                        "Nuevo producto"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Cargando..." } else { "Actualizar" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        {icon("download")}
                        "Exportar Excel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| server_report()
                        disabled=Signal::derive(move || reporting.get())
                    >
                        {icon("file-text")}
                        "Reporte"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let ids = state.with_untracked(|s| s.selection.ids().to_vec());
                            if ids.is_empty() {
                                notifier.with_value(|n| n.info("No hay productos seleccionados"));
                            } else {
                                pending_delete.set(Some(PendingDelete::Selected(ids)));
                            }
                        }
                        disabled=Signal::derive(move || deleting.get())
                    >
                        {icon("delete")}
                        {move || format!("Eliminar seleccionados ({})", selected_count.get())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <UploadPanel options=upload on_uploaded=Callback::new(move |_| load()) />

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || usize::from(!search.get().trim().is_empty()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            pagination=Signal::derive(move || state.with(|s| s.list.pagination))
                            total_count=Signal::derive(move || state.with(|s| s.list.visible_len()))
                            on_page_change=Callback::new(move |page| state.update(|s| s.list.set_page(page)))
                            on_page_size_change=Callback::new(move |size| state.update(|s| s.list.set_page_size(size)))
                        />
                    }
                    filter_content=move || view! {
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Buscar:"</Label>
                            <SearchInput
                                value=Signal::derive(move || search.get())
                                on_change=Callback::new(move |text: String| state.update(|s| s.list.set_search(&text)))
                                placeholder="Código ítem o código de barra..."
                            />
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 600px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox visible_ids=page_ids is_selected=is_selected on_toggle=toggle_page />
                                <TableHeaderCell resizable=false min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Código ítem"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Código barra SAP"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_items.get()
                                key=|product| product.id
                                children=move |product| {
                                    let id = product.id.unwrap_or_default();
                                    let item = product.cod_item.clone();
                                    let barcode = product.cod_barra_sap.clone();
                                    let label = format!("{} / {}", product.cod_item, product.cod_barra_sap);
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox item_id=id is_selected=is_selected on_change=toggle_row />
                                            <TableCell>
                                                <TableCellLayout>{id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&item, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&barcode, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="btn btn-icon"
                                                        title="Editar"
                                                        on:click=move |_| dialog.set(Some(Dialog::Edit(product.clone())))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="btn btn-icon btn-icon--danger"
                                                        title="Eliminar"
                                                        on:click=move |_| pending_delete.set(Some(PendingDelete::One { id, label: label.clone() }))
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && page_items.with(Vec::is_empty)>
                        <div class="table-empty">"No hay productos para mostrar"</div>
                    </Show>
                </div>
            </div>

            {move || dialog.get().map(|d| {
                let (title, initial) = match d {
                    Dialog::Create => ("Nuevo producto", None),
                    Dialog::Edit(product) => ("Editar producto", Some(product)),
                };
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| dialog.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                                dialog.set(None);
                                load();
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| dialog.set(None));
                            view! { <ProductDetails initial=initial on_saved=on_saved on_cancel=on_cancel /> }
                        }
                    </Modal>
                }
            })}

            {move || pending_delete.get().map(|pending| {
                let message = pending.message();
                view! {
                    <ConfirmDialog
                        title="Confirmar eliminación".to_string()
                        message=message
                        on_confirm=Callback::new(move |_| {
                            pending_delete.set(None);
                            run_delete(pending.clone());
                        })
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
