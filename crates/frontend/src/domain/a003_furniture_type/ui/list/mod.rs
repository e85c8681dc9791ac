pub mod state;

use self::state::create_state;
use crate::domain::a003_furniture_type::ui::details::{model, FurnitureTypeDetails};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::select::{non_empty, plain_options, Select};
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
use contracts::domain::a003_furniture_type::aggregate::FurnitureType;
use contracts::domain::a003_furniture_type::export::export_filename;
use contracts::domain::a003_furniture_type::filter::{distinct_values, visible_items, FurnitureFilter};
use contracts::domain::common::RecordId;
use contracts::enums::retail_chain::RetailChain;
use contracts::usecases::u502_bulk_delete::BlockedKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Create,
    Edit(FurnitureType),
}

#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    One { id: RecordId, label: String },
    Selected(Vec<RecordId>),
}

impl PendingDelete {
    fn message(&self) -> String {
        match self {
            PendingDelete::One { label, .. } => format!("¿Eliminar el tipo de mueble del PDV {}?", label),
            PendingDelete::Selected(ids) => {
                format!("¿Eliminar {} tipo(s) de mueble seleccionado(s)?", ids.len())
            }
        }
    }
}

#[component]
pub fn FurnitureTypeList(chain: RetailChain) -> impl IntoView {
    let notifier = StoredValue::new(use_notifier());
    let client_code = chain.client_code().unwrap_or_default();
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
            match model::fetch_for_client(chain, client_code).await {
                Ok(items) => {
                    let own = visible_items(&items, client_code, &FurnitureFilter::default());
                    log::debug!("Loaded {} furniture types for {} ({} returned)", own.len(), chain, items.len());
                    let _ = state.try_update(|s| {
                        let ids: Vec<RecordId> = own.iter().filter_map(|ft| ft.id).collect();
                        s.selection.retain_existing(&ids);
                        s.list.load_snapshot(own);
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

    let filter = Memo::new(move |_| state.with(|s| s.filter()));
    let essence_options = Memo::new(move |_| {
        state.with(|s| plain_options(&distinct_values(s.list.snapshot(), |ft| ft.tipo_mueble_essence.as_str())))
    });
    let catrice_options = Memo::new(move |_| {
        state.with(|s| plain_options(&distinct_values(s.list.snapshot(), |ft| ft.tipo_mueble_catrice.as_str())))
    });
    let page_items = Memo::new(move |_| state.with(|s| s.list.page_items()));
    let page_ids = Signal::derive(move || {
        page_items.with(|items| items.iter().filter_map(|ft| ft.id).collect::<Vec<_>>())
    });
    let is_selected = Callback::new(move |id: RecordId| state.with(|s| s.selection.contains(id)));
    let selected_count = Memo::new(move |_| state.with(|s| s.selection.len()));
    let text = Memo::new(move |_| filter.with(|f| f.text.clone()));

    let run_delete = move |pending: PendingDelete| {
        let notifier = notifier.get_value();
        deleting.set(true);
        spawn_local(async move {
            match pending {
                PendingDelete::One { id, .. } => match model::delete_one(chain, id).await {
                    Ok(outcome) => notify_all(&notifier, outcome.notices(BlockedKind::FurnitureType)),
                    Err(e) => notifier.api_error(&e),
                },
                PendingDelete::Selected(ids) => {
                    let outcome = model::delete_many(chain, &ids).await;
                    log::info!(
                        "Furniture type delete: {} deleted, {} blocked",
                        outcome.eliminados.len(),
                        outcome.bloqueados.len()
                    );
                    notify_all(&notifier, outcome.notices(BlockedKind::FurnitureType));
                    let _ = state.try_update(|s| s.selection.clear());
                }
            }
            let _ = deleting.try_set(false);
            load();
        });
    };

    let export = move || {
        let rows: Vec<FurnitureType> = state.with_untracked(|s| s.list.visible());
        notifier.with_value(|n| export_records(n, "Tipos de mueble", &rows, &export_filename(chain, today())));
    };

    let server_report = move || {
        let handle = notifier.get_value();
        let done = handle.clone();
        spawn_action(handle, reporting, async move {
            download_report(&model::url(chain, "/reporte-tipo-mueble"), "reporte_tipo_mueble.xlsx").await?;
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
        chain_label: chain.display_name(),
        subject: "TIPO MUEBLE",
        endpoint: model::url(chain, "/template-tipo-muebles"),
        max_mb: Some(config::current().upload.max_template_mb),
        template_href: Some("/TEMPLATE%20DE%20TIPO%20DE%20MUEBLE.xlsx"),
        overdue_notice: false,
        with_mapping: false,
        button_label: "Subir tipos de mueble (.xlsx)",
    };

    view! {
        <PageFrame page_id="a003_furniture_type--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Tipo de mueble {}", chain.display_name())}</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.list.visible_len()).to_string()}
                    </span>
                </div>
                <div class="page__header-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")}
                        "Nuevo"
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
                                notifier.with_value(|n| n.info("No hay tipos de mueble seleccionados"));
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
                    active_filters_count=Signal::derive(move || filter.with(FurnitureFilter::active_count))
                    pagination_controls=move || view! {
                        <PaginationControls
                            pagination=Signal::derive(move || state.with(|s| s.list.pagination))
                            total_count=Signal::derive(move || state.with(|s| s.list.visible_len()))
                            on_page_change=Callback::new(move |page| state.update(|s| s.list.set_page(page)))
                            on_page_size_change=Callback::new(move |size| state.update(|s| s.list.set_page_size(size)))
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Large align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Buscar:"</Label>
                                <SearchInput
                                    value=Signal::derive(move || text.get())
                                    on_change=Callback::new(move |value: String| state.update(|s| s.refilter(|f| f.text = value)))
                                    placeholder="PDV, ciudad, cliente, mueble..."
                                />
                            </Flex>
                            <Select
                                label="Tipo mueble Essence"
                                value=Signal::derive(move || filter.with(|f| f.essence.clone().unwrap_or_default()))
                                on_change=Callback::new(move |value: String| state.update(|s| s.refilter(|f| f.essence = non_empty(value))))
                                options=essence_options
                                placeholder="Todos"
                            />
                            <Select
                                label="Tipo mueble Catrice"
                                value=Signal::derive(move || filter.with(|f| f.catrice.clone().unwrap_or_default()))
                                on_change=Callback::new(move |value: String| state.update(|s| s.refilter(|f| f.catrice = non_empty(value))))
                                options=catrice_options
                                placeholder="Todos"
                            />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.update(|s| s.list.clear())
                            >
                                {icon("x")}
                                "Limpiar filtros"
                            </Button>
                        </Flex>
                    }
                    filter_tags=move || view! {
                        {move || filter.with(|f| f.essence.clone()).map(|v| view! {
                            <FilterTag
                                label=format!("Essence: {}", v)
                                on_remove=Callback::new(move |_| state.update(|s| s.refilter(|f| f.essence = None)))
                            />
                        })}
                        {move || filter.with(|f| f.catrice.clone()).map(|v| view! {
                            <FilterTag
                                label=format!("Catrice: {}", v)
                                on_remove=Callback::new(move |_| state.update(|s| s.refilter(|f| f.catrice = None)))
                            />
                        })}
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox visible_ids=page_ids is_selected=is_selected on_toggle=toggle_page />
                                <TableHeaderCell resizable=false min_width=110.0>"Código PDV"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Nombre PDV"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Ciudad"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Marca"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Tipo mueble Essence"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Tipo mueble Catrice"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_items.get()
                                key=|ft| ft.id
                                children=move |ft| {
                                    let id = ft.id.unwrap_or_default();
                                    let pdv = ft.cod_pdv.clone();
                                    let name = ft.nombre_pdv.clone();
                                    let label = ft.cod_pdv.clone();
                                    let row = ft.clone();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox item_id=id is_selected=is_selected on_change=toggle_row />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&pdv, &text.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&name, &text.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{ft.ciudad.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{ft.marca.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{ft.tipo_mueble_essence.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{ft.tipo_mueble_catrice.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="btn btn-icon"
                                                        title="Editar"
                                                        on:click=move |_| dialog.set(Some(Dialog::Edit(row.clone())))
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
                        <div class="table-empty">"No hay tipos de mueble para mostrar"</div>
                    </Show>
                </div>
            </div>

            {move || dialog.get().map(|d| {
                let (title, initial) = match d {
                    Dialog::Create => ("Nuevo tipo de mueble", None),
                    Dialog::Edit(ft) => ("Editar tipo de mueble", Some(ft)),
                };
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| dialog.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                                dialog.set(None);
                                load();
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| dialog.set(None));
                            view! {
                                <FurnitureTypeDetails chain=chain initial=initial on_saved=on_saved on_cancel=on_cancel />
                            }
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
