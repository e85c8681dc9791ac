pub mod state;

use self::state::create_state;
use crate::domain::a004_sales_record::ui::details::{model, SalesRecordDetails};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableCellMoney, TableHeaderCheckbox};
use crate::shared::components::ui::select::{non_empty, plain_options, Select};
use crate::shared::config;
use crate::shared::date_utils::{format_date_input, parse_date_input, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    download_report, export_records, highlight_matches, notify_all, warn_if_truncated, SearchInput,
    REPORT_READY,
};
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::{spawn_action, use_notifier};
use crate::usecases::u501_spreadsheet_import::UploadPanel;
use contracts::domain::a004_sales_record::aggregate::SalesRecord;
use contracts::domain::a004_sales_record::export::export_filename;
use contracts::domain::a004_sales_record::filter::{found_message, years_in, LOCAL_FILTER_FALLBACK};
use contracts::domain::common::RecordId;
use contracts::enums::retail_chain::RetailChain;
use contracts::shared::calendar::month_label;
use contracts::shared::list::{LoadPolicy, RecordFilter};
use contracts::usecases::u502_bulk_delete::BlockedKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

const YEARS_FALLBACK: &str = "No se pudieron cargar los años desde API. Se usaron años del dataset.";

#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    One(RecordId),
    Selected(Vec<RecordId>),
}

impl PendingDelete {
    fn message(&self) -> String {
        match self {
            PendingDelete::One(_) => "¿Está seguro de eliminar esta venta?".to_string(),
            PendingDelete::Selected(ids) => format!("¿Está seguro de eliminar {} venta(s)?", ids.len()),
        }
    }
}

/// Sales screen of one retail chain. Load policy, server-side filtering,
/// upload endpoint and report availability all follow from `chain`.
#[component]
pub fn SalesRecordList(chain: RetailChain) -> impl IntoView {
    let notifier = StoredValue::new(use_notifier());
    let max_selection = config::current().limits.sales_selection;
    let state = create_state(chain, max_selection);
    let loading = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let reporting = RwSignal::new(false);
    let is_filter_expanded = RwSignal::new(true);
    let editing = RwSignal::new(None::<SalesRecord>);
    let pending_delete = RwSignal::new(None::<PendingDelete>);

    let load_options = move || {
        if !model::filters_on_server(chain) {
            state.update(|s| s.derive_options());
            return;
        }
        let notifier = notifier.get_value();
        spawn_local(async move {
            let years = model::fetch_years(chain).await;
            let brands = model::fetch_brands(chain).await;
            let _ = state.try_update(|s| {
                match years {
                    Ok(years) => s.years = years,
                    Err(e) => {
                        log::warn!("Year options unavailable: {}", e);
                        s.years = years_in(s.list.snapshot());
                        notifier.warn(YEARS_FALLBACK);
                    }
                }
                match brands {
                    Ok(brands) => s.brands = brands,
                    Err(e) => notifier.api_error(&e),
                }
            });
        });
    };

    let load = move || {
        let notifier = notifier.get_value();
        loading.set(true);
        spawn_local(async move {
            match model::fetch_all(chain).await {
                Ok(items) => {
                    log::debug!("Loaded {} sales rows for {}", items.len(), chain);
                    let first = state
                        .try_update(|s| {
                            let ids: Vec<RecordId> = items.iter().filter_map(|r| r.id).collect();
                            s.selection.retain_existing(&ids);
                            s.list.load_snapshot(items);
                            !std::mem::replace(&mut s.is_loaded, true)
                        })
                        .unwrap_or(false);
                    if first {
                        load_options();
                    }
                }
                Err(e) => {
                    log::error!("Sales load failed for {}: {}", chain, e);
                    notifier.error("Error al cargar ventas");
                }
            }
            let _ = loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let choose_year = move |year: Option<i32>| {
        state.update(|s| s.set_draft_year(year));
        let Some(year) = year else {
            return;
        };
        if !model::filters_on_server(chain) {
            return;
        }
        let notifier = notifier.get_value();
        spawn_local(async move {
            match model::fetch_months(chain, year).await {
                Ok(months) => {
                    let _ = state.try_update(|s| {
                        if s.draft.year == Some(year) {
                            s.months = months;
                        }
                    });
                }
                Err(e) => {
                    log::warn!("Month options unavailable: {}", e);
                    let found = state.try_with_untracked(|s| s.months.len()).unwrap_or(0);
                    notifier.info(if found > 0 {
                        format!("Se encontraron {} meses con datos para el año {}.", found, year)
                    } else {
                        format!("No hay datos para el año {}. Se muestran todos los meses.", year)
                    });
                    if found == 0 {
                        let _ = state.try_update(|s| s.months = (1..=12).collect());
                    }
                }
            }
        });
    };

    let clear = move || {
        state.update(|s| s.reset());
        if state.with_untracked(|s| s.list.policy()) == LoadPolicy::Eager {
            load();
        }
    };

    let apply = move || {
        let filter = state.with_untracked(|s| s.draft.clone());
        if let Err(msg) = filter.check() {
            notifier.with_value(|n| n.warn(msg));
            return;
        }
        if filter.is_empty() {
            clear();
            return;
        }
        let notifier = notifier.get_value();
        if !model::filters_on_server(chain) {
            let count = state.try_update(|s| s.list.apply_locally(filter)).unwrap_or(0);
            notifier.info(found_message(count));
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match model::fetch_filtered(chain, &filter).await {
                Ok(rows) => {
                    let count = rows.len();
                    let _ = state.try_update(|s| s.list.set_filtered(filter, rows));
                    notifier.success(found_message(count));
                }
                Err(e) => {
                    log::warn!("Server filtering failed, filtering locally: {}", e);
                    let _ = state.try_update(|s| s.list.apply_locally(filter));
                    notifier.warn(LOCAL_FILTER_FALLBACK);
                }
            }
            let _ = loading.try_set(false);
        });
    };

    let search = Memo::new(move |_| state.with(|s| s.list.search().to_string()));
    let applied = Memo::new(move |_| state.with(|s| s.applied()));
    let draft = Memo::new(move |_| state.with(|s| s.draft.clone()));
    let page_items = Memo::new(move |_| state.with(|s| s.list.page_items()));
    let page_ids = Signal::derive(move || {
        page_items.with(|items| items.iter().filter_map(|r| r.id).collect::<Vec<_>>())
    });
    let is_selected = Callback::new(move |id: RecordId| state.with(|s| s.selection.contains(id)));
    let selected_count = Memo::new(move |_| state.with(|s| s.selection.len()));
    let year_options = Memo::new(move |_| {
        state.with(|s| s.years.iter().map(|y| (y.to_string(), y.to_string())).collect::<Vec<_>>())
    });
    let month_options = Memo::new(move |_| {
        state.with(|s| s.months.iter().map(|m| (m.to_string(), month_label(*m as u32))).collect::<Vec<_>>())
    });
    let brand_options = Memo::new(move |_| state.with(|s| plain_options(&s.brands)));

    let run_delete = move |pending: PendingDelete| {
        let notifier = notifier.get_value();
        deleting.set(true);
        spawn_local(async move {
            match pending {
                PendingDelete::One(id) => match model::delete_one(chain, id).await {
                    Ok(outcome) => notify_all(&notifier, outcome.notices(BlockedKind::Record)),
                    Err(e) => notifier.api_error(&e),
                },
                PendingDelete::Selected(ids) => {
                    let outcome = model::delete_many(chain, &ids).await;
                    log::info!(
                        "Sales delete on {}: {} deleted, {} blocked",
                        chain,
                        outcome.eliminados.len(),
                        outcome.bloqueados.len()
                    );
                    notify_all(&notifier, outcome.notices(BlockedKind::Record));
                    let _ = state.try_update(|s| s.selection.clear());
                }
            }
            let _ = deleting.try_set(false);
            load();
        });
    };

    let export = move || {
        let (rows, filter) = state.with_untracked(|s| (s.list.visible(), s.list.applied().cloned()));
        let name = export_filename(chain, filter.as_ref(), today());
        notifier.with_value(|n| export_records(n, "Ventas", &rows, &name));
    };

    let server_report = move || {
        let handle = notifier.get_value();
        let done = handle.clone();
        spawn_action(handle, reporting, async move {
            let fallback = model::report_fallback_name(chain);
            download_report(&model::url(chain, "/reporte-ventas"), &fallback).await?;
            done.success(REPORT_READY);
            Ok(())
        });
    };

    let toggle_row = Callback::new(move |(id, checked): (RecordId, bool)| {
        if let Some(change) = state.try_update(|s| s.selection.set(id, checked)) {
            notifier.with_value(|n| warn_if_truncated(n, change, Some(max_selection)));
        }
    });
    let toggle_page = Callback::new(move |_| {
        let ids = page_ids.get_untracked();
        if let Some(change) = state.try_update(|s| s.selection.toggle_visible(&ids)) {
            notifier.with_value(|n| warn_if_truncated(n, change, Some(max_selection)));
        }
    });
    let select_all_visible = move || {
        let ids: Vec<RecordId> = state.with_untracked(|s| s.list.visible().iter().filter_map(|r| r.id).collect());
        if let Some(change) = state.try_update(|s| s.selection.replace(ids)) {
            notifier.with_value(|n| warn_if_truncated(n, change, Some(max_selection)));
        }
    };

    view! {
        <PageFrame page_id="a004_sales_record--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Ventas {}", chain.display_name())}</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.list.visible_len()).to_string()}
                    </span>
                </div>
                <div class="page__header-actions">
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
                    {model::filters_on_server(chain).then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| server_report()
                            disabled=Signal::derive(move || reporting.get())
                        >
                            {icon("file-text")}
                            "Reporte"
                        </Button>
                    })}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| select_all_visible()>
                        {icon("check")}
                        "Seleccionar filtrados"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let ids = state.with_untracked(|s| s.selection.ids().to_vec());
                            if ids.is_empty() {
                                notifier.with_value(|n| n.info("No hay ventas seleccionadas para eliminar"));
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
                <UploadPanel options=model::upload_options(chain) on_uploaded=Callback::new(move |_| load()) />

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || applied.with(|f| f.tags().len()))
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
                            <Select
                                label="Año"
                                value=Signal::derive(move || draft.with(|f| f.year.map(|y| y.to_string()).unwrap_or_default()))
                                on_change=Callback::new(move |v: String| choose_year(v.parse().ok()))
                                options=year_options
                                placeholder="Todos"
                            />
                            <Select
                                label="Mes"
                                value=Signal::derive(move || draft.with(|f| f.month.map(|m| m.to_string()).unwrap_or_default()))
                                on_change=Callback::new(move |v: String| state.update(|s| s.draft.month = v.parse().ok()))
                                options=month_options
                                placeholder="Todos"
                                disabled=Signal::derive(move || draft.with(|f| f.year.is_none()))
                            />
                            <Select
                                label="Marca"
                                value=Signal::derive(move || draft.with(|f| f.brand.clone().unwrap_or_default()))
                                on_change=Callback::new(move |v: String| state.update(|s| s.draft.brand = non_empty(v)))
                                options=brand_options
                                placeholder="Todas"
                            />
                            <div class="form__group">
                                <label class="form__label" for="sales-date">"Fecha"</label>
                                <input
                                    type="date"
                                    id="sales-date"
                                    class="form__input"
                                    prop:value=move || draft.with(|f| format_date_input(f.date))
                                    on:change=move |ev| {
                                        let date = parse_date_input(&event_target_value(&ev));
                                        state.update(|s| s.draft.date = date);
                                    }
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {icon("filter")}
                                "Aplicar filtros"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear()>
                                {icon("x")}
                                "Limpiar"
                            </Button>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Buscar:"</Label>
                                <SearchInput
                                    value=Signal::derive(move || search.get())
                                    on_change=Callback::new(move |text: String| state.update(|s| s.list.set_search(&text)))
                                    placeholder="Producto, PDV, código..."
                                />
                            </Flex>
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <For
                            each=move || applied.get().tags()
                            key=|(field, label)| (*field as u8, label.clone())
                            children=move |(field, label)| view! {
                                <FilterTag
                                    label=label
                                    on_remove=Callback::new(move |_| state.update(|s| s.remove_tag(field)))
                                />
                            }
                        />
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1500px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox visible_ids=page_ids is_selected=is_selected on_toggle=toggle_page />
                                <TableHeaderCell resizable=false min_width=60.0>"Año"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Mes"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=50.0>"Día"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Marca"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Código barra"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Código SAP"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Producto"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Código PDV"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"PDV"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Ciudad"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Stock ($)"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Stock (U)"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Venta ($)"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Venta (U)"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_items.get()
                                key=|r| r.id
                                children=move |r| {
                                    let id = r.id.unwrap_or_default();
                                    let product = r.nombre_producto.clone();
                                    let pdv = r.pdv_name().to_string();
                                    let barcode = r.cod_barra.clone();
                                    let (stock_usd, stock_units) = (r.stock_dolares, r.stock_unidades);
                                    let (sale_usd, sale_units) = (r.venta_dolares, r.venta_unidad);
                                    let month = r.mes.map(|m| month_label(m as u32)).unwrap_or_default();
                                    let row = r.clone();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox item_id=id is_selected=is_selected on_change=toggle_row />
                                            <TableCell><TableCellLayout>{r.anio}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{month}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{r.dia}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{r.marca.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&barcode, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{r.codigo_sap.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&product, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{r.cod_pdv.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&pdv, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{r.ciudad.clone()}</TableCellLayout></TableCell>
                                            <TableCellMoney value=Signal::derive(move || Some(stock_usd)) />
                                            <TableCellMoney value=Signal::derive(move || Some(stock_units)) currency="" decimals=0 />
                                            <TableCellMoney value=Signal::derive(move || Some(sale_usd)) />
                                            <TableCellMoney value=Signal::derive(move || Some(sale_units)) currency="" decimals=0 />
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="btn btn-icon"
                                                        title="Editar"
                                                        on:click=move |_| editing.set(Some(row.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="btn btn-icon btn-icon--danger"
                                                        title="Eliminar"
                                                        on:click=move |_| pending_delete.set(Some(PendingDelete::One(id)))
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
                        <div class="table-empty">
                            {move || if state.with(|s| s.list.is_showing()) {
                                "No hay ventas para mostrar"
                            } else {
                                "Aplique filtros o busque para ver las ventas"
                            }}
                        </div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|record| view! {
                <Modal title="Editar venta".to_string() on_close=Callback::new(move |_| editing.set(None))>
                    {
                        let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                            editing.set(None);
                            load();
                        });
                        let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| editing.set(None));
                        view! {
                            <SalesRecordDetails chain=chain initial=record on_saved=on_saved on_cancel=on_cancel />
                        }
                    }
                </Modal>
            })}

            {move || pending_delete.get().map(|pending| {
                let message = pending.message();
                view! {
                    <ConfirmDialog
                        title="Confirmación de eliminación".to_string()
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
