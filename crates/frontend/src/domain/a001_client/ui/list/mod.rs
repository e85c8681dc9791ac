pub mod state;

use self::state::create_state;
use crate::domain::a001_client::ui::details::{model, ClientDetails};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::list_utils::{export_records, highlight_matches, notify_all, SearchInput};
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifier;
use contracts::domain::a001_client::aggregate::{find_by_code, Client};
use contracts::domain::a001_client::export::export_filename;
use contracts::domain::common::RecordId;
use contracts::usecases::u502_bulk_delete::BlockedKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Dialog {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    One { id: RecordId, label: String },
    Selected(Vec<RecordId>),
}

impl PendingDelete {
    fn message(&self) -> String {
        match self {
            PendingDelete::One { label, .. } => format!("¿Eliminar el cliente {}?", label),
            PendingDelete::Selected(ids) => {
                format!("¿Eliminar {} cliente(s) seleccionado(s)?", ids.len())
            }
        }
    }
}

#[component]
pub fn ClientList() -> impl IntoView {
    let notifier = StoredValue::new(use_notifier());
    let state = create_state();
    let loading = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let is_filter_expanded = RwSignal::new(true);
    let dialog = RwSignal::new(None::<Dialog>);
    let pending_delete = RwSignal::new(None::<PendingDelete>);
    let code_query = RwSignal::new(String::new());

    let load = move || {
        let notifier = notifier.get_value();
        loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(items) => {
                    log::debug!("Loaded {} clients", items.len());
                    let _ = state.try_update(|s| {
                        let ids: Vec<RecordId> = items.iter().filter_map(|c| c.id).collect();
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
        page_items.with(|items| items.iter().filter_map(|c| c.id).collect::<Vec<_>>())
    });
    let is_selected = Callback::new(move |id: RecordId| state.with(|s| s.selection.contains(id)));
    let selected_count = Memo::new(move |_| state.with(|s| s.selection.len()));

    let open_by_code = move || {
        let code = code_query.get_untracked();
        if code.trim().is_empty() {
            return;
        }
        let found = state.with_untracked(|s| find_by_code(s.list.snapshot(), &code).and_then(|c| c.id));
        match found {
            Some(id) => dialog.set(Some(Dialog::Edit(id))),
            None => notifier.with_value(|n| {
                n.warn(format!("No se encontró cliente con código {}", code.trim()))
            }),
        }
    };

    let run_delete = move |pending: PendingDelete| {
        let notifier = notifier.get_value();
        deleting.set(true);
        spawn_local(async move {
            match pending {
                PendingDelete::One { id, .. } => match model::delete_one(id).await {
                    Ok(outcome) => notify_all(&notifier, outcome.notices(BlockedKind::Record)),
                    Err(e) => notifier.api_error(&e),
                },
                PendingDelete::Selected(ids) => {
                    let tally = model::delete_many(&ids).await;
                    log::info!("Client delete: {} ok, {} failed", tally.deleted.len(), tally.failed.len());
                    notifier.notify(tally.notice());
                    let _ = state.try_update(|s| s.selection.clear());
                }
            }
            let _ = deleting.try_set(false);
            load();
        });
    };

    let export = move || {
        let rows: Vec<Client> = state.with_untracked(|s| s.list.visible());
        notifier.with_value(|n| export_records(n, "Clientes", &rows, &export_filename(today())));
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

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Clientes"</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.list.visible_len()).to_string()}
                    </span>
                </div>
                <div class="page__header-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")}
                        "Nuevo cliente"
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
                        on_click=move |_| {
                            let ids = state.with_untracked(|s| s.selection.ids().to_vec());
                            if !ids.is_empty() {
                                pending_delete.set(Some(PendingDelete::Selected(ids)));
                            }
                        }
                        disabled=Signal::derive(move || selected_count.get() == 0 || deleting.get())
                    >
                        {icon("delete")}
                        {move || format!("Eliminar seleccionados ({})", selected_count.get())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
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
                        <Flex gap=FlexGap::Large align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Buscar:"</Label>
                                <SearchInput
                                    value=Signal::derive(move || search.get())
                                    on_change=Callback::new(move |text: String| state.update(|s| s.list.set_search(&text)))
                                    placeholder="Código, nombre, ciudad..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Buscar por código exacto:"</Label>
                                <Flex gap=FlexGap::Small>
                                    <Input value=code_query placeholder="MZCL-000014" />
                                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open_by_code()>
                                        {icon("search")}
                                        "Abrir"
                                    </Button>
                                </Flex>
                            </Flex>
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 760px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox visible_ids=page_ids is_selected=is_selected on_toggle=toggle_page />
                                <TableHeaderCell resizable=false min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Código cliente"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Nombre cliente"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Ciudad"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Código proveedor"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_items.get()
                                key=|client| client.id
                                children=move |client| {
                                    let id = client.id.unwrap_or_default();
                                    let code = client.cod_cliente.clone();
                                    let name = client.nombre_cliente.clone();
                                    let label = format!("{} ({})", client.nombre_cliente, client.cod_cliente);
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox item_id=id is_selected=is_selected on_change=toggle_row />
                                            <TableCell>
                                                <TableCellLayout>{id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&code, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&name, &search.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{client.ciudad.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{client.codigo_proveedor.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="btn btn-icon"
                                                        title="Editar"
                                                        on:click=move |_| dialog.set(Some(Dialog::Edit(id)))
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
                        <div class="table-empty">"No hay clientes para mostrar"</div>
                    </Show>
                </div>
            </div>

            {move || dialog.get().map(|d| {
                let (title, id) = match d {
                    Dialog::Create => ("Nuevo cliente", None),
                    Dialog::Edit(id) => ("Editar cliente", Some(id)),
                };
                view! {
                    <Modal title=title.to_string() on_close=Callback::new(move |_| dialog.set(None))>
                        {
                            let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
                                dialog.set(None);
                                load();
                            });
                            let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| dialog.set(None));
                            view! { <ClientDetails id=id on_saved=on_saved on_cancel=on_cancel /> }
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
