use super::view_model::FurnitureTypeDetailsViewModel;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::toast::use_notifier;
use contracts::domain::a003_furniture_type::aggregate::FurnitureType;
use contracts::domain::common::FieldErrors;
use contracts::enums::retail_chain::RetailChain;
use leptos::prelude::*;
use std::rc::Rc;

type Getter = fn(&FurnitureType) -> String;
type Setter = fn(&mut FurnitureType, String);

/// One text input bound to a `FurnitureType` field
fn text_field(
    vm: &FurnitureTypeDetailsViewModel,
    errors: Signal<FieldErrors>,
    label: &'static str,
    wire: &'static str,
    required: bool,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    let form = vm.form;
    let vm = vm.clone();
    view! {
        <FormField label=label field=wire errors=errors required=required>
            <input
                type="text"
                id=wire
                prop:value=move || form.with(get)
                on:input=move |ev| vm.update(|f| set(f, event_target_value(&ev)))
            />
        </FormField>
    }
}

#[component]
pub fn FurnitureTypeDetails(
    chain: RetailChain,
    initial: Option<FurnitureType>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = FurnitureTypeDetailsViewModel::new(chain, initial, use_notifier());
    let errors: Signal<FieldErrors> = vm.errors.into();
    let saving = vm.saving;
    let client_code = chain.client_code().unwrap_or("");

    view! {
        <div class="details-container furniture-type-details">
            <div class="details-form">
                <div class="form-group">
                    <label>"Cliente"</label>
                    <input type="text" value=client_code disabled=true />
                </div>
                {text_field(&vm, errors, "Código PDV", "codPdv", true, |f| f.cod_pdv.clone(), |f, v| f.cod_pdv = v)}
                {text_field(&vm, errors, "Nombre PDV", "nombrePdv", true, |f| f.nombre_pdv.clone(), |f, v| f.nombre_pdv = v)}
                {text_field(&vm, errors, "Ciudad", "ciudad", false, |f| f.ciudad.clone(), |f, v| f.ciudad = v)}
                {text_field(&vm, errors, "Marca", "marca", false, |f| f.marca.clone(), |f, v| f.marca = v)}
                {text_field(&vm, errors, "Tipo mueble Essence", "tipoMuebleEssence", false,
                    |f| f.tipo_mueble_essence.clone(), |f, v| f.tipo_mueble_essence = v)}
                {text_field(&vm, errors, "Tipo mueble Catrice", "tipoMuebleCatrice", false,
                    |f| f.tipo_mueble_catrice.clone(), |f, v| f.tipo_mueble_catrice = v)}
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    {
                        let vm = vm.clone();
                        move || if vm.is_edit_mode()() { "Guardar" } else { "Crear" }
                    }
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
