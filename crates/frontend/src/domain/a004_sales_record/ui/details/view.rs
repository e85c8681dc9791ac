use super::view_model::SalesRecordDetailsViewModel;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::toast::use_notifier;
use contracts::domain::a004_sales_record::aggregate::SalesRecord;
use contracts::domain::common::FieldErrors;
use contracts::enums::retail_chain::RetailChain;
use leptos::prelude::*;
use std::rc::Rc;

/// How a form value is shown and read back
#[derive(Clone, Copy)]
enum Kind {
    Text,
    Whole,
    Decimal,
}

struct Field {
    label: &'static str,
    wire: &'static str,
    required: bool,
    kind: Kind,
    get: fn(&SalesRecord) -> String,
    set: fn(&mut SalesRecord, &str),
}

fn int_text(v: Option<i32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn parse_int(v: &str) -> Option<i32> {
    v.trim().parse().ok()
}

fn parse_decimal(v: &str) -> f64 {
    v.trim().replace(',', ".").parse().unwrap_or(0.0)
}

const FIELDS: &[Field] = &[
    Field { label: "Año", wire: "anio", required: true, kind: Kind::Whole,
        get: |r| int_text(r.anio), set: |r, v| r.anio = parse_int(v) },
    Field { label: "Mes", wire: "mes", required: true, kind: Kind::Whole,
        get: |r| int_text(r.mes), set: |r, v| r.mes = parse_int(v) },
    Field { label: "Día", wire: "dia", required: false, kind: Kind::Whole,
        get: |r| int_text(r.dia), set: |r, v| r.dia = parse_int(v) },
    Field { label: "Marca", wire: "marca", required: false, kind: Kind::Text,
        get: |r| r.marca.clone(), set: |r, v| r.marca = v.to_string() },
    Field { label: "Código barra", wire: "codBarra", required: true, kind: Kind::Text,
        get: |r| r.cod_barra.clone(), set: |r, v| r.cod_barra = v.to_string() },
    Field { label: "Código SAP", wire: "codigoSap", required: false, kind: Kind::Text,
        get: |r| r.codigo_sap.clone(), set: |r, v| r.codigo_sap = v.to_string() },
    Field { label: "Producto", wire: "nombreProducto", required: false, kind: Kind::Text,
        get: |r| r.nombre_producto.clone(), set: |r, v| r.nombre_producto = v.to_string() },
    Field { label: "Código PDV", wire: "codPdv", required: true, kind: Kind::Text,
        get: |r| r.cod_pdv.clone(), set: |r, v| r.cod_pdv = v.to_string() },
    Field { label: "PDV", wire: "pdv", required: false, kind: Kind::Text,
        get: |r| r.pdv.clone(), set: |r, v| r.pdv = v.to_string() },
    Field { label: "Ciudad", wire: "ciudad", required: false, kind: Kind::Text,
        get: |r| r.ciudad.clone(), set: |r, v| r.ciudad = v.to_string() },
    Field { label: "Stock ($)", wire: "stockDolares", required: false, kind: Kind::Decimal,
        get: |r| r.stock_dolares.to_string(), set: |r, v| r.stock_dolares = parse_decimal(v) },
    Field { label: "Stock (U)", wire: "stockUnidades", required: false, kind: Kind::Decimal,
        get: |r| r.stock_unidades.to_string(), set: |r, v| r.stock_unidades = parse_decimal(v) },
    Field { label: "Venta ($)", wire: "ventaDolares", required: false, kind: Kind::Decimal,
        get: |r| r.venta_dolares.to_string(), set: |r, v| r.venta_dolares = parse_decimal(v) },
    Field { label: "Venta (U)", wire: "ventaUnidad", required: false, kind: Kind::Decimal,
        get: |r| r.venta_unidad.to_string(), set: |r, v| r.venta_unidad = parse_decimal(v) },
];

#[component]
pub fn SalesRecordDetails(
    chain: RetailChain,
    initial: SalesRecord,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = SalesRecordDetailsViewModel::new(chain, initial, use_notifier());
    let errors: Signal<FieldErrors> = vm.errors.into();
    let saving = vm.saving;
    let form = vm.form;

    let inputs = FIELDS
        .iter()
        .map(|field| {
            let get = field.get;
            let set = field.set;
            let vm = vm.clone();
            let (input_type, step) = match field.kind {
                Kind::Text => ("text", None),
                Kind::Whole => ("number", Some("1")),
                Kind::Decimal => ("number", Some("0.01")),
            };
            view! {
                <FormField label=field.label field=field.wire errors=errors required=field.required>
                    <input
                        type=input_type
                        step=step
                        id=field.wire
                        prop:value=move || form.with(get)
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update(|r| set(r, &value));
                        }
                    />
                </FormField>
            }
        })
        .collect_view();

    view! {
        <div class="details-container sales-record-details">
            <div class="details-form details-form--grid">{inputs}</div>

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
                    "Guardar"
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_inputs_parse_leniently() {
        let mut r = SalesRecord::default();
        let find = |wire: &str| FIELDS.iter().find(|f| f.wire == wire).unwrap();

        (find("anio").set)(&mut r, " 2024 ");
        (find("mes").set)(&mut r, "");
        (find("ventaDolares").set)(&mut r, "12,5");
        assert_eq!(r.anio, Some(2024));
        assert_eq!(r.mes, None);
        assert_eq!(r.venta_dolares, 12.5);
        assert_eq!((find("anio").get)(&r), "2024");
    }

    #[test]
    fn required_markers_match_validation() {
        let required: Vec<&str> = FIELDS.iter().filter(|f| f.required).map(|f| f.wire).collect();
        assert_eq!(required, vec!["anio", "mes", "codBarra", "codPdv"]);
    }
}
