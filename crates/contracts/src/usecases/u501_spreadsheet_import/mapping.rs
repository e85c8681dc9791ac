use serde::{Deserialize, Serialize};

/// Column layout of a Deprati sales workbook, entered in the mapping dialog.
/// Values stay as typed text until the form is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub fila_cod_pdv: String,
    pub columna_cod_pdv: String,
    pub fila_pdv: String,
    pub columna_pdv: String,
    pub fila_inicio_datos: String,
    pub columna_fecha: String,
    pub columna_marca: String,
    pub columna_nombre_producto: String,
    pub columna_cod_barra: String,
    pub columna_inicio_pdv: String,
    pub columna_fin_pdv: String,
}

impl ColumnMapping {
    /// `(form key, label)` in dialog order
    pub const FIELDS: [(&'static str, &'static str); 11] = [
        ("filaCodPdv", "Fila código PDV"),
        ("columnaCodPdv", "Columna código PDV"),
        ("filaPdv", "Fila PDV"),
        ("columnaPdv", "Columna PDV"),
        ("filaInicioDatos", "Fila inicio datos"),
        ("columnaFecha", "Columna fecha"),
        ("columnaMarca", "Columna marca"),
        ("columnaNombreProducto", "Columna nombre producto"),
        ("columnaCodBarra", "Columna código barra"),
        ("columnaInicioPDV", "Columna inicio PDV"),
        ("columnaFinPDV", "Columna fin PDV"),
    ];

    pub fn get(&self, key: &str) -> &str {
        match key {
            "filaCodPdv" => &self.fila_cod_pdv,
            "columnaCodPdv" => &self.columna_cod_pdv,
            "filaPdv" => &self.fila_pdv,
            "columnaPdv" => &self.columna_pdv,
            "filaInicioDatos" => &self.fila_inicio_datos,
            "columnaFecha" => &self.columna_fecha,
            "columnaMarca" => &self.columna_marca,
            "columnaNombreProducto" => &self.columna_nombre_producto,
            "columnaCodBarra" => &self.columna_cod_barra,
            "columnaInicioPDV" => &self.columna_inicio_pdv,
            "columnaFinPDV" => &self.columna_fin_pdv,
            _ => "",
        }
    }

    pub fn set(&mut self, key: &str, value: String) {
        let slot = match key {
            "filaCodPdv" => &mut self.fila_cod_pdv,
            "columnaCodPdv" => &mut self.columna_cod_pdv,
            "filaPdv" => &mut self.fila_pdv,
            "columnaPdv" => &mut self.columna_pdv,
            "filaInicioDatos" => &mut self.fila_inicio_datos,
            "columnaFecha" => &mut self.columna_fecha,
            "columnaMarca" => &mut self.columna_marca,
            "columnaNombreProducto" => &mut self.columna_nombre_producto,
            "columnaCodBarra" => &mut self.columna_cod_barra,
            "columnaInicioPDV" => &mut self.columna_inicio_pdv,
            "columnaFinPDV" => &mut self.columna_fin_pdv,
            _ => return,
        };
        *slot = value;
    }

    /// Multipart fields to send; values that are not integers are left out
    pub fn form_params(&self) -> Vec<(&'static str, i64)> {
        Self::FIELDS
            .iter()
            .filter_map(|(key, _)| {
                self.get(key)
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .map(|value| (*key, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_integer_params_are_sent() {
        let mut mapping = ColumnMapping::default();
        mapping.set("filaCodPdv", "2".into());
        mapping.set("columnaFecha", " 5 ".into());
        mapping.set("columnaMarca", "B".into());
        assert_eq!(mapping.form_params(), vec![("filaCodPdv", 2), ("columnaFecha", 5)]);
    }
}
