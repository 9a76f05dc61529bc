/// Enumerated annotation categories offered in the editable grid.
///
/// The store keeps the display label as plain text so that rows written by
/// older releases (free text only) keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Categoria {
    Operacional,
    Escala,
    CoberturaFalta,
    DemandaExtra,
    Outros,
}

impl Categoria {
    pub fn label(&self) -> &'static str {
        match self {
            Categoria::Operacional => "Operacional",
            Categoria::Escala => "Escala",
            Categoria::CoberturaFalta => "Cobertura de Falta",
            Categoria::DemandaExtra => "Demanda Extra",
            Categoria::Outros => "Outros",
        }
    }

    /// Case-insensitive match on the display label.
    pub fn from_label(s: &str) -> Option<Self> {
        let t = s.trim();
        [
            Categoria::Operacional,
            Categoria::Escala,
            Categoria::CoberturaFalta,
            Categoria::DemandaExtra,
            Categoria::Outros,
        ]
        .into_iter()
        .find(|c| c.label().eq_ignore_ascii_case(t))
    }

    pub fn all_labels() -> Vec<&'static str> {
        vec![
            Categoria::Operacional.label(),
            Categoria::Escala.label(),
            Categoria::CoberturaFalta.label(),
            Categoria::DemandaExtra.label(),
            Categoria::Outros.label(),
        ]
    }
}
