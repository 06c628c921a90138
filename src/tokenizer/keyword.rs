use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Reserved words of the pensum language.
///
/// Matching is ASCII case-insensitive, so `Curso`, `CURSO` and `curso` all
/// resolve to [`Keyword::Curso`]. The display form is the upper-case spelling,
/// which is also the token kind name shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Keyword {
    Carrera,
    Semestre,
    Curso,
    Nombre,
    Codigo,
    Creditos,
    Descripcion,
    Obligatorio,
    Electivo,
    Prerequisito,
}

/// Boolean literal spellings, case-insensitive.
pub fn parse_boolean(word: &str) -> Option<bool> {
    if word.eq_ignore_ascii_case("true") {
        Some(true)
    } else if word.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
