//! User-facing messages for the task form (French, the form's only locale)

pub const NAME_REQUIRED: &str = "Le nom est obligatoire";
pub const DUE_DATE_REQUIRED: &str = "La date est obligatoire";
pub const DUE_DATE_FORMAT: &str = "Le format doit être jj/mm/aaaa";
pub const DUE_DATE_PAST: &str = "La date ne peut pas être dans le passé";
pub const PRIORITY_INVALID: &str = "La priorité est invalide";
pub const COMPLETED_REQUIRED: &str = "Ce champ est requis";

pub fn name_too_short(min: usize) -> String {
    format!("Le nom doit contenir au moins {} caractères", min)
}

pub fn name_too_long(max: usize) -> String {
    format!("Le nom ne doit pas dépasser {} caractères", max)
}
