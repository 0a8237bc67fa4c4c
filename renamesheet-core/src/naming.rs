use crate::category::Category;
use std::path::{Component, Path};

/// Append the category's extension to `new_name` unless it already ends with it.
///
/// The comparison is case sensitive against the uppercase form, so
/// `report.pdf` under `Pdf` becomes `report.pdf.PDF`.
pub fn apply_extension(new_name: &str, category: Category) -> String {
    match category.extension() {
        Some(extension) if !new_name.ends_with(&extension) => format!("{new_name}{extension}"),
        _ => new_name.to_string(),
    }
}

/// True when `name` is exactly one normal path component.
pub fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
