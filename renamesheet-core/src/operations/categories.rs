use crate::output::{CategoriesResult, CategoryInfo};
use crate::Category;

/// Categories operation - describes the fixed category set
pub fn categories_operation() -> CategoriesResult {
    CategoriesResult {
        categories: Category::ALL
            .into_iter()
            .map(|category| CategoryInfo {
                label: category.label().to_string(),
                extension: category.extension(),
                template_file_name: category.template_file_name(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_fixed_set_in_order() {
        let result = categories_operation();
        let labels: Vec<&str> = result.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["IES", "PDF", "GOS", "PNG", "All Files"]);
        assert_eq!(result.categories[4].extension, None);
    }
}
