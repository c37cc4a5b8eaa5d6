//! Filtered product listing, on top of the generic gateway.

use contracts::domain::product::Product;
use contracts::pagination::PageRequest;

use crate::shared::api_client::{self, ApiError};
use crate::shared::notify::{Notifier, Severity};

/// Path for the brand/category filter endpoints, or `None` when no
/// filter is set and the plain list should be used instead. With both
/// filters active the combined endpoint wins; otherwise brand beats
/// category.
pub fn filtered_path(brand_id: &str, category_id: &str, page: PageRequest) -> Option<String> {
    let brand_id = brand_id.trim();
    let category_id = category_id.trim();
    match (brand_id.is_empty(), category_id.is_empty()) {
        (false, false) => Some(format!(
            "/categories/{}/brands/{}/products/{}",
            category_id,
            brand_id,
            page.path_segment()
        )),
        (false, true) => Some(format!(
            "/brands/{}/products/{}",
            brand_id,
            page.path_segment()
        )),
        (true, false) => Some(format!(
            "/categories/{}/products/{}",
            category_id,
            page.path_segment()
        )),
        (true, true) => None,
    }
}

pub async fn fetch_filtered(
    notifier: &dyn Notifier,
    path: &str,
) -> Result<Vec<Product>, ApiError> {
    let result = api_client::get_json(path).await;
    if let Err(error) = &result {
        match error {
            ApiError::Network(detail) => log::error!("filtered product fetch failed: {}", detail),
            _ if error.is_unauthorized() => {}
            _ => notifier.notify(
                error.message_or("Error fetching filtered products. Please contact admin."),
                Severity::Error,
            ),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRAND: &str = "3f1e9d1c-0000-0000-0000-000000000001";
    const CATEGORY: &str = "3f1e9d1c-0000-0000-0000-000000000002";

    #[test]
    fn both_filters_use_the_combined_endpoint() {
        let path = filtered_path(BRAND, CATEGORY, PageRequest::new(5, 1)).unwrap();
        assert_eq!(
            path,
            format!("/categories/{}/brands/{}/products/5/1", CATEGORY, BRAND)
        );
    }

    #[test]
    fn single_filters_use_their_own_endpoints() {
        assert_eq!(
            filtered_path(BRAND, "", PageRequest::new(10, 3)).unwrap(),
            format!("/brands/{}/products/10/3", BRAND)
        );
        assert_eq!(
            filtered_path("", CATEGORY, PageRequest::new(10, 3)).unwrap(),
            format!("/categories/{}/products/10/3", CATEGORY)
        );
    }

    #[test]
    fn no_filters_means_no_filtered_path() {
        assert_eq!(filtered_path("", "  ", PageRequest::new(5, 1)), None);
    }
}
