use contracts::domain::format_timestamp;
use contracts::domain::product::Product;
use leptos::prelude::*;

use crate::shared::components::modal::Modal;

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn ProductDetails(product: Product, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Product details".to_string() on_close=on_close>
            <dl class="details">
                <dt>"Name"</dt>
                <dd>{product.name.clone()}</dd>
                <dt>"Barcode"</dt>
                <dd>{product.barcode.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Category"</dt>
                <dd>{product.category_name.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Brand"</dt>
                <dd>{product.brand_name.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Unit cost price"</dt>
                <dd>{money(product.unit_cost_price)}</dd>
                <dt>"Unit selling price"</dt>
                <dd>{money(product.unit_selling_price)}</dd>
                <dt>"Quantity in stock"</dt>
                <dd>{count(product.quantity_in_stock)}</dd>
                <dt>"Reordering point"</dt>
                <dd>{count(product.reordering_point)}</dd>
                <dt>"Economic ordering quantity"</dt>
                <dd>{count(product.economic_ordering_quantity)}</dd>
                <dt>"Added by"</dt>
                <dd>{product.added_by.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Created"</dt>
                <dd>{format_timestamp(product.created_at)}</dd>
                <dt>"Last updated"</dt>
                <dd>{format_timestamp(product.last_updated)}</dd>
            </dl>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_two_decimals_or_dash() {
        assert_eq!(money(Some(2.5)), "2.50");
        assert_eq!(money(None), "-");
    }

    #[test]
    fn count_renders_plain_or_dash() {
        assert_eq!(count(Some(12)), "12");
        assert_eq!(count(None), "-");
    }
}
