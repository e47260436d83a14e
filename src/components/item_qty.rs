//! Item Quantity Badges
//!
//! Menu pages render each `.item_qty` badge empty with the current cart
//! quantity in `data-qty`; copy it into the text on load.

use crate::page::Page;

const SELECTOR: &str = ".item_qty";
const QTY_ATTRIBUTE: &str = "data-qty";

pub fn hydrate_item_quantities<P: Page>(page: &P) -> usize {
    let badges = page.attribute_pairs(SELECTOR, QTY_ATTRIBUTE);
    for (id, qty) in &badges {
        if !id.is_empty() {
            page.set_text(id, qty);
        }
    }
    badges.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::FakePage;

    #[test]
    fn test_badges_take_data_qty() {
        let page = FakePage::at("/marketplace/pizza-hub/")
            .with_attribute("qty-3", SELECTOR, QTY_ATTRIBUTE, "2")
            .with_attribute("qty-4", SELECTOR, QTY_ATTRIBUTE, "0")
            .with_attribute("other", ".badge", QTY_ATTRIBUTE, "9");

        assert_eq!(hydrate_item_quantities(&page), 2);
        assert_eq!(page.text("qty-3").as_deref(), Some("2"));
        assert_eq!(page.text("qty-4").as_deref(), Some("0"));
        assert_eq!(page.text("other").as_deref(), Some(""));
    }
}
