//! Cart Amounts
//!
//! Subtotal, per-category tax and grand total on the cart page.

use crate::config::{AppConfig, TaxBreakdownMode};
use crate::models::{CartAmount, DisplayText};
use crate::page::Page;

/// Write the totals into `#subtotal`, `#tax-<category>` and `#total`.
///
/// Does nothing off the cart route. Tax categories are visited in server
/// order; how several amounts under one category end up on screen depends on
/// `config.tax_breakdown`.
pub fn render_cart_amounts<P: Page>(page: &P, config: &AppConfig, amounts: &CartAmount) {
    if !config.is_cart_page(&page.path()) {
        return;
    }

    page.set_text("subtotal", amounts.subtotal.as_str());
    page.set_text("total", amounts.grand_total.as_str());

    for (category, parts) in &amounts.tax_dict {
        let id = format!("tax-{}", category);
        match config.tax_breakdown {
            TaxBreakdownMode::LastWins => {
                for amount in parts.values() {
                    page.set_text(&id, amount.as_str());
                }
            }
            TaxBreakdownMode::Joined => {
                if parts.is_empty() {
                    continue;
                }
                let joined = parts.values().map(DisplayText::as_str).collect::<Vec<_>>().join(", ");
                page.set_text(&id, &joined);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::FakePage;

    fn amounts(json: &str) -> CartAmount {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_off_cart_route_writes_nothing() {
        let page = FakePage::at("/marketplace/dominos/");
        let amounts = amounts(r#"{"subtotal":"100","grand_total":"110","tax_dict":{"GST":{"10":"10.00"}}}"#);
        render_cart_amounts(&page, &AppConfig::default(), &amounts);
        assert!(page.text_writes.borrow().is_empty());
    }

    #[test]
    fn test_totals_render_verbatim() {
        let page = FakePage::at("/cart/");
        let amounts = amounts(r#"{"subtotal":"1,200.00","grand_total":"1,296.00","tax_dict":{}}"#);
        render_cart_amounts(&page, &AppConfig::default(), &amounts);
        assert_eq!(page.text("subtotal").as_deref(), Some("1,200.00"));
        assert_eq!(page.text("total").as_deref(), Some("1,296.00"));
    }

    #[test]
    fn test_last_inner_amount_wins() {
        let page = FakePage::at("/cart/");
        let amounts = amounts(
            r#"{"subtotal":"100","grand_total":"118","tax_dict":{"CGST":{"9":"9.00","2.5":"2.50"},"SGST":{"9":"9.00"}}}"#,
        );
        render_cart_amounts(&page, &AppConfig::default(), &amounts);
        assert_eq!(page.text("tax-CGST").as_deref(), Some("2.50"));
        assert_eq!(page.text("tax-SGST").as_deref(), Some("9.00"));

        let cgst_writes: Vec<String> = page
            .text_writes
            .borrow()
            .iter()
            .filter(|(id, _)| id == "tax-CGST")
            .map(|(_, text)| text.clone())
            .collect();
        assert_eq!(cgst_writes, vec!["9.00".to_string(), "2.50".to_string()]);
    }

    #[test]
    fn test_joined_mode_shows_every_amount() {
        let page = FakePage::at("/cart/");
        let config = AppConfig { tax_breakdown: TaxBreakdownMode::Joined, ..AppConfig::default() };
        let amounts = amounts(
            r#"{"subtotal":"100","grand_total":"111.5","tax_dict":{"CGST":{"9":"9.00","2.5":"2.50"},"CESS":{}}}"#,
        );
        render_cart_amounts(&page, &config, &amounts);
        assert_eq!(page.text("tax-CGST").as_deref(), Some("9.00, 2.50"));
        assert!(!page.exists("tax-CESS"));
    }
}
