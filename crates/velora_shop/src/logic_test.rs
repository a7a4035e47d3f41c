#[cfg(test)]
mod tests {
    use crate::error::ShopError;
    use crate::logic::{build_order, product_list, CreateOrderRequest};
    use velora_common::models::ORDER_STATUS_PENDING;
    use velora_config::{Product, ShopConfig};

    fn shop() -> ShopConfig {
        ShopConfig {
            default_currency: Some("CHF".to_string()),
            products: vec![
                Product {
                    sku: "oil-30".to_string(),
                    name: "Argan Oil 30ml".to_string(),
                    unit_amount: 2450,
                    currency: None,
                    description: Some("Cold-pressed".to_string()),
                },
                Product {
                    sku: "balm-50".to_string(),
                    name: "Shea Balm 50ml".to_string(),
                    unit_amount: 1800,
                    currency: Some("EUR".to_string()),
                    description: None,
                },
            ],
        }
    }

    fn request(sku: &str, quantity: i64) -> CreateOrderRequest {
        CreateOrderRequest {
            sku: sku.to_string(),
            quantity,
            customer_name: "Dana Meier".to_string(),
            customer_email: None,
        }
    }

    #[test]
    fn product_list_resolves_currencies() {
        let products = product_list(&shop());

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].currency, "CHF"); // shop default
        assert_eq!(products[1].currency, "EUR"); // product override
    }

    #[test]
    fn build_order_prices_from_the_catalog() {
        let order = build_order(&shop(), &request("oil-30", 3)).expect("valid order");

        assert_eq!(order.sku, "oil-30");
        assert_eq!(order.unit_amount, 2450);
        assert_eq!(order.total_amount, 3 * 2450);
        assert_eq!(order.currency, "CHF");
        assert_eq!(order.status, ORDER_STATUS_PENDING);
        assert!(!order.reference.is_empty());
    }

    #[test]
    fn build_order_rejects_unknown_sku() {
        let err = build_order(&shop(), &request("no-such-sku", 1)).unwrap_err();
        assert!(matches!(err, ShopError::UnknownProduct(_)));
    }

    #[test]
    fn build_order_rejects_bad_quantities() {
        assert!(matches!(
            build_order(&shop(), &request("oil-30", 0)).unwrap_err(),
            ShopError::InvalidQuantity(0)
        ));
        assert!(matches!(
            build_order(&shop(), &request("oil-30", -2)).unwrap_err(),
            ShopError::InvalidQuantity(-2)
        ));
        assert!(matches!(
            build_order(&shop(), &request("oil-30", 500)).unwrap_err(),
            ShopError::InvalidQuantity(500)
        ));
    }

    #[test]
    fn build_order_rejects_blank_customer() {
        let mut bad = request("oil-30", 1);
        bad.customer_name = "  ".to_string();
        assert!(matches!(
            build_order(&shop(), &bad).unwrap_err(),
            ShopError::ValidationError(_)
        ));
    }

    #[test]
    fn build_order_assigns_unique_references() {
        let first = build_order(&shop(), &request("oil-30", 1)).unwrap();
        let second = build_order(&shop(), &request("oil-30", 1)).unwrap();
        assert_ne!(first.reference, second.reference);
    }
}
