use analytics::{analyze, AnalysisStrategies, AnalyticsError, SalesAnalyzer};
use configuration::Config;
use core_types::{Item, Product, PurchaseRecord, SalesData, Seller, SellerStat};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use strategies::{BonusByProfit, RevenueStrategy, SimpleRevenue, StrategyError};

fn seller(id: &str) -> Seller {
    Seller {
        id: id.to_string(),
        first_name: format!("First-{id}"),
        last_name: format!("Last-{id}"),
        start_date: None,
        position: None,
    }
}

fn product(sku: &str, purchase_price: Decimal) -> Product {
    Product {
        sku: sku.to_string(),
        purchase_price,
        name: None,
        category: None,
        sale_price: None,
    }
}

fn item(sku: &str, quantity: u32, sale_price: Decimal, discount: Decimal) -> Item {
    Item {
        sku: sku.to_string(),
        quantity,
        sale_price,
        discount,
    }
}

fn record(seller_id: &str, total_amount: Decimal, items: Vec<Item>) -> PurchaseRecord {
    PurchaseRecord {
        seller_id: seller_id.to_string(),
        total_amount,
        items,
        receipt_id: None,
        date: None,
        customer_id: None,
        total_discount: None,
    }
}

/// Five sellers whose profits are 100 * (their index + 1), selling one product at cost 10.
fn five_sellers() -> SalesData {
    let sellers: Vec<Seller> = (1..=5).map(|i| seller(&format!("seller_{i}"))).collect();
    let purchase_records = (1..=5u32)
        .map(|i| {
            // Sale price 20 at cost 10 earns 10 per unit.
            record(
                &format!("seller_{i}"),
                Decimal::from(i * 10 * 20),
                vec![item("SKU_001", i * 10, dec!(20), Decimal::ZERO)],
            )
        })
        .collect();
    SalesData {
        sellers,
        products: vec![product("SKU_001", dec!(10))],
        purchase_records,
    }
}

#[test]
fn test_two_seller_scenario() {
    let data = SalesData {
        sellers: vec![seller("A"), seller("B")],
        products: vec![product("SKU_001", dec!(50))],
        purchase_records: vec![record(
            "A",
            dec!(300),
            vec![item("SKU_001", 3, dec!(100), Decimal::ZERO)],
        )],
    };

    let reports = analyze(&data, &AnalysisStrategies::standard()).unwrap();
    assert_eq!(reports.len(), 2);

    let a = &reports[0];
    assert_eq!(a.seller_id, "A");
    assert_eq!(a.name, "First-A Last-A");
    assert_eq!(a.revenue, dec!(300));
    assert_eq!(a.profit, dec!(150));
    assert_eq!(a.sales_count, 1);
    assert_eq!(a.bonus, dec!(22.5));
    assert_eq!(a.top_products.len(), 1);
    assert_eq!(a.top_products[0].sku, "SKU_001");
    assert_eq!(a.top_products[0].quantity, 3);

    let b = &reports[1];
    assert_eq!(b.seller_id, "B");
    assert_eq!(b.revenue, Decimal::ZERO);
    assert_eq!(b.profit, Decimal::ZERO);
    assert_eq!(b.sales_count, 0);
    assert_eq!(b.bonus, Decimal::ZERO);
    assert!(b.top_products.is_empty());
}

#[test]
fn test_every_seller_reported_once_in_profit_order() {
    let data = five_sellers();
    let reports = analyze(&data, &AnalysisStrategies::standard()).unwrap();

    assert_eq!(reports.len(), data.sellers.len());
    let ids: HashSet<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(ids.len(), data.sellers.len());
    assert!(data.sellers.iter().all(|s| ids.contains(s.id.as_str())));

    assert!(reports.windows(2).all(|w| w[0].profit >= w[1].profit));
    assert_eq!(reports[0].seller_id, "seller_5");
    assert_eq!(reports[4].seller_id, "seller_1");
}

#[test]
fn test_bonus_tiers_by_rank() {
    let reports = analyze(&five_sellers(), &AnalysisStrategies::standard()).unwrap();
    let profits: Vec<Decimal> = reports.iter().map(|r| r.profit).collect();
    assert_eq!(profits, vec![dec!(500), dec!(400), dec!(300), dec!(200), dec!(100)]);

    assert_eq!(reports[0].bonus, dec!(75));
    assert_eq!(reports[1].bonus, dec!(40));
    assert_eq!(reports[2].bonus, dec!(30));
    assert_eq!(reports[3].bonus, dec!(10));
    assert_eq!(reports[4].bonus, Decimal::ZERO);
}

#[test]
fn test_single_seller_gets_top_bonus() {
    let data = SalesData {
        sellers: vec![seller("solo")],
        products: vec![product("SKU_001", dec!(1.11))],
        purchase_records: vec![record(
            "solo",
            dec!(10),
            vec![item("SKU_001", 3, dec!(3.33), Decimal::ZERO)],
        )],
    };

    let reports = analyze(&data, &AnalysisStrategies::standard()).unwrap();
    // Profit 9.99 - 3.33 = 6.66; 15% is 0.999.
    assert_eq!(reports[0].profit, dec!(6.66));
    assert_eq!(reports[0].bonus, dec!(1.00));
}

#[test]
fn test_equal_profits_keep_input_order() {
    let data = SalesData {
        sellers: vec![seller("first"), seller("second"), seller("third")],
        products: vec![product("SKU_001", dec!(10))],
        purchase_records: vec![
            record("third", dec!(40), vec![item("SKU_001", 2, dec!(20), Decimal::ZERO)]),
            record("second", dec!(20), vec![item("SKU_001", 1, dec!(20), Decimal::ZERO)]),
            record("first", dec!(20), vec![item("SKU_001", 1, dec!(20), Decimal::ZERO)]),
        ],
    };

    let reports = analyze(&data, &AnalysisStrategies::standard()).unwrap();
    let order: Vec<&str> = reports.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(order, vec!["third", "first", "second"]);
}

#[test]
fn test_sales_count_is_per_record_and_revenue_uses_record_total() {
    let data = SalesData {
        sellers: vec![seller("A")],
        products: vec![product("SKU_001", dec!(10)), product("SKU_002", dec!(5))],
        purchase_records: vec![
            record(
                "A",
                dec!(99.99),
                vec![
                    item("SKU_001", 1, dec!(100), dec!(10)),
                    item("SKU_002", 2, dec!(10), Decimal::ZERO),
                    item("SKU_001", 1, dec!(100), dec!(10)),
                ],
            ),
            record("A", dec!(0.01), vec![]),
        ],
    };

    let reports = analyze(&data, &AnalysisStrategies::standard()).unwrap();
    let a = &reports[0];
    assert_eq!(a.sales_count, 2);
    // Revenue is the sum of record totals, not of item revenues.
    assert_eq!(a.revenue, dec!(100));
    // (90 - 10) * 2 + (20 - 10) = 170
    assert_eq!(a.profit, dec!(170));
    assert_eq!(a.top_products.len(), 2);
    assert_eq!(a.top_products[0].quantity, 2);
    assert_eq!(a.top_products[1].quantity, 2);
    // Tied quantities stay in first-sold order.
    assert_eq!(a.top_products[0].sku, "SKU_001");
}

#[test]
fn test_top_products_capped_sorted_and_unique() {
    let products: Vec<Product> = (0..15).map(|i| product(&format!("SKU_{i:03}"), dec!(1))).collect();
    let items: Vec<Item> = (0..15u32)
        .map(|i| item(&format!("SKU_{i:03}"), i + 1, dec!(2), Decimal::ZERO))
        .chain((0..15u32).map(|i| item(&format!("SKU_{i:03}"), 1, dec!(2), Decimal::ZERO)))
        .collect();
    let data = SalesData {
        sellers: vec![seller("A")],
        products,
        purchase_records: vec![record("A", dec!(1), items)],
    };

    let reports = analyze(&data, &AnalysisStrategies::standard()).unwrap();
    let top = &reports[0].top_products;
    assert_eq!(top.len(), 10);
    assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
    let skus: HashSet<&str> = top.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus.len(), top.len());
    assert_eq!(top[0].sku, "SKU_014");
    assert_eq!(top[0].quantity, 16);
}

#[test]
fn test_empty_collections_are_invalid_input() {
    let strategies = AnalysisStrategies::standard();
    let base = five_sellers();

    let clears: [fn(&mut SalesData); 3] = [
        |d| d.sellers.clear(),
        |d| d.products.clear(),
        |d| d.purchase_records.clear(),
    ];
    for clear in clears {
        let mut data = base.clone();
        clear(&mut data);
        let err = analyze(&data, &strategies).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput(_)));
    }
}

#[test]
fn test_missing_strategy_is_invalid_strategy() {
    let data = five_sellers();

    let no_bonus = AnalysisStrategies::new().with_revenue(SimpleRevenue::new());
    assert!(matches!(analyze(&data, &no_bonus), Err(AnalyticsError::InvalidStrategy(_))));

    let no_revenue = AnalysisStrategies::new().with_bonus(BonusByProfit::default());
    assert!(matches!(analyze(&data, &no_revenue), Err(AnalyticsError::InvalidStrategy(_))));
}

#[test]
fn test_closure_strategies() {
    // Revenue at list price with no discount, and a flat bonus of 1 per sale.
    let data = five_sellers();
    let strategies = AnalysisStrategies::new()
        .with_revenue(|item: &Item, _product: &Product| item.sale_price * Decimal::from(item.quantity))
        .with_bonus(|_index: usize, _total: usize, seller: &SellerStat| Decimal::from(seller.sales_count));

    let reports = analyze(&data, &strategies).unwrap();
    assert!(reports.iter().all(|r| r.bonus == Decimal::ONE));
}

#[test]
fn test_repeated_runs_are_identical() {
    let data = five_sellers();
    let analyzer = SalesAnalyzer::from_config(&Config::default());
    let strategies = AnalysisStrategies::from_config(&Config::default()).unwrap();

    let first = analyzer.analyze(&data, &strategies).unwrap();
    let second = analyzer.analyze(&data, &strategies).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_analysis_from_json_dataset() {
    let json = r#"{
        "sellers": [
            {"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov"},
            {"id": "seller_2", "first_name": "Maria", "last_name": "Ivanova"}
        ],
        "products": [
            {"sku": "SKU_001", "purchase_price": 40.5},
            {"sku": "SKU_002", "purchase_price": 12}
        ],
        "purchase_records": [
            {"seller_id": "seller_2", "total_amount": 171.9,
             "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 95.5, "discount": 10}]},
            {"seller_id": "seller_1", "total_amount": 30,
             "items": [{"sku": "SKU_002", "quantity": 2, "sale_price": 15, "discount": 0}]}
        ]
    }"#;

    let data = SalesData::from_json_str(json).unwrap();
    let reports = analyze(&data, &AnalysisStrategies::standard()).unwrap();

    // 95.5 * 2 * 0.9 - 40.5 * 2 = 90.9
    assert_eq!(reports[0].seller_id, "seller_2");
    assert_eq!(reports[0].profit, dec!(90.9));
    assert_eq!(reports[0].bonus, dec!(13.64));
    assert_eq!(reports[1].profit, dec!(6));
    assert_eq!(reports[1].bonus, dec!(0.6));
}

struct RejectDiscounts;

impl RevenueStrategy for RejectDiscounts {
    fn revenue(&self, item: &Item, _product: &Product) -> Result<Decimal, StrategyError> {
        if item.discount > Decimal::ZERO {
            return Err(StrategyError::Calculation(format!("discounted line for {}", item.sku)));
        }
        Ok(item.sale_price * Decimal::from(item.quantity))
    }
}

#[test]
fn test_strategy_errors_propagate() {
    let mut data = five_sellers();
    data.purchase_records[2].items[0].discount = dec!(5);
    let strategies = AnalysisStrategies::new()
        .with_revenue(RejectDiscounts)
        .with_bonus(BonusByProfit::default());

    let err = analyze(&data, &strategies).unwrap_err();
    assert!(matches!(err, AnalyticsError::Strategy(StrategyError::Calculation(_))));
}

#[test]
fn test_revenue_overflow_is_an_error_not_a_panic() {
    let json = r#"{
        "sellers": [{"id": "A", "first_name": "Big", "last_name": "Spender"}],
        "products": [{"sku": "SKU_001", "purchase_price": 1}],
        "purchase_records": [
            {"seller_id": "A", "total_amount": 40000000000000000000000000000, "items": []},
            {"seller_id": "A", "total_amount": 40000000000000000000000000000, "items": []}
        ]
    }"#;
    let data = SalesData::from_json_str(json).unwrap();

    let err = analyze(&data, &AnalysisStrategies::standard()).unwrap_err();
    assert!(matches!(err, AnalyticsError::Calculation(_)));
}

#[test]
fn test_line_revenue_overflow_surfaces_as_strategy_error() {
    let data = SalesData {
        sellers: vec![seller("A")],
        products: vec![product("SKU_001", dec!(1))],
        purchase_records: vec![record(
            "A",
            dec!(1),
            vec![item("SKU_001", 10, Decimal::MAX, Decimal::ZERO)],
        )],
    };

    let err = analyze(&data, &AnalysisStrategies::standard()).unwrap_err();
    assert!(matches!(err, AnalyticsError::Strategy(StrategyError::Calculation(_))));
}
