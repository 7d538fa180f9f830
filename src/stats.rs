use crate::locale::{parse_timestamp, Locale};
use crate::models::{
    Coupon, CouponUsage, CouponView, Customer, DashboardPayload, FinancialStatus, Order, RecordId,
    RevenueShare, Snapshot, StatsBundle, TopCustomer, UsageDetail,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;

pub const REVENUE_PALETTE: [&str; 5] = ["#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899", "#f97316"];
pub const TOP_CUSTOMER_LIMIT: usize = 5;

pub fn build_stats(snapshot: &Snapshot) -> StatsBundle {
    build_stats_with(snapshot, &Locale::default())
}

pub fn build_stats_with(snapshot: &Snapshot, locale: &Locale) -> StatsBundle {
    let qualifying: Vec<&Order> = snapshot
        .orders
        .iter()
        .filter(|order| is_qualifying(order))
        .collect();

    let mut total_revenue = 0.0;
    let mut total_discount = 0.0;
    let mut multi_code_orders = 0u64;
    // Insertion order drives palette position and top-customer tie breaks.
    let mut customer_usage: IndexMap<String, u64> = IndexMap::new();
    let mut usage_count: IndexMap<String, u64> = IndexMap::new();
    let mut revenue_by_code: IndexMap<String, f64> = IndexMap::new();

    for order in &qualifying {
        total_revenue += order.total_price;
        total_discount += order.total_discounts;

        if let Some(customer_id) = order.customer_id() {
            *customer_usage
                .entry(customer_id.as_str().to_owned())
                .or_default() += 1;
        }

        let mut codes = 0;
        for code in order.codes() {
            codes += 1;
            *usage_count.entry(code.to_owned()).or_default() += 1;
            *revenue_by_code.entry(code.to_owned()).or_default() += order.total_price;
        }
        if codes > 1 {
            multi_code_orders += 1;
        }
    }

    let coupon_usage = snapshot
        .coupons
        .iter()
        .map(|coupon| CouponUsage {
            code: coupon.code.clone(),
            usage_count: usage_count.get(&coupon.code).copied().unwrap_or_default(),
        })
        .collect();

    // Colours follow tally position, so a filtered-out code still consumes one.
    let revenue_shares = revenue_by_code
        .iter()
        .enumerate()
        .filter(|(_, (_, revenue))| **revenue > 0.0)
        .map(|(index, (code, revenue))| RevenueShare {
            code: code.clone(),
            revenue: *revenue,
            color: REVENUE_PALETTE[index % REVENUE_PALETTE.len()],
        })
        .collect();

    let mut dated_rows: Vec<(Option<DateTime<Utc>>, UsageDetail)> = qualifying
        .iter()
        .map(|order| {
            let created = order.created_at.as_deref().and_then(parse_timestamp);
            let row = UsageDetail {
                order_id: order.id.clone(),
                date: created
                    .map(|timestamp| locale.format_date(&timestamp))
                    .unwrap_or_default(),
                customer_name: order_customer_name(order, locale),
                coupon_code: first_code(order, locale),
                order_value: order.total_price,
            };
            (created, row)
        })
        .collect();
    // Stable: equal timestamps keep input order, undated rows go last.
    dated_rows.sort_by(|a, b| b.0.cmp(&a.0));
    let usage_details = dated_rows.into_iter().map(|(_, row)| row).collect();

    let directory = customer_directory(&snapshot.customers);
    let mut top_customers: Vec<TopCustomer> = customer_usage
        .iter()
        .map(|(customer_id, count)| TopCustomer {
            customer_id: RecordId::from(customer_id.as_str()),
            name: directory
                .get(customer_id.as_str())
                .and_then(|customer| {
                    display_name(customer.first_name.as_deref(), customer.last_name.as_deref())
                })
                .unwrap_or_else(|| locale.walk_in_label.clone()),
            usage_count: *count,
        })
        .collect();
    top_customers.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    top_customers.truncate(TOP_CUSTOMER_LIMIT);

    StatsBundle {
        total_revenue,
        total_discount,
        qualifying_orders: qualifying.len() as u64,
        multi_code_orders,
        coupon_usage,
        revenue_shares,
        usage_details,
        top_customers,
    }
}

pub fn coupon_overview(coupons: &[Coupon]) -> Vec<CouponView> {
    coupon_overview_at(Utc::now(), coupons)
}

pub fn coupon_overview_at(now: DateTime<Utc>, coupons: &[Coupon]) -> Vec<CouponView> {
    coupons
        .iter()
        .map(|coupon| CouponView {
            id: coupon.id.clone(),
            code: coupon.code.clone(),
            value: coupon.value,
            discount_type: coupon.discount_type.clone(),
            ends_at: coupon.ends_at.clone(),
            active: is_active_at(now, coupon.ends_at.as_deref()),
        })
        .collect()
}

pub fn build_dashboard(snapshot: &Snapshot, locale: &Locale, now: DateTime<Utc>) -> DashboardPayload {
    DashboardPayload {
        stats: build_stats_with(snapshot, locale),
        coupons: coupon_overview_at(now, &snapshot.coupons),
        customer_count: snapshot.customers.len(),
    }
}

pub fn is_qualifying(order: &Order) -> bool {
    order.financial_status == FinancialStatus::Paid && order.codes().next().is_some()
}

/// No expiry means active; an expiry that cannot be read counts as expired.
fn is_active_at(now: DateTime<Utc>, ends_at: Option<&str>) -> bool {
    match ends_at.map(str::trim) {
        None | Some("") => true,
        Some(raw) => parse_timestamp(raw).is_some_and(|ends| ends > now),
    }
}

fn order_customer_name(order: &Order, locale: &Locale) -> String {
    order
        .customer
        .as_ref()
        .and_then(|customer| {
            display_name(customer.first_name.as_deref(), customer.last_name.as_deref())
        })
        .unwrap_or_else(|| locale.walk_in_label.clone())
}

fn first_code(order: &Order, locale: &Locale) -> String {
    order
        .discount_codes
        .first()
        .and_then(Option::as_ref)
        .map(|entry| entry.code.as_str())
        .filter(|code| !code.is_empty())
        .unwrap_or(locale.missing_code_label.as_str())
        .to_owned()
}

fn display_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default());
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

fn customer_directory(customers: &[Customer]) -> HashMap<&str, &Customer> {
    let mut directory = HashMap::with_capacity(customers.len());
    for customer in customers {
        directory.entry(customer.id.as_str()).or_insert(customer);
    }
    directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiscountCodeRef, OrderCustomer};

    fn order(id: i64, status: &str, total: f64, codes: &[&str]) -> Order {
        Order {
            id: RecordId::from(id),
            total_price: total,
            total_discounts: 0.0,
            financial_status: FinancialStatus::from(status.to_owned()),
            created_at: None,
            discount_codes: codes
                .iter()
                .map(|code| {
                    Some(DiscountCodeRef {
                        code: (*code).to_owned(),
                    })
                })
                .collect(),
            customer: None,
        }
    }

    fn with_customer(mut order: Order, id: i64, first: &str, last: &str) -> Order {
        order.customer = Some(OrderCustomer {
            id: Some(RecordId::from(id)),
            first_name: Some(first.to_owned()),
            last_name: Some(last.to_owned()),
        });
        order
    }

    fn dated(mut order: Order, created_at: &str) -> Order {
        order.created_at = Some(created_at.to_owned());
        order
    }

    fn coupon(code: &str) -> Coupon {
        Coupon {
            code: code.to_owned(),
            ..Coupon::default()
        }
    }

    fn customer(id: i64, first: &str, last: &str) -> Customer {
        Customer {
            id: RecordId::from(id),
            first_name: Some(first.to_owned()),
            last_name: Some(last.to_owned()),
        }
    }

    #[test]
    fn paid_order_with_code_counts_and_unpaid_does_not() {
        let mut paid = order(1, "paid", 100_000.0, &["SALE10"]);
        paid.total_discounts = 10_000.0;
        let mut pending = order(2, "pending", 50_000.0, &["SALE10"]);
        pending.total_discounts = 5_000.0;
        let snapshot = Snapshot {
            coupons: vec![coupon("SALE10")],
            orders: vec![paid, pending],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        assert_eq!(stats.total_revenue, 100_000.0);
        assert_eq!(stats.total_discount, 10_000.0);
        assert_eq!(stats.qualifying_orders, 1);
        assert_eq!(stats.coupon_usage[0].usage_count, 1);
        assert_eq!(stats.usage_details.len(), 1);
        assert_eq!(stats.usage_details[0].order_id.as_str(), "1");
        assert_eq!(stats.revenue_shares.len(), 1);
        assert_eq!(stats.revenue_shares[0].revenue, 100_000.0);
    }

    #[test]
    fn orders_without_usable_codes_are_ignored() {
        let snapshot = Snapshot {
            coupons: vec![],
            orders: vec![
                order(1, "paid", 10.0, &[]),
                order(2, "paid", 20.0, &[""]),
                Order {
                    discount_codes: vec![None],
                    ..order(3, "paid", 30.0, &[])
                },
            ],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        assert_eq!(stats, StatsBundle::default());
    }

    #[test]
    fn usage_list_zero_fills_known_coupons() {
        let snapshot = Snapshot {
            coupons: vec![coupon("A"), coupon("B")],
            orders: vec![order(1, "paid", 500.0, &["A"])],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        assert_eq!(
            stats.coupon_usage,
            vec![
                CouponUsage {
                    code: "A".to_owned(),
                    usage_count: 1
                },
                CouponUsage {
                    code: "B".to_owned(),
                    usage_count: 0
                },
            ]
        );
        assert_eq!(stats.revenue_shares.len(), 1);
        assert_eq!(stats.revenue_shares[0].code, "A");
    }

    #[test]
    fn unknown_codes_tally_but_stay_out_of_usage_list() {
        let snapshot = Snapshot {
            coupons: vec![coupon("KNOWN")],
            orders: vec![order(1, "paid", 80.0, &["GHOST"])],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        assert_eq!(stats.coupon_usage.len(), 1);
        assert_eq!(stats.coupon_usage[0].usage_count, 0);
        assert_eq!(stats.revenue_shares[0].code, "GHOST");
        assert_eq!(stats.total_revenue, 80.0);
    }

    #[test]
    fn revenue_shares_skip_zero_revenue_and_keep_palette_position() {
        let snapshot = Snapshot {
            coupons: vec![],
            orders: vec![
                order(1, "paid", 0.0, &["FREE"]),
                order(2, "paid", 10.0, &["B"]),
                order(3, "paid", 20.0, &["C"]),
            ],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        let shares: Vec<(&str, &str)> = stats
            .revenue_shares
            .iter()
            .map(|share| (share.code.as_str(), share.color))
            .collect();
        assert_eq!(shares, vec![("B", REVENUE_PALETTE[1]), ("C", REVENUE_PALETTE[2])]);
        assert!(stats.revenue_shares.iter().all(|share| share.revenue > 0.0));
    }

    #[test]
    fn palette_wraps_after_five_codes() {
        let codes = ["C1", "C2", "C3", "C4", "C5", "C6"];
        let orders = codes
            .iter()
            .enumerate()
            .map(|(index, code)| order(index as i64, "paid", 1.0, &[*code]))
            .collect();
        let stats = build_stats(&Snapshot {
            orders,
            ..Snapshot::default()
        });

        assert_eq!(stats.revenue_shares.len(), 6);
        assert_eq!(stats.revenue_shares[5].color, REVENUE_PALETTE[0]);
    }

    #[test]
    fn single_code_revenue_sums_to_total() {
        let snapshot = Snapshot {
            coupons: vec![],
            orders: vec![
                order(1, "paid", 120.0, &["A"]),
                order(2, "paid", 30.0, &["B"]),
                order(3, "paid", 50.0, &["A"]),
            ],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        let attributed: f64 = stats.revenue_shares.iter().map(|share| share.revenue).sum();
        assert_eq!(attributed, stats.total_revenue);
        assert_eq!(stats.multi_code_orders, 0);
    }

    #[test]
    fn multi_code_orders_are_attributed_to_every_code() {
        let snapshot = Snapshot {
            coupons: vec![coupon("A"), coupon("B")],
            orders: vec![order(1, "paid", 100.0, &["A", "B"])],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        assert_eq!(stats.multi_code_orders, 1);
        assert_eq!(stats.total_revenue, 100.0);
        assert_eq!(stats.coupon_usage[0].usage_count, 1);
        assert_eq!(stats.coupon_usage[1].usage_count, 1);
        let attributed: f64 = stats.revenue_shares.iter().map(|share| share.revenue).sum();
        assert_eq!(attributed, 200.0);
        assert_eq!(stats.usage_details[0].coupon_code, "A");
    }

    #[test]
    fn usage_details_sort_newest_first_and_keep_ties_stable() {
        let snapshot = Snapshot {
            coupons: vec![],
            orders: vec![
                dated(order(1, "paid", 1.0, &["A"]), "2026-01-03T10:00:00Z"),
                order(2, "paid", 1.0, &["A"]),
                dated(order(3, "paid", 1.0, &["A"]), "2026-01-05T08:00:00Z"),
                dated(order(4, "paid", 1.0, &["A"]), "2026-01-03T10:00:00Z"),
                dated(order(5, "paid", 1.0, &["A"]), "2026-01-05T09:00:00Z"),
            ],
            customers: vec![],
        };

        let stats = build_stats(&snapshot);
        let ids: Vec<&str> = stats
            .usage_details
            .iter()
            .map(|row| row.order_id.as_str())
            .collect();
        assert_eq!(ids, vec!["5", "3", "1", "4", "2"]);
        assert_eq!(stats.usage_details[0].date, "5/1/2026");
        assert_eq!(stats.usage_details[4].date, "");
    }

    #[test]
    fn usage_detail_names_fall_back_to_walk_in_label() {
        let locale = Locale::vietnamese();
        let snapshot = Snapshot {
            coupons: vec![],
            orders: vec![
                with_customer(order(1, "paid", 1.0, &["A"]), 9, " Lan", "Nguyen "),
                order(2, "paid", 1.0, &["A"]),
                with_customer(order(3, "paid", 1.0, &["A"]), 8, "", ""),
            ],
            customers: vec![],
        };

        let stats = build_stats_with(&snapshot, &locale);
        let names: Vec<&str> = stats
            .usage_details
            .iter()
            .map(|row| row.customer_name.as_str())
            .collect();
        assert_eq!(names[0], "Lan Nguyen");
        assert_eq!(names[1], locale.walk_in_label);
        assert_eq!(names[2], locale.walk_in_label);
    }

    #[test]
    fn first_code_uses_first_entry_only() {
        let locale = Locale::vietnamese();
        let snapshot = Snapshot {
            coupons: vec![],
            orders: vec![order(1, "paid", 1.0, &["", "LATE"])],
            customers: vec![],
        };

        let stats = build_stats_with(&snapshot, &locale);
        assert_eq!(stats.usage_details[0].coupon_code, locale.missing_code_label);
        assert_eq!(stats.revenue_shares[0].code, "LATE");
    }

    #[test]
    fn top_customers_sorted_truncated_and_resolved() {
        let mut orders = Vec::new();
        let mut next_id = 0;
        // customer ids 1..=7 place 1..=7 orders, except 4 and 5 tie at 4
        for (customer_id, count) in [(1, 1), (2, 2), (3, 3), (4, 4), (5, 4), (6, 6), (7, 7)] {
            for _ in 0..count {
                next_id += 1;
                orders.push(with_customer(
                    order(next_id, "paid", 1.0, &["A"]),
                    customer_id,
                    "",
                    "",
                ));
            }
        }
        let snapshot = Snapshot {
            coupons: vec![],
            orders,
            customers: vec![customer(7, "Minh", "Tran"), customer(4, "Hoa", "")],
        };

        let stats = build_stats(&snapshot);
        let ranking: Vec<(&str, u64)> = stats
            .top_customers
            .iter()
            .map(|entry| (entry.customer_id.as_str(), entry.usage_count))
            .collect();
        assert_eq!(
            ranking,
            vec![("7", 7), ("6", 6), ("4", 4), ("5", 4), ("3", 3)]
        );
        assert_eq!(stats.top_customers[0].name, "Minh Tran");
        assert_eq!(stats.top_customers[2].name, "Hoa");
        assert_eq!(stats.top_customers[1].name, Locale::default().walk_in_label);
        assert!(
            stats
                .top_customers
                .windows(2)
                .all(|pair| pair[0].usage_count >= pair[1].usage_count)
        );
    }

    #[test]
    fn top_customers_match_numeric_and_text_ids() {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "coupons": [],
            "orders": [
                { "id": 1, "financial_status": "paid", "total_price": 10,
                  "discount_codes": [{ "code": "A" }], "customer": { "id": 2 } },
                { "id": 2, "financial_status": "paid", "total_price": 10,
                  "discount_codes": [{ "code": "A" }], "customer": { "id": "2" } },
                { "id": 3, "financial_status": "paid", "total_price": 10,
                  "discount_codes": [{ "code": "A" }], "customer": { "id": "31" } }
            ],
            "customers": [
                { "id": "2", "first_name": "Minh", "last_name": "Tran" },
                { "id": 31, "first_name": "Thu", "last_name": "Pham" }
            ]
        }))
        .unwrap();

        let stats = build_stats(&snapshot);
        let ranking: Vec<(&str, &str, u64)> = stats
            .top_customers
            .iter()
            .map(|entry| (entry.customer_id.as_str(), entry.name.as_str(), entry.usage_count))
            .collect();
        assert_eq!(ranking, vec![("2", "Minh Tran", 2), ("31", "Thu Pham", 1)]);
    }

    #[test]
    fn empty_snapshot_yields_empty_bundle() {
        let stats = build_stats(&Snapshot::default());
        assert_eq!(stats, StatsBundle::default());
    }

    #[test]
    fn coupon_overview_flags_expiry() {
        let now = parse_timestamp("2026-01-05T00:00:00Z").unwrap();
        let coupons = vec![
            Coupon {
                ends_at: None,
                ..coupon("OPEN")
            },
            Coupon {
                ends_at: Some("2026-02-01T00:00:00Z".to_owned()),
                ..coupon("LATER")
            },
            Coupon {
                ends_at: Some("2026-01-05T00:00:00Z".to_owned()),
                ..coupon("NOW")
            },
            Coupon {
                ends_at: Some("soon".to_owned()),
                ..coupon("BROKEN")
            },
        ];

        let views = coupon_overview_at(now, &coupons);
        let flags: Vec<(&str, bool)> = views
            .iter()
            .map(|view| (view.code.as_str(), view.active))
            .collect();
        assert_eq!(
            flags,
            vec![("OPEN", true), ("LATER", true), ("NOW", false), ("BROKEN", false)]
        );
    }

    #[test]
    fn dashboard_payload_counts_customers() {
        let snapshot = Snapshot {
            coupons: vec![coupon("A")],
            orders: vec![],
            customers: vec![customer(1, "An", "Le"), customer(2, "Binh", "Vo")],
        };
        let now = parse_timestamp("2026-01-05T00:00:00Z").unwrap();

        let payload = build_dashboard(&snapshot, &Locale::default(), now);
        assert_eq!(payload.customer_count, 2);
        assert_eq!(payload.coupons.len(), 1);
        assert_eq!(payload.stats.coupon_usage.len(), 1);
    }
}
