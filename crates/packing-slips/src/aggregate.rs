//! Grouping of order lines into shippable orders

use crate::options::SortKey;
use crate::types::{LineItem, OrderGroup};
use std::collections::HashMap;

/// Group line items into orders that are ready to ship.
///
/// Lines whose status differs from `ready_status` are dropped. Groups keep
/// the order in which their id first appears, items keep input order, and
/// the final sort is stable on the key read from each group's first line.
pub fn aggregate_orders(
    items: impl IntoIterator<Item = LineItem>,
    ready_status: &str,
    sort_key: SortKey,
) -> Vec<OrderGroup> {
    let mut groups: Vec<OrderGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for item in items {
        if item.status != ready_status {
            skipped += 1;
            continue;
        }
        match index.get(&item.order_id) {
            Some(&slot) => groups[slot].push(item),
            None => {
                index.insert(item.order_id.clone(), groups.len());
                groups.push(OrderGroup::new(item));
            }
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {} lines not in status {:?}", skipped, ready_status);
    }

    sort_groups(&mut groups, sort_key);
    groups
}

/// Stable sort on the configured field of each group's first line
pub fn sort_groups(groups: &mut [OrderGroup], sort_key: SortKey) {
    groups.sort_by(|a, b| {
        let ordering = a
            .head()
            .sort_value(sort_key.field)
            .cmp(b.head().sort_value(sort_key.field));
        sort_key.order.apply(ordering)
    });
}
