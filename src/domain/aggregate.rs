// src/domain/aggregate.rs

use crate::domain::group::{GroupId, COUNTED_GROUPS, GROUP_ORDER};
use crate::domain::registry::describe;
use crate::domain::shipment::Shipment;
use std::collections::BTreeMap;

/// Shipments sharing one exact raw status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBucket<'a> {
    pub status: &'a str,
    pub shipments: Vec<&'a Shipment>,
}

impl StatusBucket<'_> {
    pub fn label(&self) -> &str {
        describe(self.status).label
    }

    pub fn pipeline_rank(&self) -> u32 {
        describe(self.status).pipeline_rank
    }
}

/// Everything the lookup page needs, derived from one shipment list.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateView<'a> {
    /// All counted groups, zero included. `UNKNOWN` is never a key.
    pub counts_by_group: BTreeMap<GroupId, usize>,
    /// `GROUP_ORDER` restricted to groups with at least one shipment.
    pub active_groups: Vec<GroupId>,
    /// Most advanced raw status first.
    pub buckets_by_raw_status: Vec<StatusBucket<'a>>,
}

impl AggregateView<'_> {
    pub fn count(&self, group: GroupId) -> usize {
        self.counts_by_group.get(&group).copied().unwrap_or(0)
    }

    /// Shipments that landed in some counted group. May be less than the
    /// number of shipments when unknown statuses are present.
    pub fn counted_total(&self) -> usize {
        self.counts_by_group.values().sum()
    }
}

pub fn aggregate(shipments: &[Shipment]) -> AggregateView<'_> {
    let counts_by_group = count_by_group(shipments);

    let active_groups = GROUP_ORDER
        .into_iter()
        .filter(|g| counts_by_group.get(g).copied().unwrap_or(0) > 0)
        .collect();

    AggregateView {
        counts_by_group,
        active_groups,
        buckets_by_raw_status: bucket_by_raw_status(shipments),
    }
}

pub fn count_by_group(shipments: &[Shipment]) -> BTreeMap<GroupId, usize> {
    let mut counts: BTreeMap<GroupId, usize> = COUNTED_GROUPS.into_iter().map(|g| (g, 0)).collect();

    for shipment in shipments {
        // Unknown statuses have no entry and are simply skipped.
        if let Some(n) = counts.get_mut(&shipment.group()) {
            *n += 1;
        }
    }

    counts
}

/// Partitions by exact raw status, buckets in first-seen order, then stably
/// sorted by descending pipeline rank so equal ranks keep that order.
pub fn bucket_by_raw_status<'a, I>(shipments: I) -> Vec<StatusBucket<'a>>
where
    I: IntoIterator<Item = &'a Shipment>,
{
    let mut buckets: Vec<StatusBucket<'a>> = Vec::new();

    for shipment in shipments {
        match buckets.iter().position(|b| b.status == shipment.status) {
            Some(i) => buckets[i].shipments.push(shipment),
            None => buckets.push(StatusBucket {
                status: &shipment.status,
                shipments: vec![shipment],
            }),
        }
    }

    buckets.sort_by_key(|b| std::cmp::Reverse(b.pipeline_rank()));
    buckets
}
