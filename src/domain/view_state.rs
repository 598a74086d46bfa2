// src/domain/view_state.rs

use crate::domain::group::{group_of, GroupId};
use crate::domain::registry::KnownStatus;
use crate::domain::shipment::Shipment;
use std::collections::BTreeSet;

/// Toggle selection: picking the current group again clears it.
pub fn select_group(current: Option<GroupId>, requested: GroupId) -> Option<GroupId> {
    if current == Some(requested) {
        None
    } else {
        Some(requested)
    }
}

/// Narrows a lookup to one group. `DA_HUY` matches the exact raw status
/// only; every other group matches on classification.
pub fn filter_shipments(shipments: &[Shipment], selected: Option<GroupId>) -> Vec<&Shipment> {
    match selected {
        None => shipments.iter().collect(),
        Some(GroupId::DaHuy) => shipments
            .iter()
            .filter(|s| s.status == KnownStatus::DaHuy.code())
            .collect(),
        Some(group) => shipments
            .iter()
            .filter(|s| group_of(&s.status) == group)
            .collect(),
    }
}

/// Returns a new set with `code` added if absent, removed if present.
pub fn toggle_expanded(expanded: &BTreeSet<String>, code: &str) -> BTreeSet<String> {
    let mut next = expanded.clone();
    if !next.remove(code) {
        next.insert(code.to_string());
    }
    next
}

/// Per-lookup UI state: which group is selected and which orders show their
/// products.
///
/// A fresh lookup always starts from `ViewState::default()`; nothing carries
/// over from the previous phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_group: Option<GroupId>,
    pub expanded: BTreeSet<String>,
}

impl ViewState {
    pub fn with_group(&self, requested: GroupId) -> Self {
        Self {
            selected_group: select_group(self.selected_group, requested),
            expanded: self.expanded.clone(),
        }
    }

    pub fn with_toggled(&self, order_code: &str) -> Self {
        Self {
            selected_group: self.selected_group,
            expanded: toggle_expanded(&self.expanded, order_code),
        }
    }

    pub fn is_expanded(&self, order_code: &str) -> bool {
        self.expanded.contains(order_code)
    }

    /// Reads `group` and repeated `expanded` pairs. Unrecognised groups are
    /// dropped rather than rejected.
    pub fn from_pairs<'p, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'p str, &'p str)>,
    {
        let mut state = ViewState::default();
        for (key, value) in pairs {
            match key {
                "group" => state.selected_group = GroupId::parse(value),
                "expanded" if !value.is_empty() => {
                    state.expanded.insert(value.to_string());
                }
                _ => {}
            }
        }
        state
    }

    /// Query string for the lookup page, `phone` first.
    pub fn to_query(&self, phone: &str) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        ser.append_pair("phone", phone);
        if let Some(group) = self.selected_group {
            ser.append_pair("group", group.as_str());
        }
        for code in &self.expanded {
            ser.append_pair("expanded", code);
        }
        ser.finish()
    }
}
