// src/domain/group.rs

use crate::domain::registry::{describe, KnownStatus};
use std::fmt;

/// Display buckets used by the timeline. Several raw statuses may share one
/// group; see `DaMuaGroup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupId {
    ChoMua,
    /// Both `DA_MUA` and `DAU_GIA_THANH_CONG`.
    DaMuaGroup,
    DaNhapKhoNn,
    DangChuyenVn,
    DaNhapKhoVn,
    DangGiao,
    DaGiao,
    DaHuy,
    Unknown,
}

/// Fixed timeline order. Never re-sorted by counts.
pub const GROUP_ORDER: [GroupId; 7] = [
    GroupId::ChoMua,
    GroupId::DaMuaGroup,
    GroupId::DaNhapKhoNn,
    GroupId::DangChuyenVn,
    GroupId::DaNhapKhoVn,
    GroupId::DangGiao,
    GroupId::DaGiao,
];

/// Every group that carries a count: the pipeline groups plus cancelled.
pub const COUNTED_GROUPS: [GroupId; 8] = [
    GroupId::ChoMua,
    GroupId::DaMuaGroup,
    GroupId::DaNhapKhoNn,
    GroupId::DangChuyenVn,
    GroupId::DaNhapKhoVn,
    GroupId::DangGiao,
    GroupId::DaGiao,
    GroupId::DaHuy,
];

impl GroupId {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::ChoMua => "CHO_MUA",
            GroupId::DaMuaGroup => "DA_MUA_GROUP",
            GroupId::DaNhapKhoNn => "DA_NHAP_KHO_NN",
            GroupId::DangChuyenVn => "DANG_CHUYEN_VN",
            GroupId::DaNhapKhoVn => "DA_NHAP_KHO_VN",
            GroupId::DangGiao => "DANG_GIAO",
            GroupId::DaGiao => "DA_GIAO",
            GroupId::DaHuy => "DA_HUY",
            GroupId::Unknown => "UNKNOWN",
        }
    }

    /// Parses a group id coming back from a link. Only counted groups are
    /// selectable, so `UNKNOWN` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        COUNTED_GROUPS.into_iter().find(|g| g.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupId::ChoMua => "Chờ mua",
            GroupId::DaMuaGroup => "Đã mua",
            GroupId::DaNhapKhoNn => "Kho nước ngoài",
            GroupId::DangChuyenVn => "Đang về Việt Nam",
            GroupId::DaNhapKhoVn => "Kho Việt Nam",
            GroupId::DangGiao => "Đang giao",
            GroupId::DaGiao => "Đã giao",
            GroupId::DaHuy => "Đã hủy",
            GroupId::Unknown => "Không xác định",
        }
    }

    #[cfg(test)]
    pub fn is_pipeline(&self) -> bool {
        GROUP_ORDER.contains(self)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a raw status into its display group.
///
/// Cancelled shipments always land in `DaHuy` and never in a pipeline
/// group, so callers that walk `GROUP_ORDER` must handle them separately.
pub fn group_of(status: &str) -> GroupId {
    if KnownStatus::parse(status) == Some(KnownStatus::DaHuy) {
        return GroupId::DaHuy;
    }
    describe(status).group_id
}
