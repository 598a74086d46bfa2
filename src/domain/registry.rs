// src/domain/registry.rs

use crate::domain::group::GroupId;

/// The nine status codes the order system is known to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownStatus {
    ChoMua,
    DaMua,
    DauGiaThanhCong,
    DaNhapKhoNn,
    DangChuyenVn,
    DaNhapKhoVn,
    DangGiao,
    DaGiao,
    DaHuy,
}

/// Logistics progression, earliest first. `DaHuy` is deliberately absent.
pub const PIPELINE: [KnownStatus; 8] = [
    KnownStatus::ChoMua,
    KnownStatus::DaMua,
    KnownStatus::DauGiaThanhCong,
    KnownStatus::DaNhapKhoNn,
    KnownStatus::DangChuyenVn,
    KnownStatus::DaNhapKhoVn,
    KnownStatus::DangGiao,
    KnownStatus::DaGiao,
];

impl KnownStatus {
    #[cfg(test)]
    pub const ALL: [KnownStatus; 9] = [
        KnownStatus::ChoMua,
        KnownStatus::DaMua,
        KnownStatus::DauGiaThanhCong,
        KnownStatus::DaNhapKhoNn,
        KnownStatus::DangChuyenVn,
        KnownStatus::DaNhapKhoVn,
        KnownStatus::DangGiao,
        KnownStatus::DaGiao,
        KnownStatus::DaHuy,
    ];

    /// Exact, case-sensitive match on the wire code.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "CHO_MUA" => Some(KnownStatus::ChoMua),
            "DA_MUA" => Some(KnownStatus::DaMua),
            "DAU_GIA_THANH_CONG" => Some(KnownStatus::DauGiaThanhCong),
            "DA_NHAP_KHO_NN" => Some(KnownStatus::DaNhapKhoNn),
            "DANG_CHUYEN_VN" => Some(KnownStatus::DangChuyenVn),
            "DA_NHAP_KHO_VN" => Some(KnownStatus::DaNhapKhoVn),
            "DANG_GIAO" => Some(KnownStatus::DangGiao),
            "DA_GIAO" => Some(KnownStatus::DaGiao),
            "DA_HUY" => Some(KnownStatus::DaHuy),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            KnownStatus::ChoMua => "CHO_MUA",
            KnownStatus::DaMua => "DA_MUA",
            KnownStatus::DauGiaThanhCong => "DAU_GIA_THANH_CONG",
            KnownStatus::DaNhapKhoNn => "DA_NHAP_KHO_NN",
            KnownStatus::DangChuyenVn => "DANG_CHUYEN_VN",
            KnownStatus::DaNhapKhoVn => "DA_NHAP_KHO_VN",
            KnownStatus::DangGiao => "DANG_GIAO",
            KnownStatus::DaGiao => "DA_GIAO",
            KnownStatus::DaHuy => "DA_HUY",
        }
    }

    /// Zero-based position in `PIPELINE`, `None` for `DaHuy`.
    pub fn pipeline_index(&self) -> Option<usize> {
        PIPELINE.iter().position(|s| s == self)
    }

    fn descriptor(&self) -> StatusDescriptor<'static> {
        // (label, rank, group)
        let (label, pipeline_rank, group_id) = match self {
            KnownStatus::ChoMua => ("Chờ mua", 0, GroupId::ChoMua),
            KnownStatus::DaMua => ("Đã mua", 1, GroupId::DaMuaGroup),
            KnownStatus::DauGiaThanhCong => ("Đấu giá thành công", 2, GroupId::DaMuaGroup),
            KnownStatus::DaNhapKhoNn => ("Đã nhập kho nước ngoài", 3, GroupId::DaNhapKhoNn),
            KnownStatus::DangChuyenVn => ("Đang chuyển về Việt Nam", 4, GroupId::DangChuyenVn),
            KnownStatus::DaNhapKhoVn => ("Đã nhập kho Việt Nam", 5, GroupId::DaNhapKhoVn),
            KnownStatus::DangGiao => ("Đang giao hàng", 6, GroupId::DangGiao),
            KnownStatus::DaGiao => ("Đã giao hàng", 7, GroupId::DaGiao),
            KnownStatus::DaHuy => ("Đã hủy", 0, GroupId::DaHuy),
        };

        StatusDescriptor {
            label,
            pipeline_rank,
            group_id,
        }
    }
}

/// Display metadata for a raw status code.
///
/// Borrowed from the static table for known codes, and from the caller's
/// string for unknown ones (whose label is the raw code itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor<'a> {
    pub label: &'a str,
    pub pipeline_rank: u32,
    pub group_id: GroupId,
}

impl<'a> StatusDescriptor<'a> {
    fn fallback(raw: &'a str) -> Self {
        StatusDescriptor {
            label: raw,
            pipeline_rank: 0,
            group_id: GroupId::Unknown,
        }
    }
}

/// Looks up the descriptor for any raw status. Never fails: codes outside
/// the table get rank 0, group `UNKNOWN` and their own code as label.
pub fn describe(status: &str) -> StatusDescriptor<'_> {
    match KnownStatus::parse(status) {
        Some(known) => known.descriptor(),
        None => StatusDescriptor::fallback(status),
    }
}
