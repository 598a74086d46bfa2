// src/domain/progress.rs

use crate::domain::registry::{KnownStatus, PIPELINE};

/// Completion percentage (0..=100) of a raw status.
///
/// Computed from the raw status' own pipeline position, not from its display
/// group, so `DA_MUA` (25) and `DAU_GIA_THANH_CONG` (38) differ even though
/// they are shown as one group.
pub fn percent(status: &str) -> u8 {
    match KnownStatus::parse(status) {
        Some(KnownStatus::DaHuy) | None => 0,
        Some(KnownStatus::DaGiao) => 100,
        Some(known) => match known.pipeline_index() {
            Some(index) => round_half_up_percent(index + 1, PIPELINE.len()),
            None => 0,
        },
    }
}

// round(step / total * 100), halves rounded up.
fn round_half_up_percent(step: usize, total: usize) -> u8 {
    let scaled = (step * 200 + total) / (total * 2);
    scaled.min(100) as u8
}
