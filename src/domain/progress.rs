//! Progress of a shipment along an ordered stage sequence.

use super::shipment::ShipmentStatus;

/// Where a shipment sits within a stage sequence.
///
/// The percent badge, the bar width and the per-stage markers are all read
/// from one `Progress` so they cannot disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based position of the current status, `None` when the status is
    /// not part of the sequence (Pending, Delayed).
    pub stage_index: Option<usize>,
    /// Completion in whole percent, 0 when `stage_index` is `None`.
    pub percent: u8,
    /// `reached[i]` is true when stage `i` is at or before the current one.
    pub reached: Vec<bool>,
}

impl Progress {
    /// Stage index with `-1` standing in for "not in sequence".
    pub fn stage_index_signed(&self) -> i64 {
        self.stage_index.map(|idx| idx as i64).unwrap_or(-1)
    }

    pub fn reached_count(&self) -> usize {
        self.reached.iter().filter(|reached| **reached).count()
    }

    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }
}

pub fn derive_progress(current: ShipmentStatus, stages: &[ShipmentStatus]) -> Progress {
    let stage_index = stages.iter().position(|stage| *stage == current);

    let percent = match (stage_index, stages.len()) {
        (None, _) | (_, 0) => 0,
        (Some(_), 1) => 100,
        (Some(idx), len) => {
            let ratio = idx as f64 / (len - 1) as f64;
            (ratio * 100.0).round().clamp(0.0, 100.0) as u8
        }
    };

    let reached = (0..stages.len())
        .map(|idx| stage_index.is_some_and(|current| idx <= current))
        .collect();

    Progress {
        stage_index,
        percent,
        reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shipment::CANONICAL_STAGES;

    #[test]
    fn canonical_stages_report_their_position() {
        for (position, status) in CANONICAL_STAGES.iter().enumerate() {
            let progress = derive_progress(*status, &CANONICAL_STAGES);
            assert_eq!(progress.stage_index, Some(position));
            assert_eq!(progress.reached_count(), position + 1);
            assert!(progress.reached[..=position].iter().all(|r| *r));
            assert!(progress.reached[position + 1..].iter().all(|r| !*r));
        }
    }

    #[test]
    fn percent_spans_first_to_last_stage() {
        let percents: Vec<u8> = CANONICAL_STAGES
            .iter()
            .map(|status| derive_progress(*status, &CANONICAL_STAGES).percent)
            .collect();
        assert_eq!(percents, vec![0, 25, 50, 75, 100]);
        assert!(derive_progress(ShipmentStatus::Delivered, &CANONICAL_STAGES).is_complete());
    }

    #[test]
    fn exception_states_clamp_to_zero() {
        for status in [ShipmentStatus::Pending, ShipmentStatus::Delayed] {
            let progress = derive_progress(status, &CANONICAL_STAGES);
            assert_eq!(progress.stage_index, None);
            assert_eq!(progress.stage_index_signed(), -1);
            assert_eq!(progress.percent, 0);
            assert_eq!(progress.reached, vec![false; CANONICAL_STAGES.len()]);
        }
    }

    #[test]
    fn percent_rounds_to_nearest_integer() {
        let stages = [
            ShipmentStatus::OrderReceived,
            ShipmentStatus::InTransit,
            ShipmentStatus::CustomsClearance,
            ShipmentStatus::Delivered,
        ];
        assert_eq!(derive_progress(ShipmentStatus::InTransit, &stages).percent, 33);
        assert_eq!(
            derive_progress(ShipmentStatus::CustomsClearance, &stages).percent,
            67
        );
    }

    #[test]
    fn degenerate_sequences_do_not_divide_by_zero() {
        let empty = derive_progress(ShipmentStatus::InTransit, &[]);
        assert_eq!(empty.stage_index, None);
        assert_eq!(empty.percent, 0);
        assert!(empty.reached.is_empty());

        let single = derive_progress(ShipmentStatus::Delivered, &[ShipmentStatus::Delivered]);
        assert_eq!(single.stage_index, Some(0));
        assert_eq!(single.percent, 100);
        assert_eq!(single.reached, vec![true]);
    }
}
