use glam::Vec3;

use super::state::CameraState;
use super::store::CameraRecord;
use crate::options::CameraOptions;

/// An ordered set of independent camera slots with exactly one active.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraStack {
    cameras: Vec<CameraState>,
    active: usize,
}

impl CameraStack {
    /// `options.count` slots (at least one) with index-dependent defaults.
    /// Slot 0 is active.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let cameras = (0..options.count.max(1))
            .map(|i| CameraState::for_slot(i, options))
            .collect();
        Self { cameras, active: 0 }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Always `false`: a stack holds at least one slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Index of the active slot.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active camera.
    #[must_use]
    pub fn active(&self) -> &CameraState {
        &self.cameras[self.active]
    }

    /// Mutable access to the active camera.
    pub fn active_mut(&mut self) -> &mut CameraState {
        &mut self.cameras[self.active]
    }

    /// Camera in slot `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CameraState> {
        self.cameras.get(index)
    }

    /// All slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &CameraState> {
        self.cameras.iter()
    }

    /// Activate the next slot, wrapping around. Returns the new index.
    pub fn cycle(&mut self) -> usize {
        self.active = (self.active + 1) % self.cameras.len();
        self.active
    }

    /// Activate slot `index`. Returns `false` if out of range.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.cameras.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Snapshot of the persisted fields of every slot.
    #[must_use]
    pub fn record(&self) -> CameraRecord {
        CameraRecord {
            ps: self.cameras.iter().map(|c| c.pitch).collect(),
            rs: self.cameras.iter().map(|c| c.roll).collect(),
            ys: self.cameras.iter().map(|c| c.yaw).collect(),
            ds: self.cameras.iter().map(|c| c.distance).collect(),
            fs: self.cameras.iter().map(|c| c.fovy).collect(),
            ts: self.cameras.iter().map(|c| c.translation.to_array()).collect(),
        }
    }

    /// Replace every slot from a validated record. The slot count becomes
    /// the record's. Auto-rotation settings are not persisted: existing
    /// slots keep theirs and new slots take the defaults from `options`.
    /// Distances are clamped to the scene limit. The active index falls
    /// back to 0 if it no longer exists.
    pub fn apply_record(&mut self, record: &CameraRecord, options: &CameraOptions) {
        let limit = options.scene_user_limit();
        let cameras = (0..record.len())
            .map(|i| {
                let mut camera = self
                    .cameras
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| CameraState::for_slot(i, options));
                camera.pitch = record.ps[i];
                camera.roll = record.rs[i];
                camera.yaw = record.ys[i];
                camera.distance = record.ds[i].min(limit);
                camera.fovy = record.fs[i];
                camera.translation = Vec3::from_array(record.ts[i]);
                camera
            })
            .collect();
        self.cameras = cameras;
        if self.active >= self.cameras.len() {
            self.active = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn starts_with_requested_count() {
        let stack = CameraStack::new(&CameraOptions::default());
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.active_index(), 0);
    }

    #[test]
    fn zero_count_still_has_one_slot() {
        let opts = CameraOptions {
            count: 0,
            ..CameraOptions::default()
        };
        let stack = CameraStack::new(&opts);
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_empty());
    }

    #[test]
    fn cycling_n_times_returns_to_start() {
        let mut stack = CameraStack::new(&CameraOptions::default());
        assert!(stack.set_active(1));
        for _ in 0..stack.len() {
            let _ = stack.cycle();
        }
        assert_eq!(stack.active_index(), 1);
        assert_eq!(stack.cycle(), 2);
        assert_eq!(stack.cycle(), 0);
    }

    #[test]
    fn set_active_rejects_out_of_range() {
        let mut stack = CameraStack::new(&CameraOptions::default());
        assert!(!stack.set_active(3));
        assert_eq!(stack.active_index(), 0);
    }

    #[test]
    fn mutating_active_leaves_others_alone() {
        let mut stack = CameraStack::new(&CameraOptions::default());
        let before: Vec<_> = stack.iter().cloned().collect();
        stack.active_mut().orbit(Vec2::new(1.0, 0.5));
        stack.active_mut().translation = Vec3::ONE;
        assert_ne!(stack.get(0), Some(&before[0]));
        assert_eq!(stack.get(1), Some(&before[1]));
        assert_eq!(stack.get(2), Some(&before[2]));
    }

    #[test]
    fn record_round_trips() {
        let opts = CameraOptions::default();
        let mut stack = CameraStack::new(&opts);
        stack.active_mut().translation = Vec3::new(1.0, 2.0, 3.0);
        stack.active_mut().roll = 0.25;
        let record = stack.record();

        let mut restored = CameraStack::new(&opts);
        restored.apply_record(&record, &opts);
        assert_eq!(restored, stack);
    }

    #[test]
    fn record_sets_slot_count() {
        let opts = CameraOptions::default();
        let mut stack = CameraStack::new(&opts);
        assert!(stack.set_active(2));
        let mut record = stack.record();
        record.ps.truncate(1);
        record.rs.truncate(1);
        record.ys.truncate(1);
        record.ds.truncate(1);
        record.fs.truncate(1);
        record.ts.truncate(1);

        stack.apply_record(&record, &opts);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.active_index(), 0);
    }

    #[test]
    fn loaded_distance_is_clamped_to_scene_limit() {
        let opts = CameraOptions::default();
        let mut stack = CameraStack::new(&opts);
        let mut record = stack.record();
        record.ds[1] = 1e9;
        stack.apply_record(&record, &opts);
        assert_eq!(
            stack.get(1).map(|c| c.distance),
            Some(opts.scene_user_limit())
        );
        assert_eq!(stack.get(0).map(|c| c.distance), Some(record.ds[0]));
    }

    #[test]
    fn growing_keeps_existing_rotation_settings() {
        let opts = CameraOptions::default();
        let mut stack = CameraStack::new(&opts);
        let _ = stack.active_mut().toggle_auto_rotate();

        let mut wide = CameraStack::new(&CameraOptions {
            count: 5,
            ..opts.clone()
        });
        wide.active_mut().distance = 77.0;
        stack.apply_record(&wide.record(), &opts);

        assert_eq!(stack.len(), 5);
        assert!(stack.active().auto_rotate);
        assert_eq!(stack.active().distance, 77.0);
        assert_eq!(stack.get(4), wide.get(4));
    }
}
