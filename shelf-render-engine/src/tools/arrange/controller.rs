use bevy::math::primitives::InfinitePlane3d;
use bevy::prelude::*;

use crate::engine::overrides::{DragTarget, OverrideStore};

/// One pointer event, already converted to a world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pointer_id: u64,
    pub ray: Ray3d,
}

impl PointerSample {
    pub fn new(pointer_id: u64, ray: Ray3d) -> Self {
        Self { pointer_id, ray }
    }
}

/// Where a finished drag should be written.
pub trait PositionSink {
    fn commit(&mut self, target: &DragTarget, position: Vec3);
}

impl PositionSink for OverrideStore {
    fn commit(&mut self, target: &DragTarget, position: Vec3) {
        self.set(target.kind, &target.id, position);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    /// Pointer that owns the capture.
    pub pointer_id: u64,
    /// Plane hit under the pointer at grab time.
    pub start_pointer: Vec3,
    /// Point the drag plane passes through; its z is the held depth.
    pub plane_origin: Vec3,
    pub plane: InfinitePlane3d,
    pub live_position: Vec3,
}

impl DragSession {
    fn project(&self, ray: Ray3d) -> Option<Vec3> {
        let distance = ray.intersect_plane(self.plane_origin, self.plane)?;
        Some(ray.get_point(distance))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Result of a committed drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragCommit {
    pub target: DragTarget,
    pub position: Vec3,
}

/// Pointer-driven drag state machine.
///
/// `Idle --down--> Dragging --move*--> Dragging --up|leave|cancel--> Idle`,
/// committing the live position exactly once on the way out. Events from any
/// pointer other than the capturing one are ignored, as is a second `down`.
/// Losing the target drops the session without a commit.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DragController {
    state: DragState,
    floor_bound: f32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(constants::interaction::DRAG_FLOOR_BOUND)
    }
}

impl DragController {
    pub fn new(floor_bound: f32) -> Self {
        Self {
            state: DragState::Idle,
            floor_bound,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn live_position(&self) -> Option<Vec3> {
        self.session().map(|session| session.live_position)
    }

    /// Grab `target`, currently at `target_position`, seen along
    /// `view_direction`. Returns false when a drag is already running.
    pub fn pointer_down(
        &mut self,
        target: DragTarget,
        target_position: Vec3,
        view_direction: Dir3,
        sample: PointerSample,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }

        let mut session = DragSession {
            target,
            pointer_id: sample.pointer_id,
            start_pointer: target_position,
            plane_origin: target_position,
            plane: InfinitePlane3d {
                normal: -view_direction,
            },
            live_position: target_position,
        };
        if let Some(hit) = session.project(sample.ray) {
            session.start_pointer = hit;
        }

        debug!("Drag started on `{}`", session.target.id);
        self.state = DragState::Dragging(session);
        true
    }

    /// Follow the pointer. Returns the new live position, or `None` when the
    /// sample was ignored. A ray that misses the plane keeps the previous
    /// position.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<Vec3> {
        let floor_bound = self.floor_bound;
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        if session.pointer_id != sample.pointer_id {
            return None;
        }

        if let Some(hit) = session.project(sample.ray) {
            session.live_position = Vec3::new(
                hit.x,
                hit.y.max(floor_bound),
                session.plane_origin.z,
            );
        }
        Some(session.live_position)
    }

    pub fn pointer_up(&mut self, pointer_id: u64, sink: &mut impl PositionSink) -> Option<DragCommit> {
        self.release(Some(pointer_id), sink)
    }

    pub fn pointer_leave(&mut self, pointer_id: u64, sink: &mut impl PositionSink) -> Option<DragCommit> {
        self.release(Some(pointer_id), sink)
    }

    /// The pointer vanished without an up or leave, e.g. focus loss. The last
    /// known position is committed.
    pub fn pointer_cancel(&mut self, sink: &mut impl PositionSink) -> Option<DragCommit> {
        self.release(None, sink)
    }

    /// The dragged item no longer exists. Nothing is committed.
    pub fn target_lost(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                debug!("Drag target `{}` lost, discarding", session.target.id);
                Some(session)
            }
            DragState::Idle => None,
        }
    }

    fn release(&mut self, pointer_id: Option<u64>, sink: &mut impl PositionSink) -> Option<DragCommit> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };
        if pointer_id.is_some_and(|id| id != session.pointer_id) {
            return None;
        }

        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        sink.commit(&session.target, session.live_position);
        Some(DragCommit {
            target: session.target,
            position: session.live_position,
        })
    }
}
