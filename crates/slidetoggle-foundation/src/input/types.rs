use slidetoggle_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event in the toggle's local coordinates.
///
/// Events that drive a drag are consumed so that enclosing handlers do not
/// also act on them; a tap's events stay unconsumed and fall through to the
/// click handling of the host.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic event time in milliseconds.
    pub uptime_millis: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, uptime_millis: i64) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(id: PointerId, position: Point, uptime_millis: i64) -> Self {
        Self::new(id, PointerEventKind::Down, position, uptime_millis)
    }

    pub fn moved(id: PointerId, position: Point, uptime_millis: i64) -> Self {
        Self::new(id, PointerEventKind::Move, position, uptime_millis)
    }

    pub fn up(id: PointerId, position: Point, uptime_millis: i64) -> Self {
        Self::new(id, PointerEventKind::Up, position, uptime_millis)
    }

    pub fn cancel(id: PointerId, uptime_millis: i64) -> Self {
        Self::new(id, PointerEventKind::Cancel, Point::ZERO, uptime_millis)
    }

    /// Mark this event as intercepted by the drag.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
