use crate::controllers::interactive::types::ViewportCommand;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;

/// A live drag, in raster pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSelection {
    pub start: Point,
    pub end: Point,
}

impl DragSelection {
    /// Top-left and bottom-right corners, whatever direction the drag went.
    #[must_use]
    pub fn corners(&self) -> (Point, Point) {
        (
            Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        )
    }
}

#[derive(Debug, Copy, Clone)]
struct PendingDrag {
    start: Point,
    end: Option<Point>,
}

/// Turns pointer gestures into viewport selections.
#[derive(Debug, Clone, Default)]
pub struct InteractionHandler {
    lock_aspect: bool,
    drag: Option<PendingDrag>,
}

impl InteractionHandler {
    #[must_use]
    pub fn new(lock_aspect: bool) -> Self {
        Self {
            lock_aspect,
            drag: None,
        }
    }

    pub fn pointer_down(&mut self, position: Point) {
        self.drag = Some(PendingDrag {
            start: position,
            end: None,
        });
    }

    /// With the aspect lock on, the drag height follows its width so the
    /// selection keeps the raster's proportions.
    pub fn pointer_move(&mut self, position: Point, raster: RasterSize) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let end = match raster.aspect_ratio() {
            Some(aspect) if self.lock_aspect => {
                Point::new(position.x, drag.start.y + (position.x - drag.start.x) / aspect)
            }
            _ => position,
        };

        drag.end = Some(end);
    }

    /// Ends the drag. A press released without moving selects nothing.
    pub fn pointer_up(&mut self) -> Option<ViewportCommand> {
        let drag = self.drag.take()?;
        let end = drag.end?;

        Some(ViewportCommand::SelectRegion {
            start: drag.start,
            end,
        })
    }

    /// Drops an in-progress drag, e.g. when the pointer leaves the window.
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// The selection to outline, once the pointer has moved.
    #[must_use]
    pub fn selection(&self) -> Option<DragSelection> {
        let drag = self.drag?;

        drag.end.map(|end| DragSelection {
            start: drag.start,
            end,
        })
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RASTER: RasterSize = RasterSize::new(800, 400);

    #[test]
    fn drag_produces_selection_command() {
        let mut handler = InteractionHandler::new(false);

        handler.pointer_down(Point::new(100.0, 100.0));
        handler.pointer_move(Point::new(200.0, 150.0), RASTER);
        handler.pointer_move(Point::new(300.0, 300.0), RASTER);

        assert_eq!(
            handler.pointer_up(),
            Some(ViewportCommand::SelectRegion {
                start: Point::new(100.0, 100.0),
                end: Point::new(300.0, 300.0),
            })
        );
        assert!(!handler.is_dragging());
    }

    #[test]
    fn click_without_move_selects_nothing() {
        let mut handler = InteractionHandler::new(false);

        handler.pointer_down(Point::new(100.0, 100.0));

        assert_eq!(handler.selection(), None);
        assert_eq!(handler.pointer_up(), None);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut handler = InteractionHandler::new(false);

        handler.pointer_move(Point::new(10.0, 10.0), RASTER);

        assert_eq!(handler.selection(), None);
        assert_eq!(handler.pointer_up(), None);
    }

    #[test]
    fn selection_is_visible_only_after_first_move() {
        let mut handler = InteractionHandler::new(false);

        handler.pointer_down(Point::new(50.0, 60.0));
        assert_eq!(handler.selection(), None);

        handler.pointer_move(Point::new(10.0, 20.0), RASTER);
        let selection = handler.selection().unwrap();

        assert_eq!(
            selection.corners(),
            (Point::new(10.0, 20.0), Point::new(50.0, 60.0))
        );
    }

    #[test]
    fn aspect_lock_derives_height_from_width() {
        let mut handler = InteractionHandler::new(true);

        handler.pointer_down(Point::new(100.0, 100.0));
        handler.pointer_move(Point::new(300.0, 999.0), RASTER);

        assert_eq!(handler.selection().unwrap().end, Point::new(300.0, 200.0));
    }

    #[test]
    fn aspect_lock_ignores_empty_raster() {
        let mut handler = InteractionHandler::new(true);

        handler.pointer_down(Point::new(0.0, 0.0));
        handler.pointer_move(Point::new(30.0, 40.0), RasterSize::new(0, 0));

        assert_eq!(handler.selection().unwrap().end, Point::new(30.0, 40.0));
    }

    #[test]
    fn cancel_discards_the_drag() {
        let mut handler = InteractionHandler::new(false);

        handler.pointer_down(Point::new(0.0, 0.0));
        handler.pointer_move(Point::new(100.0, 100.0), RASTER);
        handler.cancel();

        assert_eq!(handler.pointer_up(), None);
    }
}
