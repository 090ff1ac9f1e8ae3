use tracing::debug;

use crate::controllers::interactive::settings::NavigationSettings;
use crate::controllers::interactive::types::{PanDirection, ViewportCommand, ZoomDirection};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Converts a drag in raster pixels into the viewport it encloses.
///
/// Both axes share the horizontal scale `raster_width / prior.width()`.
/// Returns `None` when either drag extent is under `min_drag_pixels`, the
/// raster has no width, or the result is not a valid viewport.
#[must_use]
pub fn viewport_from_drag(
    prior: Viewport,
    start: Point,
    end: Point,
    raster_width: u32,
    min_drag_pixels: f64,
) -> Option<Viewport> {
    let drag_width = (end.x - start.x).abs();
    let drag_height = (end.y - start.y).abs();

    if raster_width == 0 || drag_width < min_drag_pixels || drag_height < min_drag_pixels {
        return None;
    }

    let aspect = f64::from(raster_width) / prior.width();

    Viewport::new(
        start.x.min(end.x) / aspect + prior.x(),
        start.y.min(end.y) / aspect + prior.y(),
        drag_width / aspect,
        drag_height / aspect,
    )
    .ok()
}

/// Owns the current viewport. Every operation replaces it wholesale and
/// reports whether it changed.
#[derive(Debug, Clone)]
pub struct ViewportController {
    current: Viewport,
    home: Viewport,
    navigation: NavigationSettings,
}

impl ViewportController {
    #[must_use]
    pub fn new(home: Viewport, navigation: NavigationSettings) -> Self {
        Self {
            current: home,
            home,
            navigation: navigation.sanitized(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.current
    }

    #[must_use]
    pub fn home(&self) -> Viewport {
        self.home
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationSettings {
        self.navigation
    }

    /// Replaces the viewport that [`reset`](Self::reset) restores.
    pub fn set_home(&mut self, home: Viewport) {
        self.home = home;
    }

    pub fn apply(&mut self, command: ViewportCommand, raster_width: u32) -> bool {
        match command {
            ViewportCommand::Pan(direction) => self.pan(direction, self.navigation.pan_factor),
            ViewportCommand::Zoom(direction) => self.zoom(direction, self.navigation.zoom_factor),
            ViewportCommand::Reset => self.reset(),
            ViewportCommand::SelectRegion { start, end } => {
                self.select_region(start, end, raster_width)
            }
        }
    }

    pub fn pan(&mut self, direction: PanDirection, factor: f64) -> bool {
        let dx = self.current.width() * factor;
        let dy = self.current.height() * factor;
        let (x, y) = (self.current.x(), self.current.y());

        let (x, y) = match direction {
            PanDirection::Left => (x - dx, y),
            PanDirection::Right => (x + dx, y),
            PanDirection::Up => (x, y - dy),
            PanDirection::Down => (x, y + dy),
        };

        self.replace(self.current.with_origin(x, y).ok())
    }

    /// Scales both sides about the top-left corner, which stays put.
    pub fn zoom(&mut self, direction: ZoomDirection, factor: f64) -> bool {
        let scale = match direction {
            ZoomDirection::In => 1.0 - factor,
            ZoomDirection::Out => 1.0 + factor,
        };

        let resized = self
            .current
            .with_size(self.current.width() * scale, self.current.height() * scale);

        if resized.is_err() {
            debug!(?direction, factor, "zoom rejected, viewport would degenerate");
        }

        self.replace(resized.ok())
    }

    pub fn reset(&mut self) -> bool {
        self.replace(Some(self.home))
    }

    pub fn select_region(&mut self, start: Point, end: Point, raster_width: u32) -> bool {
        let selected = viewport_from_drag(
            self.current,
            start,
            end,
            raster_width,
            self.navigation.min_drag_pixels,
        );

        if selected.is_none() {
            debug!(
                start_x = start.x,
                start_y = start.y,
                end_x = end.x,
                end_y = end.y,
                "selection rejected"
            );
        }

        self.replace(selected)
    }

    fn replace(&mut self, next: Option<Viewport>) -> bool {
        match next {
            Some(next) if next != self.current => {
                self.current = next;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::raster_size::RasterSize;

    fn viewport(x: f64, y: f64, width: f64, height: f64) -> Viewport {
        Viewport::new(x, y, width, height).unwrap()
    }

    fn controller(home: Viewport) -> ViewportController {
        ViewportController::new(home, NavigationSettings::default())
    }

    #[test]
    fn pan_right_moves_by_a_tenth_of_the_width() {
        let mut controller = controller(viewport(0.0, 0.0, 100.0, 100.0));

        assert!(controller.apply(ViewportCommand::Pan(PanDirection::Right), 100));
        assert_eq!(controller.viewport(), viewport(10.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn pan_in_every_direction() {
        let mut controller = controller(viewport(0.0, 0.0, 200.0, 100.0));

        controller.pan(PanDirection::Left, 0.1);
        assert_eq!(controller.viewport(), viewport(-20.0, 0.0, 200.0, 100.0));

        controller.pan(PanDirection::Down, 0.1);
        assert_eq!(controller.viewport(), viewport(-20.0, 10.0, 200.0, 100.0));

        controller.pan(PanDirection::Up, 0.5);
        assert_eq!(controller.viewport(), viewport(-20.0, -40.0, 200.0, 100.0));
    }

    #[test]
    fn zoom_keeps_the_origin_fixed() {
        let mut controller = controller(viewport(5.0, 7.0, 100.0, 80.0));

        assert!(controller.apply(ViewportCommand::Zoom(ZoomDirection::In), 100));
        assert_eq!(controller.viewport(), viewport(5.0, 7.0, 75.0, 60.0));

        assert!(controller.apply(ViewportCommand::Zoom(ZoomDirection::Out), 100));
        assert_eq!(controller.viewport(), viewport(5.0, 7.0, 93.75, 75.0));
    }

    #[test]
    fn degenerate_zoom_is_a_no_op() {
        let mut controller = controller(viewport(0.0, 0.0, 100.0, 100.0));

        assert!(!controller.zoom(ZoomDirection::In, 1.0));
        assert!(!controller.zoom(ZoomDirection::In, 2.0));
        assert_eq!(controller.viewport(), viewport(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn reset_restores_home_after_any_history() {
        let home = viewport(0.0, 0.0, 800.0, 600.0);
        let mut controller = controller(home);

        controller.pan(PanDirection::Right, 0.1);
        controller.zoom(ZoomDirection::In, 0.25);
        controller.select_region(Point::new(10.0, 10.0), Point::new(200.0, 300.0), 800);
        assert_ne!(controller.viewport(), home);

        assert!(controller.apply(ViewportCommand::Reset, 800));
        assert_eq!(controller.viewport(), home);
        assert!(!controller.reset());
    }

    #[test]
    fn drag_on_default_view_selects_the_dragged_rectangle() {
        let mut controller = controller(Viewport::default_for_raster(RasterSize::new(800, 600)));

        let changed = controller.apply(
            ViewportCommand::SelectRegion {
                start: Point::new(100.0, 100.0),
                end: Point::new(300.0, 300.0),
            },
            800,
        );

        assert!(changed);
        assert_eq!(controller.viewport(), viewport(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn drag_corners_may_come_in_any_order() {
        let prior = viewport(0.0, 0.0, 800.0, 600.0);

        let forward = viewport_from_drag(prior, Point::new(100.0, 50.0), Point::new(300.0, 250.0), 800, 12.0);
        let backward = viewport_from_drag(prior, Point::new(300.0, 250.0), Point::new(100.0, 50.0), 800, 12.0);

        assert_eq!(forward, backward);
    }

    #[test]
    fn drag_scales_into_a_zoomed_viewport() {
        let prior = viewport(100.0, 100.0, 200.0, 150.0);

        let selected = viewport_from_drag(prior, Point::new(0.0, 0.0), Point::new(400.0, 200.0), 800, 12.0);

        assert_eq!(selected, Some(viewport(100.0, 100.0, 100.0, 50.0)));
    }

    #[test]
    fn small_drags_are_rejected() {
        let home = viewport(0.0, 0.0, 800.0, 600.0);
        let mut controller = controller(home);

        assert!(!controller.select_region(Point::new(100.0, 100.0), Point::new(111.0, 300.0), 800));
        assert!(!controller.select_region(Point::new(100.0, 100.0), Point::new(300.0, 105.0), 800));
        assert_eq!(controller.viewport(), home);
    }

    #[test]
    fn zero_raster_width_rejects_selection() {
        let prior = viewport(0.0, 0.0, 800.0, 600.0);

        assert_eq!(
            viewport_from_drag(prior, Point::new(0.0, 0.0), Point::new(100.0, 100.0), 0, 12.0),
            None
        );
    }

    #[test]
    fn set_home_changes_reset_target() {
        let mut controller = controller(viewport(0.0, 0.0, 800.0, 600.0));
        let resized = viewport(0.0, 0.0, 1024.0, 768.0);

        controller.set_home(resized);
        controller.reset();

        assert_eq!(controller.viewport(), resized);
    }
}
