//! Map state that is independent of the actual map library.
//!
//! The widget is created lazily the first time the map is shown and then
//! kept alive (even while hidden) until [`MapAdapter::dispose`] is called.
//! The marker always mirrors the picked coordinates.

use std::{fmt, mem};

use crate::geo::Coordinates;

/// An interactive map rendered somewhere in the page.
pub trait MapWidget {
    type Marker;

    fn set_view(&self, center: Coordinates, zoom: f64);
    fn add_marker(&self, pos: Coordinates) -> Self::Marker;
    fn remove_marker(&self, marker: Self::Marker);

    /// Re-measure the container, e.g. after it has been hidden.
    fn invalidate_size(&self);

    /// Release the widget and all of its listeners.
    fn dispose(&self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub default_center: Coordinates,
    pub default_zoom: f64,
    pub location_zoom: f64,
}

enum Widget<W: MapWidget> {
    Uninitialized,
    Initialized {
        widget: W,
        marker: Option<W::Marker>,
    },
    Disposed,
}

pub struct MapAdapter<W: MapWidget> {
    view: MapView,
    visible: bool,
    widget: Widget<W>,
}

impl<W: MapWidget> fmt::Debug for MapAdapter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.widget {
            Widget::Uninitialized => "uninitialized",
            Widget::Initialized { marker: None, .. } => "initialized",
            Widget::Initialized { marker: Some(_), .. } => "initialized with marker",
            Widget::Disposed => "disposed",
        };
        f.debug_struct("MapAdapter")
            .field("view", &self.view)
            .field("visible", &self.visible)
            .field("widget", &state)
            .finish()
    }
}

impl<W: MapWidget> MapAdapter<W> {
    #[must_use]
    pub const fn new(view: MapView) -> Self {
        Self {
            view,
            visible: false,
            widget: Widget::Uninitialized,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        matches!(self.widget, Widget::Initialized { .. })
    }

    #[must_use]
    pub const fn has_marker(&self) -> bool {
        matches!(self.widget, Widget::Initialized { marker: Some(_), .. })
    }

    #[must_use]
    pub const fn needs_init(&self) -> bool {
        self.visible && matches!(self.widget, Widget::Uninitialized)
    }

    /// Show or hide the map and return the new visibility.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        if self.visible {
            if let Widget::Initialized { widget, .. } = &self.widget {
                widget.invalidate_size();
            }
        }
        self.visible
    }

    /// Create the widget if the map is visible and has not been created yet.
    ///
    /// Returns `true` if a widget has been created.
    pub fn initialize<F>(&mut self, create: F, location: Option<Coordinates>) -> bool
    where
        F: FnOnce() -> W,
    {
        if !self.needs_init() {
            return false;
        }
        let widget = create();
        widget.set_view(self.view.default_center, self.view.default_zoom);
        let marker = location.map(|pos| {
            widget.set_view(pos, self.view.location_zoom);
            widget.add_marker(pos)
        });
        log::debug!("Map initialized");
        self.widget = Widget::Initialized { widget, marker };
        true
    }

    /// Replace the current marker (if any) by one at `pos`.
    pub fn sync_marker(&mut self, pos: Option<Coordinates>) {
        let Widget::Initialized { widget, marker } = &mut self.widget else {
            return;
        };
        if let Some(previous) = marker.take() {
            widget.remove_marker(previous);
        }
        *marker = pos.map(|pos| widget.add_marker(pos));
    }

    /// Let the widget re-measure its container.
    pub fn refresh(&self) {
        if let Widget::Initialized { widget, .. } = &self.widget {
            widget.invalidate_size();
        }
    }

    pub fn center_on(&self, pos: Coordinates) {
        if let Widget::Initialized { widget, .. } = &self.widget {
            widget.set_view(pos, self.view.location_zoom);
        }
    }

    pub fn dispose(&mut self) {
        let previous = mem::replace(&mut self.widget, Widget::Disposed);
        self.visible = false;
        if let Widget::Initialized { widget, marker } = previous {
            if let Some(marker) = marker {
                widget.remove_marker(marker);
            }
            widget.dispose();
            log::debug!("Map disposed");
        }
    }
}
