use js_sys::Reflect;
use leaflet::{
    Icon, IconOptions, LatLng, Map, MapOptions, Marker, MarkerOptions, MouseEvent, Point,
    TileLayer, TileLayerOptions,
};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use bizprofile_core::{map::MapWidget, Coordinates};

use crate::config;

// Not covered by the setters of `IconOptions`
const ICON_RETINA_URL: &str = "iconRetinaUrl";

/// The icon of the location marker.
///
/// Created once at startup and provided via context.
#[derive(Clone)]
pub struct MarkerIcon(Icon);

impl MarkerIcon {
    #[must_use]
    pub fn new(config: &config::MarkerIcon) -> Self {
        let options = IconOptions::new();
        options.set_icon_url(config.icon_url.clone());
        if let Some(url) = &config.icon_retina_url {
            let key = JsValue::from_str(ICON_RETINA_URL);
            if let Err(err) = Reflect::set(&options, &key, &JsValue::from_str(url)) {
                log::warn!("Unable to set the retina marker icon: {err:?}");
            }
        }
        if let Some(url) = &config.shadow_url {
            options.set_shadow_url(url.clone());
            options.set_shadow_size(Point::new(41.0, 41.0));
        }
        options.set_icon_size(Point::new(25.0, 41.0));
        options.set_icon_anchor(Point::new(12.0, 41.0));
        Self(Icon::new(&options))
    }
}

/// [`MapWidget`] backed by Leaflet.
pub struct LeafletMap {
    map: Map,
    marker_icon: Option<MarkerIcon>,
}

impl LeafletMap {
    pub fn new<F>(
        container: &HtmlElement,
        config: &config::Map,
        marker_icon: Option<MarkerIcon>,
        on_click: F,
    ) -> Self
    where
        F: Fn(Coordinates) + 'static,
    {
        let map = Map::new_with_element(container, &MapOptions::new());

        let tile_options = TileLayerOptions::new();
        tile_options.set_attribution(config.attribution.clone());
        TileLayer::new_options(&config.tile_url, &tile_options).add_to(&map);

        map.on_mouse_click(Box::new(move |ev: MouseEvent| {
            let lat_lng = ev.lat_lng();
            on_click(Coordinates::new(lat_lng.lat(), lat_lng.lng()));
        }));

        Self { map, marker_icon }
    }
}

fn lat_lng(pos: Coordinates) -> LatLng {
    LatLng::new(pos.lat, pos.lng)
}

impl MapWidget for LeafletMap {
    type Marker = Marker;

    fn set_view(&self, center: Coordinates, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }

    fn add_marker(&self, pos: Coordinates) -> Marker {
        let marker = match &self.marker_icon {
            Some(MarkerIcon(icon)) => {
                let options = MarkerOptions::new();
                options.set_icon(icon.clone());
                Marker::new_with_options(&lat_lng(pos), &options)
            }
            None => Marker::new(&lat_lng(pos)),
        };
        marker.add_to(&self.map);
        marker
    }

    fn remove_marker(&self, marker: Marker) {
        marker.remove();
    }

    fn invalidate_size(&self) {
        self.map.invalidate_size(false);
    }

    fn dispose(&self) {
        self.map.remove();
    }
}
