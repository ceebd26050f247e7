use std::fmt;
use std::sync::Arc;

use super::route::RoomTypeRoute;

/// Static description of a room type
#[derive(Clone)]
pub struct RoomTypeDescriptor {
    pub identifier: String,
    pub order: i32,
    pub icon: Option<String>,   // Icon class used as the visual aid
    pub header: Option<String>, // i18n key of the section header
    pub label: Option<String>,  // i18n key of the display label
    pub route: Option<Arc<dyn RoomTypeRoute>>,
}

impl RoomTypeDescriptor {
    pub fn new(identifier: &str, order: i32) -> Self {
        Self {
            identifier: identifier.to_string(),
            order,
            icon: None,
            header: None,
            label: None,
            route: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_header(mut self, header: &str) -> Self {
        self.header = Some(header.to_string());
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_route(mut self, route: Arc<dyn RoomTypeRoute>) -> Self {
        self.route = Some(route);
        self
    }
}

impl fmt::Debug for RoomTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomTypeDescriptor")
            .field("identifier", &self.identifier)
            .field("order", &self.order)
            .field("icon", &self.icon)
            .field("header", &self.header)
            .field("label", &self.label)
            .field("route", &self.route.as_ref().map(|r| r.name()))
            .finish()
    }
}
