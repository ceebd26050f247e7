use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::shared::AppError;

/// Parameters handed to a route's `action` and `link`
pub type RouteParams = HashMap<String, String>;

/// Name and path of the route a room type navigates to.
/// Both are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTypeRouteConfig {
    name: String,
    path: String,
}

impl RoomTypeRouteConfig {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Names of the `:param` segments of the path, in order
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
    }

    /// Fills every `:param` segment of the path from `params`.
    /// Each value must fit in a single segment, so values containing `/` are rejected.
    pub fn resolve(&self, params: &RouteParams) -> Result<String, AppError> {
        let segments = self
            .path
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(key) => self.segment_value(key, params),
                None => Ok(segment),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(segments.join("/"))
    }

    fn segment_value<'a>(&self, key: &str, params: &'a RouteParams) -> Result<&'a str, AppError> {
        let value = params.get(key).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Missing route parameter '{}' for route '{}'",
                key, self.name
            ))
        })?;

        if value.contains('/') {
            return Err(AppError::BadRequest(format!(
                "Route parameter '{}' for route '{}' spans more than one path segment",
                key, self.name
            )));
        }

        Ok(value)
    }
}

/// Where a route action navigated to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTarget {
    pub name: String,
    pub location: String,
}

/// Navigation route associated with a room type
#[async_trait]
pub trait RoomTypeRoute: Send + Sync {
    fn config(&self) -> &RoomTypeRouteConfig;

    fn name(&self) -> &str {
        self.config().name()
    }

    fn path(&self) -> &str {
        self.config().path()
    }

    /// Performs the navigation for the given parameters
    async fn action(&self, params: &RouteParams) -> Result<RouteTarget, AppError>;

    /// Builds the URL parameters for a link to this route, if the route supports links
    fn link(&self, _params: &RouteParams) -> Option<RouteParams> {
        None
    }
}

/// Route that navigates by filling its path template
#[derive(Debug, Clone)]
pub struct NavigationRoute {
    config: RoomTypeRouteConfig,
}

impl NavigationRoute {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            config: RoomTypeRouteConfig::new(name, path),
        }
    }
}

#[async_trait]
impl RoomTypeRoute for NavigationRoute {
    fn config(&self) -> &RoomTypeRouteConfig {
        &self.config
    }

    async fn action(&self, params: &RouteParams) -> Result<RouteTarget, AppError> {
        let location = self.config.resolve(params)?;
        debug!(route = %self.config.name(), location = %location, "Navigating");

        Ok(RouteTarget {
            name: self.config.name().to_string(),
            location,
        })
    }

    fn link(&self, params: &RouteParams) -> Option<RouteParams> {
        let link: RouteParams = self
            .config
            .placeholders()
            .filter_map(|key| params.get(key).map(|value| (key.to_string(), value.clone())))
            .collect();

        Some(link)
    }
}
