use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Invalid route parameter '{param}' = {raw:?}: {reason}")]
    InvalidRouteParameter {
        param: String,
        raw: String,
        reason: String,
    },

    #[error("Route '{route}' matched without required parameter '{param}'")]
    MissingRouteParameter { route: String, param: String },

    #[error("No route matches path: {path}")]
    RouteNotFound { path: String },

    #[error("Route '{route}' does not render the pipeline editor")]
    NotAnEditorRoute { route: String },

    #[error("Route name already registered: {name}")]
    DuplicateRoute { name: String },

    #[error("Invalid route pattern '{pattern}'. Source: {source}")]
    InvalidRoutePattern {
        pattern: String,
        #[source]
        source: matchit::InsertError,
    },

    #[error("Route '{route}' has an invalid pattern '{pattern}': {reason}")]
    InvalidRouteConfig {
        route: String,
        pattern: String,
        reason: String,
    },

    #[error("Failed to parse router configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl RouterError {
    /// 是否属于"路由参数非法"这一类、应当展示给用户的错误。
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, RouterError::InvalidRouteParameter { .. })
    }
}

pub type RouterResult<T, E = RouterError> = std::result::Result<T, E>;
