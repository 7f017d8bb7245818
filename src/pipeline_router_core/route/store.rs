use std::collections::HashMap;

use matchit::Router as MatchitRouter;
use tracing::debug;

use super::meta::{RouteKind, RouteMeta};
use super::resolved::ResolvedRoute;
use crate::pipeline_router_core::config::RouterConfig;
use crate::pipeline_router_core::error::{RouterError, RouterResult};
use crate::pipeline_router_core::types::RouteId;

/// 默认路由表中的路由名。
pub const CREATE_ROUTE: &str = "pipelines.create";
pub const EDIT_ROUTE: &str = "pipelines.edit";
pub const LISTING_ROUTE: &str = "analyses.index";

/// 路由表存储结构：
///
/// - 所有 RouteMeta（Vec）
/// - name -> RouteId 索引
/// - path -> RouteId 匹配（基于 matchit）
#[derive(Default)]
pub struct RouteStore {
    /// 所有路由的元信息，索引下标就是 RouteId 的值。
    metas: Vec<RouteMeta>,

    /// "pipelines.edit" -> RouteId
    name_index: HashMap<String, RouteId>,

    /// 静态段优先于参数段：
    ///     "/analyses/pipelines/new" 不会被 ":id" 吃掉。
    path_router: MatchitRouter<RouteId>,
}

impl std::fmt::Debug for RouteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteStore")
            .field("metas", &self.metas)
            .field("name_index", &self.name_index)
            .finish()
    }
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置构建编辑器默认路由表：新建页、编辑页、列表页。
    ///
    /// 新建页不能带参数，编辑页必须恰好带一个 `:{id_param}` 段，
    /// 否则直接报错，而不是等到导航时才失败。
    pub fn editor_routes(config: &RouterConfig) -> RouterResult<Self> {
        check_create_pattern(&config.create_path)?;
        check_edit_pattern(&config.edit_path, &config.id_param)?;

        let mut store = Self::new();
        store.register(
            RouteMeta::new(CREATE_ROUTE, &config.create_path, RouteKind::EditorCreate)
                .with_tag("editor"),
        )?;
        store.register(
            RouteMeta::new(
                EDIT_ROUTE,
                &config.edit_path,
                RouteKind::EditorEdit {
                    id_param: config.id_param.clone(),
                },
            )
            .with_tag("editor"),
        )?;
        store.register(RouteMeta::new(
            LISTING_ROUTE,
            &config.listing_path,
            RouteKind::Listing,
        ))?;
        Ok(store)
    }

    /// 注册一条路由，返回分配的 RouteId。
    pub fn register(&mut self, mut meta: RouteMeta) -> RouterResult<RouteId> {
        if self.name_index.contains_key(&meta.name) {
            return Err(RouterError::DuplicateRoute { name: meta.name });
        }

        let id = RouteId(self.metas.len() as u32);
        self.path_router
            .insert(meta.path.clone(), id)
            .map_err(|source| RouterError::InvalidRoutePattern {
                pattern: meta.path.clone(),
                source,
            })?;

        debug!(route = %meta.name, pattern = %meta.path, ?id, "registered route");
        meta.id = id;
        self.name_index.insert(meta.name.clone(), id);
        self.metas.push(meta);
        Ok(id)
    }

    pub fn meta(&self, id: RouteId) -> Option<&RouteMeta> {
        self.metas.get(id.0 as usize)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteMeta> {
        self.name_index.get(name).and_then(|id| self.meta(*id))
    }

    pub fn routes(&self) -> impl Iterator<Item = &RouteMeta> {
        self.metas.iter()
    }

    pub fn len(&self) -> usize {
        self.metas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }

    /// 将具体 path 匹配到一条路由。
    ///
    /// 匹配前会去掉 query / fragment，以及末尾多余的 `/`（根路径除外）。
    pub fn match_path(&self, path: &str) -> RouterResult<ResolvedRoute<'_>> {
        let normalized = normalize_path(path);

        let matched = self
            .path_router
            .at(normalized)
            .map_err(|_| RouterError::RouteNotFound {
                path: path.to_string(),
            })?;

        let id = *matched.value;
        let meta = self.meta(id).ok_or_else(|| RouterError::RouteNotFound {
            path: path.to_string(),
        })?;

        let path_params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        debug!(path = %normalized, route = %meta.name, "matched route");
        Ok(ResolvedRoute {
            id,
            meta,
            path_params,
        })
    }
}

fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(':') || segment.starts_with('*')
}

fn check_create_pattern(pattern: &str) -> RouterResult<()> {
    if pattern.split('/').any(is_param_segment) {
        return Err(RouterError::InvalidRouteConfig {
            route: CREATE_ROUTE.to_string(),
            pattern: pattern.to_string(),
            reason: "create route must not have path parameters".to_string(),
        });
    }
    Ok(())
}

fn check_edit_pattern(pattern: &str, id_param: &str) -> RouterResult<()> {
    let invalid = |reason: String| RouterError::InvalidRouteConfig {
        route: EDIT_ROUTE.to_string(),
        pattern: pattern.to_string(),
        reason,
    };

    let mut params = pattern.split('/').filter(|s| is_param_segment(s));
    match (params.next(), params.next()) {
        (Some(segment), None) if segment.strip_prefix(':') == Some(id_param) => Ok(()),
        (None, _) => Err(invalid(format!("edit route must contain ':{id_param}'"))),
        (Some(segment), None) => Err(invalid(format!(
            "expected parameter ':{id_param}', found '{segment}'"
        ))),
        (Some(_), Some(_)) => Err(invalid(format!(
            "edit route must have exactly one parameter ':{id_param}'"
        ))),
    }
}

fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}
