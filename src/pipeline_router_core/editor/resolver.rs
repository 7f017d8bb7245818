use tracing::{debug, warn};

use super::context::EditorContext;
use crate::pipeline_router_core::error::{RouterError, RouterResult};
use crate::pipeline_router_core::route::{ResolvedRoute, RouteKind};
use crate::pipeline_router_core::types::{IdParsePolicy, PipelineId};

/// 编辑页 id 参数的默认名。
pub const DEFAULT_ID_PARAM: &str = "id";

/// 路由解析器：把路由映射成 EditorContext。
///
/// 纯函数式：不做 I/O，不持有可变状态，同样的输入总是得到相等的结果。
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteResolver {
    policy: IdParsePolicy,
}

impl RouteResolver {
    pub fn new(policy: IdParsePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IdParsePolicy {
        self.policy
    }

    /// 新建页：总是 Create，不会失败。
    pub fn resolve_create(&self) -> EditorContext {
        EditorContext::Create
    }

    /// 编辑页：把 path 段解析为 pipeline id。
    ///
    /// 非法输入返回 `InvalidRouteParameter`，不会产出哨兵值。
    pub fn resolve_edit(&self, raw_id: &str) -> RouterResult<EditorContext> {
        self.resolve_edit_param(DEFAULT_ID_PARAM, raw_id)
    }

    /// 按路由类型分派到 resolve_create / resolve_edit。
    pub fn resolve(&self, route: &ResolvedRoute<'_>) -> RouterResult<EditorContext> {
        match &route.meta.kind {
            RouteKind::EditorCreate => Ok(self.resolve_create()),
            RouteKind::EditorEdit { id_param } => {
                let raw = route
                    .param(id_param)
                    .ok_or_else(|| RouterError::MissingRouteParameter {
                        route: route.meta.name.clone(),
                        param: id_param.clone(),
                    })?;
                self.resolve_edit_param(id_param, raw)
            }
            RouteKind::Listing => Err(RouterError::NotAnEditorRoute {
                route: route.meta.name.clone(),
            }),
        }
    }

    fn resolve_edit_param(&self, param: &str, raw: &str) -> RouterResult<EditorContext> {
        let pipeline_id = parse_pipeline_id(param, raw, self.policy)?;
        if pipeline_id.is_zero() {
            warn!(param, raw, "pipeline id 0 is structurally valid but likely not a real pipeline");
        }
        debug!(param, %pipeline_id, "resolved edit context");
        Ok(EditorContext::Edit { pipeline_id })
    }
}

/// 按策略把 path 参数转换为 PipelineId。
pub fn parse_pipeline_id(param: &str, raw: &str, policy: IdParsePolicy) -> RouterResult<PipelineId> {
    let invalid = |reason: &str| RouterError::InvalidRouteParameter {
        param: param.to_string(),
        raw: raw.to_string(),
        reason: reason.to_string(),
    };

    let digits = match policy {
        IdParsePolicy::Strict => {
            if raw.is_empty() {
                return Err(invalid("empty identifier"));
            }
            if !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("expected only decimal digits"));
            }
            raw
        }
        IdParsePolicy::LeadingDigits => {
            let rest = raw.trim_start();
            if rest.starts_with('-') {
                return Err(invalid("negative identifiers are not allowed"));
            }
            let rest = rest.strip_prefix('+').unwrap_or(rest);
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if end == 0 {
                return Err(invalid("no leading decimal digits"));
            }
            &rest[..end]
        }
    };

    digits
        .parse::<u64>()
        .map(PipelineId)
        .map_err(|_| invalid("identifier out of range"))
}
