use std::collections::BTreeMap;

use super::meta::RouteMeta;
use crate::pipeline_router_core::types::RouteId;

/// 基于 path 匹配得到的「路由解析结果」。
///
/// - 绑定了具体的 RouteMeta
/// - 含 path 参数（例如 ":id" -> "42"），值为原始字符串，尚未做类型转换
#[derive(Debug, Clone)]
pub struct ResolvedRoute<'a> {
    pub id: RouteId,

    pub meta: &'a RouteMeta,

    pub path_params: BTreeMap<String, String>,
}

impl ResolvedRoute<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(|s| s.as_str())
    }
}
