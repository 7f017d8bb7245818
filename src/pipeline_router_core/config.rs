use serde::Deserialize;

use crate::pipeline_router_core::error::RouterResult;
use crate::pipeline_router_core::types::IdParsePolicy;

/// 编辑器路由的配置。
///
/// 所有字段都有默认值，TOML 中只需写需要覆盖的部分：
///
/// ```toml
/// edit_path = "/pipelines/:pipeline"
/// id_param = "pipeline"
/// id_policy = "leading_digits"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// 新建页的路径（无参数）。
    pub create_path: String,

    /// 编辑页的路径模式，必须包含 `:{id_param}`。
    pub edit_path: String,

    /// 编辑页 path 参数名。
    pub id_param: String,

    /// 分析列表页路径。
    pub listing_path: String,

    /// 返回按钮的跳转目标。
    pub back_target: String,

    /// 返回按钮文案。新建页与编辑页共用同一份。
    pub back_label: String,

    /// id 参数的解析策略。
    pub id_policy: IdParsePolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            create_path: "/analyses/pipelines/new".to_string(),
            edit_path: "/analyses/pipelines/:id".to_string(),
            id_param: "id".to_string(),
            listing_path: "/analyses".to_string(),
            back_target: "/analyses".to_string(),
            back_label: "Back to analyses".to_string(),
            id_policy: IdParsePolicy::Strict,
        }
    }
}

impl RouterConfig {
    pub fn from_toml_str(source: &str) -> RouterResult<Self> {
        Ok(toml::from_str(source)?)
    }
}
