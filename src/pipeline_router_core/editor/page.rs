use serde::Serialize;
use tracing::warn;

use super::context::EditorContext;
use crate::pipeline_router_core::error::{RouterError, RouterResult};
use crate::pipeline_router_core::state::Navigator;

/// 页面上的返回按钮。
///
/// 新建页与编辑页共用同一份文案和目标。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackAction {
    pub target: String,
    pub label: String,
}

impl BackAction {
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }
}

/// 页面的可见状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageView {
    /// 解析成功，渲染编辑器。
    Editor(EditorContext),

    /// 编辑页的 id 无法解析：展示"无效的流水线引用"，不渲染编辑器。
    InvalidReference { raw: String, reason: String },
}

/// 一次导航对应的编辑器页面实例。
///
/// 每次导航重新构造，离开页面即丢弃。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorPage {
    /// 命中的路由名。
    pub route: String,

    pub view: PageView,

    pub back_action: BackAction,
}

impl EditorPage {
    /// 根据解析结果构造页面。
    ///
    /// `InvalidRouteParameter` 会被转成 `PageView::InvalidReference`；
    /// 其它错误原样返回。
    pub fn open(
        route: impl Into<String>,
        resolution: RouterResult<EditorContext>,
        back_action: BackAction,
    ) -> RouterResult<Self> {
        let route = route.into();
        let view = match resolution {
            Ok(ctx) => PageView::Editor(ctx),
            Err(RouterError::InvalidRouteParameter { raw, reason, .. }) => {
                warn!(route = %route, raw = %raw, reason = %reason, "invalid pipeline reference");
                PageView::InvalidReference { raw, reason }
            }
            Err(other) => return Err(other),
        };

        Ok(Self {
            route,
            view,
            back_action,
        })
    }

    pub fn context(&self) -> Option<&EditorContext> {
        match &self.view {
            PageView::Editor(ctx) => Some(ctx),
            PageView::InvalidReference { .. } => None,
        }
    }

    pub fn is_invalid_reference(&self) -> bool {
        matches!(self.view, PageView::InvalidReference { .. })
    }

    /// 返回按钮：向导航服务发出且只发出一次跳转。
    pub fn back(&self, navigator: &dyn Navigator) {
        navigator.navigate_to(&self.back_action.target);
    }
}
