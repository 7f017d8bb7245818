use std::sync::Arc;

use tracing::{debug, instrument};

use crate::pipeline_router_core::config::RouterConfig;
use crate::pipeline_router_core::editor::{BackAction, EditorPage, PipelineEditor, RouteResolver};
use crate::pipeline_router_core::error::{RouterError, RouterResult};
use crate::pipeline_router_core::route::{RouteKind, RouteStore};
use crate::pipeline_router_core::state::Navigator;
use crate::pipeline_router_core::types::PipelineId;

/// 编辑器路由的入口。
///
/// 把 RouteStore（匹配）、RouteResolver（解析）与两个外部协作者
/// （编辑器组件、导航服务）串起来：
///
/// - `open(path)`：匹配 -> 解析 -> 构造页面 -> 就绪时挂载编辑器
/// - `back(&page)`：通过导航服务跳回列表页
///
/// 构造完成后只读，可在多线程间共享。
pub struct EditorRouter {
    config: RouterConfig,
    store: RouteStore,
    resolver: RouteResolver,
    editor: Option<Arc<dyn PipelineEditor>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl std::fmt::Debug for EditorRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorRouter")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("resolver", &self.resolver)
            .field("editor", &self.editor.as_ref().map(|e| e.name()))
            .field("navigator", &self.navigator.is_some())
            .finish()
    }
}

impl EditorRouter {
    pub fn new(config: RouterConfig) -> RouterResult<Self> {
        let store = RouteStore::editor_routes(&config)?;
        let resolver = RouteResolver::new(config.id_policy);
        Ok(Self {
            config,
            store,
            resolver,
            editor: None,
            navigator: None,
        })
    }

    pub fn with_editor(mut self, editor: Arc<dyn PipelineEditor>) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn store(&self) -> &RouteStore {
        &self.store
    }

    pub fn resolver(&self) -> &RouteResolver {
        &self.resolver
    }

    fn back_action(&self) -> BackAction {
        BackAction::new(&self.config.back_target, &self.config.back_label)
    }

    /// 处理一次导航：匹配 path 并构造编辑器页面。
    ///
    /// 页面就绪时把 props 交给编辑器组件；无效引用不会挂载编辑器。
    #[instrument(name = "EditorRouter::open", skip(self), err(level = "debug", Display))]
    pub fn open(&self, path: &str) -> RouterResult<EditorPage> {
        let route = self.store.match_path(path)?;
        let resolution = self.resolver.resolve(&route);
        let page = EditorPage::open(route.meta.name.clone(), resolution, self.back_action())?;

        if let (Some(ctx), Some(editor)) = (page.context(), &self.editor) {
            debug!(editor = editor.name(), mode = ?ctx.mode(), "mounting editor");
            editor.mount(&ctx.props());
        }

        Ok(page)
    }

    /// 触发页面的返回按钮；未配置导航服务时什么也不做。
    pub fn back(&self, page: &EditorPage) {
        match &self.navigator {
            Some(navigator) => page.back(navigator.as_ref()),
            None => debug!(target_path = %page.back_action.target, "no navigator configured, dropping back action"),
        }
    }

    /// 新建页的具体路径。
    pub fn create_path(&self) -> String {
        self.config.create_path.clone()
    }

    /// 编辑页的具体路径：把模式中的 `:{id_param}` 替换为 id。
    pub fn edit_path(&self, id: PipelineId) -> RouterResult<String> {
        let meta = self
            .store
            .routes()
            .find(|m| matches!(m.kind, RouteKind::EditorEdit { .. }))
            .ok_or_else(|| RouterError::RouteNotFound {
                path: self.config.edit_path.clone(),
            })?;

        let placeholder = format!(":{}", self.config.id_param);
        let mut replaced = false;
        let segments: Vec<String> = meta
            .path
            .split('/')
            .map(|segment| {
                if segment == placeholder {
                    replaced = true;
                    id.to_string()
                } else {
                    segment.to_string()
                }
            })
            .collect();

        if !replaced {
            return Err(RouterError::MissingRouteParameter {
                route: meta.name.clone(),
                param: self.config.id_param.clone(),
            });
        }
        Ok(segments.join("/"))
    }
}
