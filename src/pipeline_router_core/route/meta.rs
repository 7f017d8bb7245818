use crate::pipeline_router_core::types::RouteId;

/// 路由类型：决定匹配后如何解析成编辑器上下文。
///
/// - EditorCreate：新建页，无参数
/// - EditorEdit：编辑页，带一个 id 参数
/// - Listing：列表等非编辑器页面（例如返回目标）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    EditorCreate,

    /// `id_param` 为 path 中承载 pipeline id 的参数名。
    EditorEdit { id_param: String },

    Listing,
}

impl RouteKind {
    pub fn is_editor(&self) -> bool {
        !matches!(self, RouteKind::Listing)
    }
}

/// 单条路由的元信息。
#[derive(Debug, Clone)]
pub struct RouteMeta {
    /// 注册时由 RouteStore 分配。
    pub id: RouteId,

    /// 路由的路径模式，例如：
    /// - "/analyses"
    /// - "/analyses/pipelines/new"
    /// - "/analyses/pipelines/:id"
    pub path: String,

    /// 人类可读的路由名，例如 "pipelines.edit"。
    pub name: String,

    pub kind: RouteKind,

    /// 业务标签（例如 "editor"）。
    pub tags: Vec<String>,
}

impl RouteMeta {
    /// 构造一条待注册的路由；id 在注册时会被覆盖。
    pub fn new(name: impl Into<String>, path: impl Into<String>, kind: RouteKind) -> Self {
        Self {
            id: RouteId(u32::MAX),
            path: path.into(),
            name: name.into(),
            kind,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
