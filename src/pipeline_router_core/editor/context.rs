use serde::{Deserialize, Serialize};

use crate::pipeline_router_core::types::{EditorMode, PipelineId};

/// 一次导航解析出的编辑器上下文。
///
/// 用带标签的枚举代替"可空 id"：
/// - Create 一定没有 id
/// - Edit 一定带着从 path 解析出的 id
///
/// 每次导航都会重新构造，归当前页面独占，不跨导航共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditorContext {
    Create,
    Edit { pipeline_id: PipelineId },
}

impl EditorContext {
    pub fn mode(&self) -> EditorMode {
        match self {
            EditorContext::Create => EditorMode::Create,
            EditorContext::Edit { .. } => EditorMode::Edit,
        }
    }

    pub fn pipeline_id(&self) -> Option<PipelineId> {
        match self {
            EditorContext::Create => None,
            EditorContext::Edit { pipeline_id } => Some(*pipeline_id),
        }
    }

    pub fn props(&self) -> EditorProps {
        EditorProps {
            pipeline_id: self.pipeline_id(),
        }
    }
}

/// 传给编辑器组件的输入。
///
/// 序列化形态：`{"pipelineId": 42}` 或 `{"pipelineId": null}`，
/// 编辑器把 null 解释为"新建"，把整数解释为"加载并编辑"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorProps {
    pub pipeline_id: Option<PipelineId>,
}

impl From<EditorProps> for EditorContext {
    fn from(props: EditorProps) -> Self {
        match props.pipeline_id {
            Some(pipeline_id) => EditorContext::Edit { pipeline_id },
            None => EditorContext::Create,
        }
    }
}

/// 编辑器组件的能力契约。
///
/// 组件内部（加载、保存、执行）不在本 crate 范围内；
/// 路由层只负责在页面就绪时把 props 交给它一次。
pub trait PipelineEditor: Send + Sync {
    fn mount(&self, props: &EditorProps);

    fn name(&self) -> &str {
        "pipeline_editor"
    }
}
