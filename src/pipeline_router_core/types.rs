use std::fmt;

use serde::{Deserialize, Serialize};

/// 路由表内部的路由标识。
///
/// 值即 RouteStore.metas 中的下标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub u32);

/// 流水线（pipeline）的整数标识。
///
/// 0 在结构上合法，但业务上可能无效；解析时只告警，不拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineId(pub u64);

impl PipelineId {
    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PipelineId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// 编辑器的打开模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    /// 新建流水线。
    Create,
    /// 加载并编辑已有流水线。
    Edit,
}

/// 路由 path 参数转换为 PipelineId 的策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdParsePolicy {
    /// 整段必须全部是十进制数字。
    #[default]
    Strict,

    /// 兼容旧的"尽力转换"行为：
    ///
    /// - 跳过前导空白，允许一个 `+`
    /// - 取最长的数字前缀，忽略后面的内容（"12abc" -> 12）
    ///
    /// 没有数字前缀时依然报错，不会产出哨兵值。
    LeadingDigits,
}
