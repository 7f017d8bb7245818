use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

//
// ========== 导航能力契约：Navigator / NavCommand ==========
//

/// 一次客户端导航请求。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NavCommand {
    /// 跳转目标路径，例如 "/analyses"。
    pub target: String,
}

impl NavCommand {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// 客户端导航服务。
///
/// 即发即弃：没有返回值，也没有重试语义。
/// 导航失败由实现方自行处理，不回传给路由层。
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

//
// ========== 内存实现 ==========
//

/// 把所有导航请求按顺序记录下来的 Navigator。
///
/// 适用于测试，或宿主自己轮询命令再驱动真实导航的场景。
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    commands: Mutex<Vec<NavCommand>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录命令的快照（从早到晚）。
    pub fn commands(&self) -> Vec<NavCommand> {
        self.commands.lock().clone()
    }

    pub fn last(&self) -> Option<NavCommand> {
        self.commands.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.commands.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.lock().is_empty()
    }

    /// 取走全部命令并清空。
    pub fn drain(&self) -> Vec<NavCommand> {
        std::mem::take(&mut *self.commands.lock())
    }

    pub fn clear(&self) {
        self.commands.lock().clear();
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        debug!(target_path = %path, "navigation requested");
        self.commands.lock().push(NavCommand::to(path));
    }
}
