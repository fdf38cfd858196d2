//! 页面处理上下文
//!
//! 封装"我正在处理哪个文件的第几页"这一信息

use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct PageCtx {
    /// 来源文件
    pub source: String,

    /// 页面在文件中的索引（从1开始）
    pub page_index: usize,

    /// 页面在整次运行中的序号（从1开始），标题中没有题号时用作题号
    pub run_index: usize,
}

impl PageCtx {
    pub fn new(source: String, page_index: usize, run_index: usize) -> Self {
        Self {
            source,
            page_index,
            run_index,
        }
    }
}

impl Display for PageCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} 页面#{}]", self.source, self.page_index)
    }
}
