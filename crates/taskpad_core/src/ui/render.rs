//! List rendering contract.

use crate::model::task::Task;

/// Receives the current task sequence after every successful mutation.
///
/// The header counter is derivable from `tasks.len()`; the slice is only
/// valid for the duration of the call.
pub trait RenderSink {
    fn render(&mut self, tasks: &[Task]);
}

/// Render sink that drops every frame. Useful for embedders that pull
/// snapshots on demand instead of reacting to pushes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn render(&mut self, _tasks: &[Task]) {}
}
