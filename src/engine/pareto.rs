// ==========================================
// OEE 分析引擎 - 排名与帕累托引擎
// ==========================================
// 职责: 按停机时长降序排名,计算占比与累计占比,截取 Top-N
// 红线: 不输出帕累托分档标签 (分档是展示层职责)
// 红线: 过滤后总时长为 0 时,占比与累计占比均为 0
// ==========================================

use crate::domain::metrics::{DowntimeGroup, ReasonGroup};
use crate::domain::production::DowntimeEvent;
use crate::engine::aggregator::DowntimeAggregator;

// ==========================================
// ParetoEntry - 可参与帕累托排名的分组
// ==========================================
pub trait ParetoEntry {
    fn total_duration_minutes(&self) -> f64;

    fn set_shares(&mut self, percentage: f64, cumulative_percentage: f64);

    fn cumulative_percentage(&self) -> f64;
}

impl ParetoEntry for DowntimeGroup {
    fn total_duration_minutes(&self) -> f64 {
        self.total_duration_minutes
    }

    fn set_shares(&mut self, percentage: f64, cumulative_percentage: f64) {
        self.percentage = percentage;
        self.cumulative_percentage = cumulative_percentage;
    }

    fn cumulative_percentage(&self) -> f64 {
        self.cumulative_percentage
    }
}

impl ParetoEntry for ReasonGroup {
    fn total_duration_minutes(&self) -> f64 {
        self.total_duration_minutes
    }

    fn set_shares(&mut self, percentage: f64, cumulative_percentage: f64) {
        self.percentage = percentage;
        self.cumulative_percentage = cumulative_percentage;
    }

    fn cumulative_percentage(&self) -> f64 {
        self.cumulative_percentage
    }
}

// ==========================================
// ParetoRanker - 排名引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ParetoRanker {
    aggregator: DowntimeAggregator,
}

impl ParetoRanker {
    pub fn new() -> Self {
        Self {
            aggregator: DowntimeAggregator::new(),
        }
    }

    /// 降序排名并写入占比
    ///
    /// 排序为稳定排序: 时长相同的分组保持首次出现顺序
    pub fn rank<T: ParetoEntry>(&self, mut groups: Vec<T>) -> Vec<T> {
        groups.sort_by(|a, b| {
            b.total_duration_minutes()
                .total_cmp(&a.total_duration_minutes())
        });

        let total: f64 = groups.iter().map(|g| g.total_duration_minutes()).sum();

        let mut cumulative = 0.0;
        for group in groups.iter_mut() {
            let percentage = if total > 0.0 {
                group.total_duration_minutes() / total * 100.0
            } else {
                0.0
            };
            cumulative += percentage;
            group.set_shares(percentage, cumulative);
        }

        groups
    }

    /// Top-N 停机原因
    ///
    /// # 参数
    /// - `events`: 停机事件
    /// - `limit`: 返回条数上限 (`<= 0` 返回空)
    /// - `unplanned_only`: 仅统计非计划停机
    ///
    /// # 返回
    /// 按时长降序、最多 `limit` 条的原因分组; 占比相对于全部过滤事件
    pub fn top_reasons(
        &self,
        events: &[DowntimeEvent],
        limit: i32,
        unplanned_only: bool,
    ) -> Vec<ReasonGroup> {
        if limit <= 0 {
            return Vec::new();
        }

        let mut reasons = self.aggregator.group_downtime_by_reason(events, unplanned_only);
        reasons.truncate(limit as usize);
        reasons
    }

    /// 前 `n` 个分组的累计占比 (看板 "Top N 占比" 摘要)
    pub fn top_share<T: ParetoEntry>(&self, ranked: &[T], n: usize) -> f64 {
        match n.min(ranked.len()) {
            0 => 0.0,
            k => ranked[k - 1].cumulative_percentage(),
        }
    }
}
