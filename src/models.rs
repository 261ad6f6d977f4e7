/// A single titled number shown on the dashboard, e.g. the total task count.
#[derive(Debug, Clone, PartialEq)]
pub struct StatMetric {
    pub title: String,
    pub value: i64,
    /// Any CSS color; used verbatim as the card accent.
    pub color: String,
}

impl StatMetric {
    pub fn new(title: impl Into<String>, value: i64, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value,
            color: color.into(),
        }
    }
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Row key. Callers keep ids unique within a list.
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Metrics in display order.
pub type StatCollection = Vec<StatMetric>;

/// Tasks in display order.
pub type TaskCollection = Vec<Task>;
