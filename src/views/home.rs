use crate::components::{StatsCard, TasksList};
use crate::models::{StatCollection, StatMetric, Task, TaskCollection};
use crate::styles::home as style;
use crate::views::Layout;
use dioxus::prelude::*;

pub fn sample_stats() -> StatCollection {
    vec![
        StatMetric::new("Всего задач", 42, "#4CAF50"),
        StatMetric::new("Выполнено", 24, "#2196F3"),
        StatMetric::new("В процессе", 18, "#FFC107"),
    ]
}

pub fn sample_tasks() -> TaskCollection {
    vec![
        Task::new(1, "Завершить проект", false),
        Task::new(2, "Провести встречу", true),
        Task::new(3, "Написать документацию", false),
    ]
}

/// The Home page: a header, one card per metric and the task list, all wrapped in [`Layout`].
#[component]
pub fn Home() -> Element {
    let stats = sample_stats();
    let tasks = sample_tasks();

    tracing::debug!(stats = stats.len(), tasks = tasks.len(), "composing home dashboard");

    rsx! {
        Layout {
            div {
                class: style::HOME,
                header {
                    class: style::HEADER,
                    h1 { "Добро пожаловать в Task Manager" }
                    p { "Управляйте своими задачами эффективно" }
                }
                div {
                    class: style::STATS_CONTAINER,
                    for (index, stat) in stats.into_iter().enumerate() {
                        StatsCard {
                            key: "{index}",
                            title: stat.title,
                            value: stat.value,
                            color: stat.color,
                        }
                    }
                }
                div {
                    class: style::TASKS_SECTION,
                    TasksList { tasks }
                }
            }
        }
    }
}
