use crate::models::{Task, TaskCollection};
use crate::styles::tasks_list as style;
use dioxus::prelude::*;
use std::collections::HashMap;

#[component]
pub fn TasksList(tasks: TaskCollection) -> Element {
    let keys = row_keys(&tasks);

    rsx! {
        div {
            class: style::TASKS_LIST,
            h2 { class: style::TITLE, "Мои задачи" }
            ul {
                class: style::LIST,
                for (key, task) in keys.into_iter().zip(tasks.iter()) {
                    TaskRow {
                        key: "{key}",
                        task: task.clone(),
                    }
                }
            }
        }
    }
}

/// Row keys derived from task ids. A repeated id gets an occurrence suffix so sibling keys
/// stay unique when the diff runs.
pub(crate) fn row_keys(tasks: &[Task]) -> Vec<String> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    tasks
        .iter()
        .map(|task| {
            let occurrence = seen.entry(task.id).or_default();
            let key = match *occurrence {
                0 => task.id.to_string(),
                n => format!("{}#{n}", task.id),
            };
            *occurrence += 1;
            key
        })
        .collect()
}

#[component]
fn TaskRow(task: Task) -> Element {
    let text_class = if task.completed {
        format!("{} {}", style::TASK_TEXT, style::COMPLETED)
    } else {
        style::TASK_TEXT.to_string()
    };

    rsx! {
        li {
            class: style::TASK_ITEM,
            // Display only: the checkbox mirrors `completed` and never toggles it.
            input {
                r#type: "checkbox",
                class: style::CHECKBOX,
                checked: task.completed,
                readonly: true,
                onclick: move |event| event.prevent_default(),
            }
            span { class: "{text_class}", "{task.title}" }
        }
    }
}
