//! Class names defined in `assets/main.css`. Each group is prefixed with its component so
//! rules from one component never leak into another.

pub mod layout {
    pub const LAYOUT: &str = "layout";
    pub const MAIN: &str = "layout__main";
}

pub mod home {
    pub const HOME: &str = "home";
    pub const HEADER: &str = "home__header";
    pub const STATS_CONTAINER: &str = "home__stats";
    pub const TASKS_SECTION: &str = "home__tasks";
}

pub mod stats_card {
    pub const CARD: &str = "stats-card";
    pub const TITLE: &str = "stats-card__title";
    pub const VALUE: &str = "stats-card__value";
}

pub mod tasks_list {
    pub const TASKS_LIST: &str = "tasks-list";
    pub const TITLE: &str = "tasks-list__title";
    pub const LIST: &str = "tasks-list__list";
    pub const TASK_ITEM: &str = "tasks-list__item";
    pub const CHECKBOX: &str = "tasks-list__checkbox";
    pub const TASK_TEXT: &str = "tasks-list__text";
    pub const COMPLETED: &str = "tasks-list__text--completed";
}
