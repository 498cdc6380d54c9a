use super::{load_dashboard, DataArgs};
use crate::{
    libs::{
        filter::{TaskFilter, View as TaskView},
        messages::Message,
        task::Status,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Which tasks to list, by start date relative to today
    #[arg(short, long, value_enum, default_value_t = TaskView::Recent)]
    view: TaskView,

    /// Case-insensitive text matched against title, id and assignee
    #[arg(long)]
    search: Option<String>,

    /// Only tasks assigned to this staff member
    #[arg(long)]
    staff: Option<String>,

    /// Only tasks with this status
    #[arg(long, value_enum)]
    status: Option<Status>,
}

pub async fn cmd(tasks_args: TasksArgs) -> Result<()> {
    let dashboard = load_dashboard(&tasks_args.data).await?;

    if let Some(staff) = tasks_args.staff.as_deref().filter(|staff| !dashboard.has_staff(staff)) {
        msg_warning!(Message::UnknownStaff(staff.to_string(), dashboard.staff_names().join(", ")));
    }

    let filter = TaskFilter {
        search: tasks_args.search,
        staff: tasks_args.staff,
        status: tasks_args.status,
    };
    let tasks = dashboard.visible(&filter, tasks_args.view);

    msg_print!(Message::TasksHeader(tasks_args.view.to_string(), dashboard.mode.to_string()), true);
    if tasks.is_empty() {
        msg_info!(Message::NoTasksInView(tasks_args.view.to_string()));
        return Ok(());
    }

    View::tasks(&tasks)?;
    msg_print!(Message::TasksShown(tasks.len()));

    Ok(())
}
