use tasklist_core::{
    parse_line, Command, FixedClock, ImmediateScheduler, Intent, MemoryStore, MemorySurface,
    TaskId, TaskListController,
};

fn controller() -> TaskListController<MemoryStore, MemorySurface, ImmediateScheduler, FixedClock>
{
    TaskListController::new(
        MemoryStore::new(),
        MemorySurface::new(),
        ImmediateScheduler::new(),
        FixedClock::new(1_000),
    )
}

fn submit_line(
    controller: &mut TaskListController<MemoryStore, MemorySurface, ImmediateScheduler, FixedClock>,
    line: &str,
) {
    let surface = controller.surface();
    if let Some(Command::Intent(intent)) =
        parse_line(line, &surface.row_ids(), surface.delete_all_visible())
    {
        controller.handle(intent);
        controller.run_due(std::time::Instant::now());
    }
}

#[test]
fn handle_dispatches_each_intent() {
    let mut controller = controller();

    controller.handle(Intent::Submit("A".to_string()));
    controller.handle(Intent::Submit("B".to_string()));
    let ids = controller.surface().row_ids();

    controller.handle(Intent::Toggle(ids[1]));
    assert!(controller.list().get(ids[1]).unwrap().completed);

    controller.handle(Intent::Delete(ids[0]));
    assert_eq!(controller.list().len(), 2);
    controller.run_due(std::time::Instant::now());
    assert_eq!(controller.list().len(), 1);

    controller.handle(Intent::DeleteAll);
    assert!(controller.list().is_empty());
}

#[test]
fn parsed_lines_drive_the_controller() {
    let mut controller = controller();

    for line in ["Buy milk", "add Walk dog", "done 2", "delete 1"] {
        submit_line(&mut controller, line);
    }

    let tasks = controller.list().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Walk dog");
    assert!(tasks[0].completed);

    submit_line(&mut controller, "clear");
    assert_eq!(controller.list().len(), 1);

    submit_line(&mut controller, "another");
    submit_line(&mut controller, "delete all");
    assert!(controller.list().is_empty());
    assert!(controller.surface().empty_visible());
}

#[test]
fn toggle_intent_for_unknown_row_is_ignored() {
    let mut controller = controller();
    controller.handle(Intent::Submit("A".to_string()));
    let before = controller.list().clone();

    controller.handle(Intent::Toggle(TaskId::new(1)));

    assert_eq!(controller.list(), &before);
    assert_eq!(controller.surface().labels().completed, "Completed: 0");
}
