//! The two todo-list trees the demo pages are built from.
//!
//! Both bind the task collection through `Field("tasks")`, so they expect a
//! context shaped like `{ "tasks": [{ "task": .., "completed": .. }] }`.

use crate::ast::{Reference, RenderingCode, Value};

/// heading plus a task list whose item view is not written yet.
pub fn todo_skeleton() -> RenderingCode {
    RenderingCode::sequence(vec![
        RenderingCode::text("h1", Value::constant("TODO list")),
        RenderingCode::list(false, Reference::field("tasks"), RenderingCode::Hole),
    ])
}

pub fn todo_list() -> RenderingCode {
    RenderingCode::sequence(vec![
        RenderingCode::text("h1", Value::constant("TODO list")),
        RenderingCode::list(
            false,
            Reference::field("tasks"),
            RenderingCode::sequence(vec![
                RenderingCode::element(
                    "input",
                    vec![
                        ("type", Value::constant("checkbox")),
                        ("checked", Value::field("completed")),
                    ],
                    Value::Empty,
                ),
                RenderingCode::text("label", Value::field("task")),
            ]),
        ),
    ])
}
