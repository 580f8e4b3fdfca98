use crate::domains::megaverse::{CreationCommand, GoalGrid};

pub fn goal_map_summary(grid: &GoalGrid) -> String {
    format!("GOAL MAP:\n{}", grid)
}

pub fn megaverse_summary(commands: &[CreationCommand]) -> String {
    let mut out = String::from("MEGAVERSE:");
    for command in commands {
        out.push('\n');
        out.push_str(&command.to_string());
    }
    out
}
