//! Terminal rendering of the flowsheet layout.
//!
//! Renders the year → quarter → course hierarchy as an indented
//! box-drawing tree, the CLI stand-in for the original page layout. Each
//! course line is styled according to its [`HighlightState`] token on the
//! board; what a token looks like is decided entirely here, keeping the
//! highlight core free of presentation concerns.
//!
//! Styling goes through `colored`, so `--color never` and `NO_COLOR`
//! disable it globally and the output stays parseable.

use colored::Colorize;
use std::fmt::Write as _;

use crate::catalog::{Course, Flowsheet};
use crate::highlight::{HighlightBoard, HighlightState};

/// Render the full flowsheet, styling each course by its board token.
///
/// Pass a freshly-constructed (all-neutral) board for an unhighlighted
/// render.
#[must_use]
pub fn render_flowsheet(flowsheet: &Flowsheet, board: &HighlightBoard) -> String {
    let mut out = String::new();

    for year in &flowsheet.years {
        writeln!(out, "{}", year.name.cyan().bold()).ok();

        for (qi, quarter) in year.quarters.iter().enumerate() {
            let is_last_quarter = qi == year.quarters.len() - 1;
            let connector = if is_last_quarter { "└── " } else { "├── " };
            writeln!(out, "{}{}", connector, quarter.name.bold()).ok();

            let course_prefix = if is_last_quarter { "    " } else { "│   " };
            for (ci, course) in quarter.courses.iter().enumerate() {
                let is_last_course = ci == quarter.courses.len() - 1;
                let course_connector = if is_last_course { "└── " } else { "├── " };
                writeln!(
                    out,
                    "{}{}{}",
                    course_prefix,
                    course_connector,
                    course_line(course, board.state_of(&course.id))
                )
                .ok();
            }
        }
    }

    out
}

/// Legend line naming the highlight token colors.
///
/// Printed after a highlighted render so the styling is self-describing.
#[must_use]
pub fn render_legend() -> String {
    format!(
        "{}: {} {} {} {}",
        "legend".bright_black(),
        "focus".bold().underline(),
        "prerequisite".green(),
        "prereq-of-prereq".yellow(),
        "unlocks".cyan(),
    )
}

fn course_line(course: &Course, state: HighlightState) -> String {
    let text = if course.subtitle.is_empty() {
        format!("{}  {}", course.id, course.title)
    } else {
        format!("{}  {} - {}", course.id, course.title, course.subtitle)
    };

    match state {
        HighlightState::Neutral => text,
        HighlightState::Dimmed => text.bright_black().to_string(),
        HighlightState::Focus => text.bold().underline().to_string(),
        HighlightState::Primary => text.green().to_string(),
        HighlightState::Secondary => text.yellow().to_string(),
        HighlightState::Unlock => text.cyan().to_string(),
    }
}
