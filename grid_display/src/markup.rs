// markup.rs - Markup generation for the grid container

use crate::grid::{Cell, Marker};

// One dead cell per line, row-major
pub fn build_markup(cell_count: usize) -> String {
    let line = cell_line(&[Marker::Cell]);
    vec![line; cell_count].join("\n")
}

pub fn render_markup(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| {
            if cell.has_marker(Marker::Alive) {
                cell_line(&[Marker::Cell, Marker::Alive])
            } else {
                cell_line(&[Marker::Cell])
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_line(markers: &[Marker]) -> String {
    let classes: Vec<&str> = markers.iter().map(|m| m.as_str()).collect();
    format!("<div class=\"{}\"></div>", classes.join(" "))
}

/// Element named by `selector` that receives the generated markup.
#[derive(Clone, Debug)]
pub struct Container {
    selector: &'static str,
    html: String,
}

impl Container {
    pub fn new(selector: &'static str) -> Self {
        Self { selector, html: String::new() }
    }

    pub fn selector(&self) -> &str {
        self.selector
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn replace_content(&mut self, html: String) {
        self.html = html;
    }
}
