use madosize_core::{DisplaySet, Frame};

/// Print displays as a table, primary first.
pub fn print_displays_table(displays: &DisplaySet) {
    let rows: Vec<[String; 4]> = displays
        .iter()
        .enumerate()
        .map(|(index, display)| {
            [
                index.to_string(),
                if index == 0 { "yes" } else { "" }.to_string(),
                format_frame(display.full_frame()),
                format_frame(display.usable_frame()),
            ]
        })
        .collect();

    let headers = ["#", "Primary", "Full Frame", "Usable Frame"];
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    println!("{}", border('┌', '┬', '┐', &widths));
    println!("{}", row_line(&headers.map(String::from), &widths));
    println!("{}", border('├', '┼', '┤', &widths));
    for row in &rows {
        println!("{}", row_line(row, &widths));
    }
    println!("{}", border('└', '┴', '┘', &widths));
}

/// `x,y wxh`, rounded to whole points.
fn format_frame(frame: &Frame) -> String {
    format!(
        "{},{} {}x{}",
        frame.origin.x.round() as i64,
        frame.origin.y.round() as i64,
        frame.size.width.round() as i64,
        frame.size.height.round() as i64
    )
}

fn border(left: char, middle: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "─".repeat(width + 2)).collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}

fn row_line(cells: &[String; 4], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
        .collect();
    format!("│{}│", padded.join("│"))
}
