use colored::*;

use registrar_common::records::Detail;
use registrar_common::records::course::Course;
use registrar_common::records::Identified;

use crate::terminal::colors;

pub fn details_to_key_value_pair(details: Vec<Detail>) -> Vec<(String, ColoredString)> {
    details
        .into_iter()
        .map(|(label, value)| {
            let value: ColoredString = match label {
                "ID" | "Code" | "Roll No" => value.color(colors::RECORD_ID),
                _ => value.normal(),
            };
            (label.to_string(), value)
        })
        .collect()
}

/// One-line course summary with the seat count colored by availability.
pub fn course_summary(course: &Course) -> String {
    let seats_color = if course.is_full() {
        colors::SEATS_FULL
    } else {
        colors::SEATS_FREE
    };
    let seats: ColoredString = format!("{}/{}", course.enrolled(), course.capacity()).color(seats_color);
    format!(
        "{} {} {} {}",
        course.id().to_string().color(colors::RECORD_ID),
        course.title().color(colors::TEXT_DEFAULT),
        "│".color(colors::SEPARATOR),
        seats
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_detail_order_and_labels() {
        colored::control::set_override(false);
        let pairs = details_to_key_value_pair(vec![
            ("ID", "5001".to_string()),
            ("Name", "Alice Smith".to_string()),
        ]);
        let labels: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, vec!["ID", "Name"]);
        assert_eq!(pairs[1].1.to_string(), "Alice Smith");
    }

    #[test]
    fn course_summary_lists_seats() {
        colored::control::set_override(false);
        let course = Course::restore(201, "CS", 30, 5).unwrap();
        assert_eq!(course_summary(&course), "201 CS │ 5/30");
    }
}
