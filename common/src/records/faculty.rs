use crate::records::course::Course;
use crate::records::list::RecordList;
use crate::records::{Detail, Details, Identified, Member, RecordId};

/// A staff member. Courses taught are held by id and resolved against whichever
/// course list owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    id: RecordId,
    name: String,
    department: String,
    courses_taught: Vec<RecordId>,
}

impl Faculty {
    pub fn new(name: impl Into<String>, id: RecordId, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            courses_taught: Vec::new(),
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn courses_taught(&self) -> &[RecordId] {
        &self.courses_taught
    }

    /// Returns `false` when the course was already assigned.
    pub fn assign_course(&mut self, course: &Course) -> bool {
        let course_id = course.id();
        if self.courses_taught.contains(&course_id) {
            return false;
        }
        self.courses_taught.push(course_id);
        true
    }

    /// Looks up the taught courses in `catalog`, skipping ids it does not hold.
    pub fn resolve_courses<'a>(
        &'a self,
        catalog: &'a RecordList<Course>,
    ) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses_taught.iter().filter_map(move |id| catalog.find(*id))
    }
}

impl Identified for Faculty {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Details for Faculty {
    fn heading(&self) -> &'static str {
        "Faculty Details"
    }

    fn details(&self) -> Vec<Detail> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Department", self.department.clone()),
            ("Courses Taught", self.courses_taught.len().to_string()),
        ]
    }
}

impl Member for Faculty {
    fn name(&self) -> &str {
        &self.name
    }
}
