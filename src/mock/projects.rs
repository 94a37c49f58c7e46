use serde::{Deserialize, Serialize};

/// A row of the project overview table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub img: String,
    pub hours: String,
    pub total_task: String,
    pub project_type: String,
    pub project_title: String,
    pub progress_value: u8,
    pub progress_color: String,
}

impl Project {
    fn matches(&self, q: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(q);
        contains(&self.project_title)
            || contains(&self.project_type)
            || contains(&self.total_task)
            || contains(&self.hours)
            || self.progress_value.to_string().contains(q)
    }
}

/// Read-only project table
#[derive(Debug, Clone, Default)]
pub struct ProjectList {
    projects: Vec<Project>,
}

impl ProjectList {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The fixture projects the dashboard ships with
    pub fn seeded() -> Self {
        let rows = [
            (1, "18:42", 78, "122/240", "success", "React Project", "BGC eCommerce App", "react"),
            (2, "20:42", 18, "9/56", "error", "Figma Project", "Falcon Logo Design", "figma"),
            (3, "120:87", 62, "290/320", "primary", "VueJs Project", "Dashboard Design", "vue"),
            (4, "89:19", 8, "7/63", "error", "Xamarin Project", "Foodista Mobile App", "xamarin"),
            (5, "230:10", 49, "120/186", "warning", "Python Project", "Dojo React Project", "python"),
            (6, "342:41", 92, "99/109", "success", "Sketch Project", "Blockchain Website", "sketch"),
            (7, "12:45", 88, "98/110", "success", "HTML Project", "Hoffman Website", "html5"),
        ];

        Self::new(
            rows.into_iter()
                .map(|(id, hours, progress, total, color, kind, title, icon)| Project {
                    id,
                    img: format!("/images/icons/project-icons/{icon}.png"),
                    hours: hours.to_string(),
                    total_task: total.to_string(),
                    project_type: kind.to_string(),
                    project_title: title.to_string(),
                    progress_value: progress,
                    progress_color: color.to_string(),
                })
                .collect(),
        )
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Projects whose title, type, task count, hours or progress contain `q`
    /// (case-insensitive). An empty query returns everything.
    pub fn search(&self, q: &str) -> Vec<&Project> {
        let q = q.to_lowercase();
        self.projects.iter().filter(|p| p.matches(&q)).collect()
    }
}
