use serde::Serialize;

use crate::datasets::DepartmentInfo;

/// At most this many departments are suggested per query.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// One suggested department with the score that ranked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentMatch {
    pub name: String,
    pub score: u32,
    pub details: String,
}

/// Scores each department by tag overlap with the interest text (one point
/// per tag found, case-insensitive) plus one point when the SSC/HSC average
/// clears the department's GPA floor. Zero-score departments are dropped,
/// ties keep catalog order, and only the top three survive.
pub fn recommend_departments(
    departments: &[DepartmentInfo],
    interests: &str,
    ssc_gpa: f32,
    hsc_gpa: f32,
) -> Vec<DepartmentMatch> {
    let interests_lower = interests.to_lowercase();
    let average_gpa = (ssc_gpa + hsc_gpa) / 2.0;

    let mut matches: Vec<DepartmentMatch> = departments
        .iter()
        .filter_map(|department| {
            let mut score = department
                .tags
                .iter()
                .filter(|tag| !tag.is_empty() && interests_lower.contains(&tag.to_lowercase()))
                .count() as u32;
            if average_gpa >= department.min_gpa {
                score += 1;
            }
            (score > 0).then(|| DepartmentMatch {
                name: department.name.clone(),
                score,
                details: department.details.clone(),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_RECOMMENDATIONS);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn department(name: &str, tags: &[&str], min_gpa: f32) -> DepartmentInfo {
        DepartmentInfo {
            name: name.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            min_gpa,
            details: format!("{name} details"),
        }
    }

    #[test]
    fn tags_and_gpa_floor_both_contribute() {
        let departments = vec![
            department("CSE", &["programming", "software"], 3.5),
            department("Business", &["business"], 3.0),
        ];

        let matches =
            recommend_departments(&departments, "I love programming and software design", 4.0, 4.0);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "CSE");
        assert_eq!(matches[0].score, 3);
        assert_eq!(matches[1].name, "Business");
        assert_eq!(matches[1].score, 1);
    }

    #[test]
    fn gpa_bonus_alone_keeps_a_department_in_play() {
        let departments = vec![
            department("Civil", &["structures"], 3.0),
            department("Textile", &["fabrics"], 3.0),
        ];

        let matches = recommend_departments(&departments, "nothing in particular", 3.5, 3.5);

        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|found| found.score == 1));
        // Ties keep catalog order.
        assert_eq!(matches[0].name, "Civil");
        assert_eq!(matches[1].name, "Textile");
    }

    #[test]
    fn zero_score_departments_are_dropped() {
        let departments = vec![department("Pharmacy", &["medicine"], 4.5)];

        let matches = recommend_departments(&departments, "history and literature", 3.0, 3.0);

        assert!(matches.is_empty());
    }

    #[test]
    fn tag_matching_ignores_case() {
        let departments = vec![department("Robotics", &["AI"], 4.9)];

        let matches = recommend_departments(&departments, "interested in ai systems", 3.0, 3.0);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn only_the_top_three_survive() {
        let departments = vec![
            department("A", &[], 2.0),
            department("B", &[], 2.0),
            department("C", &["match"], 2.0),
            department("D", &[], 2.0),
            department("E", &[], 2.0),
        ];

        let matches = recommend_departments(&departments, "match this", 3.0, 3.0);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].name, "C");
        assert_eq!(matches[1].name, "A");
        assert_eq!(matches[2].name, "B");
    }
}
