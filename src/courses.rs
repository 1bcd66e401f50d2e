// src/courses.rs
//! Static skill -> learning-resource catalog. Process-wide, read-only,
//! keyed by lowercase skill name.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
}

/// Learning resource offered next to a missing skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCourseEntry {
    pub level: CourseLevel,
    pub url: &'static str,
}

lazy_static! {
    static ref COURSE_CATALOG: HashMap<&'static str, SkillCourseEntry> = {
        use CourseLevel::{Beginner, Intermediate};

        let mut catalog = HashMap::new();
        let mut add = |skill: &'static str, level: CourseLevel, url: &'static str| {
            catalog.insert(skill, SkillCourseEntry { level, url });
        };

        add("docker", Beginner, "https://www.coursera.org/learn/docker-for-the-absolute-beginner");
        add("kubernetes", Intermediate, "https://www.coursera.org/learn/google-kubernetes-engine");
        add("graphql", Beginner, "https://www.udemy.com/course/graphql-with-react-course/");
        add("next.js", Intermediate, "https://www.udemy.com/course/nextjs-react-the-complete-guide/");
        add("typescript", Beginner, "https://www.udemy.com/course/understanding-typescript/");
        add("react", Beginner, "https://www.coursera.org/learn/react-basics");
        add("node.js", Intermediate, "https://www.udemy.com/course/nodejs-the-complete-guide/");
        add("python", Beginner, "https://www.coursera.org/specializations/python");
        add("django", Intermediate, "https://www.coursera.org/specializations/django");
        add("machine learning", Intermediate, "https://www.coursera.org/specializations/machine-learning-introduction");
        add("tensorflow", Intermediate, "https://www.coursera.org/professional-certificates/tensorflow-in-practice");
        add("aws", Beginner, "https://www.coursera.org/specializations/aws-fundamentals");
        add("aws services", Beginner, "https://www.coursera.org/specializations/aws-fundamentals");
        add("terraform", Intermediate, "https://www.udemy.com/course/terraform-beginner-to-advanced/");
        add("jenkins", Beginner, "https://www.udemy.com/course/jenkins-from-zero-to-hero/");
        add("postgresql", Beginner, "https://www.udemy.com/course/the-complete-python-postgresql-developer-course/");
        add("testing (jest/cypress)", Intermediate, "https://www.udemy.com/course/cypress-tutorial/");

        catalog
    };
}

/// Look up a learning resource for a missing skill. Lookup is by lowercase
/// key, so the caller may pass skill names exactly as the backend sent
/// them. Unknown skills yield `None`.
pub fn course_for_skill(skill: &str) -> Option<&'static SkillCourseEntry> {
    COURSE_CATALOG.get(skill.to_lowercase().as_str())
}
